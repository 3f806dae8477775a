use crate::app::input::helpers::{cycle_choice, edit_text, move_cursor, wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, CatalogField};
use autodrive_core::{Category, FavoriteStyle, SortMode};
use crossterm::event::KeyCode;

pub fn handle_catalog_input(app: &mut App, key: KeyCode) {
    if let Some(field) = app.catalog.editing {
        handle_field_input(app, field, key);
        app.catalog.selected = 0;
        return;
    }

    let total_rows = app.catalog_view().count();
    if let Some(index) = move_cursor(app.catalog.selected, total_rows, key) {
        app.catalog.selected = index;
        return;
    }

    match key {
        KeyCode::Esc => {
            if app.catalog.selection.query.is_empty() {
                app.go_to(AppScreen::Home);
            } else {
                app.catalog.selection.query.clear();
            }
        }
        KeyCode::Char('/') => app.catalog.editing = Some(CatalogField::Query),
        KeyCode::Char('m') => app.catalog.editing = Some(CatalogField::MinPrice),
        KeyCode::Char('M') => app.catalog.editing = Some(CatalogField::MaxPrice),
        KeyCode::Char(ch @ ('b' | 'B')) => {
            let brands = app.dataset.brands();
            let next = cycle_choice(&brands, app.catalog.selection.brand.as_deref(), ch == 'b');
            app.catalog.selection.set_brand(next.as_deref().unwrap_or("all"));
        }
        KeyCode::Char(ch @ ('d' | 'D')) => {
            let drives = app.dataset.drives();
            let next = cycle_choice(&drives, app.catalog.selection.drive.as_deref(), ch == 'd');
            app.catalog.selection.set_drive(next.as_deref().unwrap_or("all"));
        }
        KeyCode::Char(ch @ ('c' | 'C')) => {
            let categories = Category::ALL.map(Category::as_str);
            let current = app.catalog.selection.category.map(Category::as_str);
            let next = cycle_choice(&categories, current, ch == 'c');
            app.catalog.selection.set_category(next.as_deref().unwrap_or("all"));
        }
        KeyCode::Char(ch @ ('s' | 'S')) => {
            let len = SortMode::ALL.len();
            let index = SortMode::ALL
                .iter()
                .position(|mode| *mode == app.catalog.selection.sort)
                .unwrap_or(0);
            let next = if ch == 's' {
                wrap_increment(index, len)
            } else {
                wrap_decrement(index, len)
            };
            app.catalog.selection.sort = SortMode::ALL[next];
        }
        KeyCode::Char('v') => {
            app.catalog.selection.favorites_only = !app.catalog.selection.favorites_only;
        }
        KeyCode::Char('r') => app.catalog.reset(),
        KeyCode::Enter => {
            if let Some(id) = selected_id(app) {
                app.open_popup(&id);
            }
        }
        KeyCode::Char('o') => {
            if let Some(id) = selected_id(app) {
                app.open_detail(&id);
            }
        }
        KeyCode::Char('f') => {
            if let Some(id) = selected_id(app) {
                app.toggle_favorite(&id, FavoriteStyle::Icon);
            }
            return;
        }
        _ => return,
    }

    app.clamp_cursors();
}

/// Live filtering: every keystroke updates the selection, as the site's
/// `input` listeners do.
fn handle_field_input(app: &mut App, field: CatalogField, key: KeyCode) {
    if matches!(key, KeyCode::Esc | KeyCode::Enter) {
        app.catalog.editing = None;
        return;
    }

    let catalog = &mut app.catalog;
    match field {
        CatalogField::Query => {
            edit_text(&mut catalog.selection.query, key);
        }
        CatalogField::MinPrice => {
            if accepts_price_key(key) && edit_text(&mut catalog.min_input, key) {
                catalog.selection.set_min_price(&catalog.min_input);
            }
        }
        CatalogField::MaxPrice => {
            if accepts_price_key(key) && edit_text(&mut catalog.max_input, key) {
                catalog.selection.set_max_price(&catalog.max_input);
            }
        }
    }
}

const fn accepts_price_key(key: KeyCode) -> bool {
    matches!(key, KeyCode::Backspace | KeyCode::Char('0'..='9'))
}

fn selected_id(app: &App) -> Option<String> {
    app.selected_vehicle().map(|vehicle| vehicle.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodrive_core::{Dataset, MemoryStore};
    use std::rc::Rc;

    fn app() -> App {
        let mut app = App::new(Dataset::bundled(), Rc::new(MemoryStore::new()));
        app.go_to(AppScreen::Catalog);
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_catalog_input(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn query_filters_while_typing() {
        let mut app = app();
        handle_catalog_input(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "kia");
        handle_catalog_input(&mut app, KeyCode::Enter);

        let view = app.catalog_view();
        assert!(!view.is_empty());
        assert!(view.items.iter().all(|vehicle| vehicle.mentions("kia")));
        assert_eq!(app.catalog.editing, None);
    }

    #[test]
    fn price_input_ignores_letters() {
        let mut app = app();
        handle_catalog_input(&mut app, KeyCode::Char('m'));
        type_text(&mut app, "1x5");
        handle_catalog_input(&mut app, KeyCode::Esc);

        assert_eq!(app.catalog.min_input, "15");
        assert_eq!(app.catalog.selection.min_price, Some(15));
    }

    #[test]
    fn brand_cycles_back_to_all() {
        let mut app = app();
        let brands = app.dataset.brands().len();
        for _ in 0..brands {
            handle_catalog_input(&mut app, KeyCode::Char('b'));
        }
        assert!(app.catalog.selection.brand.is_some());
        handle_catalog_input(&mut app, KeyCode::Char('b'));
        assert_eq!(app.catalog.selection.brand, None);
    }

    #[test]
    fn sort_cycles_through_every_mode() {
        let mut app = app();
        assert_eq!(app.catalog.selection.sort, SortMode::Popular);
        handle_catalog_input(&mut app, KeyCode::Char('s'));
        assert_eq!(app.catalog.selection.sort, SortMode::PriceAsc);
        handle_catalog_input(&mut app, KeyCode::Char('S'));
        handle_catalog_input(&mut app, KeyCode::Char('S'));
        assert_eq!(app.catalog.selection.sort, SortMode::Natural);
    }

    #[test]
    fn favorites_only_then_reset() {
        let mut app = app();
        handle_catalog_input(&mut app, KeyCode::Char('v'));
        assert!(app.catalog_view().is_empty());

        handle_catalog_input(&mut app, KeyCode::Char('r'));
        assert_eq!(app.catalog_view().count(), app.dataset.len());
    }

    #[test]
    fn unfavoriting_under_favorites_only_keeps_cursor_valid() {
        let mut app = app();
        let ids: Vec<String> = app.dataset.vehicles()[..2]
            .iter()
            .map(|vehicle| vehicle.id.clone())
            .collect();
        for id in &ids {
            app.favorites.toggle(id).unwrap();
        }
        handle_catalog_input(&mut app, KeyCode::Char('v'));
        handle_catalog_input(&mut app, KeyCode::End);
        assert_eq!(app.catalog.selected, 1);

        handle_catalog_input(&mut app, KeyCode::Char('f'));

        assert_eq!(app.catalog_view().count(), 1);
        assert_eq!(app.catalog.selected, 0);
    }
}
