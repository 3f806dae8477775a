use crate::app::input::helpers::{edit_text, move_cursor, wrap_increment};
use crate::app::state::App;
use autodrive_core::pages;
use autodrive_core::FavoriteStyle;
use crossterm::event::KeyCode;
use std::time::Instant;

pub fn handle_home_input(app: &mut App, key: KeyCode) {
    if app.home.editing_search {
        match key {
            KeyCode::Esc => app.home.editing_search = false,
            KeyCode::Enter => app.submit_home_search(),
            other => {
                edit_text(&mut app.home.search, other);
            }
        }
        return;
    }

    if let Some(index) = move_cursor(app.home.selected, app.home.featured.len(), key) {
        app.home.selected = index;
        return;
    }

    match key {
        KeyCode::Left => {
            app.home.slideshow.prev();
        }
        KeyCode::Right => {
            app.home.slideshow.next();
        }
        KeyCode::Char(' ') => {
            app.home.paused = !app.home.paused;
            app.home.last_advance = Instant::now();
        }
        KeyCode::Char('/') => app.home.editing_search = true,
        KeyCode::Char('c') => {
            app.home.search_category =
                wrap_increment(app.home.search_category, pages::category_choices().count());
        }
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
        KeyCode::Char('s') => {
            if let Some(id) = app.home.slide_id().map(str::to_owned) {
                app.open_detail(&id);
            }
        }
        KeyCode::Char('f') => {
            if let Some(id) = selected_id(app) {
                app.toggle_favorite(&id, FavoriteStyle::Icon);
            }
        }
        _ => {}
    }
}

fn selected_id(app: &App) -> Option<String> {
    app.selected_vehicle().map(|vehicle| vehicle.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppScreen;
    use autodrive_core::{Category, Dataset, MemoryStore};
    use std::rc::Rc;

    fn app() -> App {
        App::new(Dataset::bundled(), Rc::new(MemoryStore::new()))
    }

    #[test]
    fn hero_search_opens_filtered_catalog() {
        let mut app = app();
        handle_home_input(&mut app, KeyCode::Char('/'));
        for ch in "kia".chars() {
            handle_home_input(&mut app, KeyCode::Char(ch));
        }
        app.home.search_category = 2;
        handle_home_input(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, AppScreen::Catalog);
        assert_eq!(app.catalog.selection.query, "kia");
        assert_eq!(app.catalog.selection.category, Some(Category::Crossover));
        assert!(!app.home.editing_search);
    }

    #[test]
    fn arrows_move_the_slideshow() {
        let mut app = app();
        let len = app.home.slideshow.len();
        handle_home_input(&mut app, KeyCode::Left);
        assert_eq!(app.home.slideshow.current(), len - 1);
        handle_home_input(&mut app, KeyCode::Right);
        assert_eq!(app.home.slideshow.current(), 0);
    }

    #[test]
    fn cursor_stays_within_the_three_featured() {
        let mut app = app();
        assert_eq!(app.home.featured.len(), 3);
        handle_home_input(&mut app, KeyCode::End);
        assert_eq!(app.home.selected, 2);
        handle_home_input(&mut app, KeyCode::Down);
        assert_eq!(app.home.selected, 2);
    }

    #[test]
    fn arrows_keep_the_autoplay_clock() {
        let mut app = app();
        let started = app.home.last_advance;
        handle_home_input(&mut app, KeyCode::Right);
        handle_home_input(&mut app, KeyCode::Left);
        assert_eq!(app.home.last_advance, started);
    }

    #[test]
    fn f_toggles_the_selected_featured_vehicle() {
        let mut app = app();
        let id = app.home.featured[0].clone();

        handle_home_input(&mut app, KeyCode::Char('f'));

        assert!(app.favorites.contains(&id));
        assert_eq!(app.toast_text(), Some("Добавлено в избранное"));
    }

    #[test]
    fn enter_opens_quick_view() {
        let mut app = app();
        handle_home_input(&mut app, KeyCode::Down);
        handle_home_input(&mut app, KeyCode::Enter);

        assert_eq!(
            app.popup_vehicle().map(|vehicle| vehicle.id.clone()),
            Some(app.home.featured[1].clone())
        );
    }
}
