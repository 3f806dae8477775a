use crate::app::input::helpers::move_cursor;
use crate::app::state::{App, AppScreen};
use autodrive_core::FavoriteStyle;
use crossterm::event::KeyCode;

pub fn handle_favorites_input(app: &mut App, key: KeyCode) {
    let total_rows = app.favorite_vehicles().len();
    if let Some(index) = move_cursor(app.favorites_index, total_rows, key) {
        app.favorites_index = index;
        return;
    }

    let selected = app.selected_vehicle().map(|vehicle| vehicle.id.clone());
    match key {
        KeyCode::Esc => app.go_to(AppScreen::Home),
        KeyCode::Char('x') => {
            // Same as the disabled clear button on an empty list.
            if total_rows > 0 {
                app.clear_favorites();
            }
        }
        KeyCode::Enter => {
            if let Some(id) = selected {
                app.open_popup(&id);
            }
        }
        KeyCode::Char('o') => {
            if let Some(id) = selected {
                app.open_detail(&id);
            }
        }
        KeyCode::Char('f') => {
            if let Some(id) = selected {
                app.toggle_favorite(&id, FavoriteStyle::Icon);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodrive_core::{Dataset, MemoryStore};
    use std::rc::Rc;

    fn app_with(ids: &[&str]) -> App {
        let mut app = App::new(Dataset::bundled(), Rc::new(MemoryStore::new()));
        for id in ids {
            app.favorites.toggle(id).unwrap();
        }
        app.go_to(AppScreen::Favorites);
        app
    }

    #[test]
    fn lists_in_dataset_order() {
        let app = app_with(&["kia-rio-2021", "toyota-camry-2022"]);
        let ids: Vec<&str> = app
            .favorite_vehicles()
            .iter()
            .map(|vehicle| vehicle.id.as_str())
            .collect();
        assert_eq!(ids, vec!["toyota-camry-2022", "kia-rio-2021"]);
    }

    #[test]
    fn clear_empties_and_toasts() {
        let mut app = app_with(&["kia-rio-2021", "vw-polo-2020"]);
        handle_favorites_input(&mut app, KeyCode::Char('x'));

        assert_eq!(app.favorites.count(), 0);
        assert_eq!(app.toast_text(), Some("Избранное очищено"));
    }

    #[test]
    fn clear_on_empty_list_does_nothing() {
        let mut app = app_with(&[]);
        handle_favorites_input(&mut app, KeyCode::Char('x'));
        assert_eq!(app.toast_text(), None);
    }

    #[test]
    fn removing_last_row_moves_cursor_up() {
        let mut app = app_with(&["kia-rio-2021", "toyota-camry-2022"]);
        handle_favorites_input(&mut app, KeyCode::Down);
        handle_favorites_input(&mut app, KeyCode::Char('f'));

        assert!(!app.favorites.contains("kia-rio-2021"));
        assert_eq!(app.favorites_index, 0);
        assert_eq!(app.toast_text(), Some("Удалено из избранного"));
    }
}
