use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use autodrive_core::FavoriteStyle;
use crossterm::event::KeyCode;

pub fn handle_detail_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Esc {
        app.close_detail();
        return;
    }

    let Some(state) = app.detail.as_mut() else {
        return;
    };
    let id = state.id.clone();

    match key {
        KeyCode::Left | KeyCode::Right => {
            let len = state.gallery.thumbs().len();
            let current = state.gallery.active_index();
            let next = if key == KeyCode::Right {
                wrap_increment(current, len)
            } else {
                wrap_decrement(current, len)
            };
            state.gallery.select(next);
        }
        KeyCode::Up => state.similar_index = state.similar_index.saturating_sub(1),
        KeyCode::Down => {
            state.similar_index = (state.similar_index + 1).min(state.similar.len().saturating_sub(1));
        }
        KeyCode::Enter => {
            if let Some(similar) = state.similar.get(state.similar_index).cloned() {
                app.open_detail(&similar);
            }
        }
        KeyCode::Char('p') => app.open_popup(&id),
        KeyCode::Char('f') => app.toggle_favorite(&id, FavoriteStyle::Label),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppScreen;
    use autodrive_core::{Dataset, MemoryStore};
    use std::rc::Rc;

    fn app() -> App {
        App::new(Dataset::bundled(), Rc::new(MemoryStore::new()))
    }

    #[test]
    fn unknown_vehicle_shows_not_found_and_esc_returns() {
        let mut app = app();
        app.go_to(AppScreen::Catalog);
        app.open_detail("no-such-car");

        assert_eq!(app.screen, AppScreen::Detail);
        assert!(app.detail.is_none());

        handle_detail_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, AppScreen::Catalog);
    }

    #[test]
    fn thumbs_wrap_around() {
        let mut app = app();
        app.open_detail("kia-rio-2021");

        handle_detail_input(&mut app, KeyCode::Left);
        let gallery = &app.detail.as_ref().unwrap().gallery;
        assert_eq!(gallery.active_index(), gallery.thumbs().len() - 1);
    }

    #[test]
    fn similar_navigation_keeps_return_target() {
        let mut app = app();
        app.go_to(AppScreen::Favorites);
        app.open_detail("kia-rio-2021");
        let similar = app.detail.as_ref().unwrap().similar.clone();
        assert!(!similar.is_empty());

        handle_detail_input(&mut app, KeyCode::Enter);
        assert_eq!(app.detail.as_ref().unwrap().id, similar[0]);

        handle_detail_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, AppScreen::Favorites);
    }

    #[test]
    fn f_toggles_the_shown_vehicle() {
        let mut app = app();
        app.open_detail("kia-rio-2021");
        handle_detail_input(&mut app, KeyCode::Char('f'));
        assert!(app.favorites.contains("kia-rio-2021"));
    }
}
