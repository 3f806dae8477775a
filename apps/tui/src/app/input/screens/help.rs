use crate::app::state::App;
use crossterm::event::KeyCode;

/// `F1` opens and closes the key reference. While it is shown it swallows
/// every key; `Esc` also dismisses it.
pub fn handle_help_overlay(app: &mut App, key: KeyCode) -> bool {
    match (app.show_help, key) {
        (_, KeyCode::F(1)) | (true, KeyCode::Esc) => {
            app.show_help = !app.show_help;
            true
        }
        (shown, _) => shown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppScreen;
    use autodrive_core::{Dataset, MemoryStore};
    use std::rc::Rc;

    #[test]
    fn overlay_swallows_keys_until_dismissed() {
        let mut app = App::new(Dataset::bundled(), Rc::new(MemoryStore::new()));
        assert!(!handle_help_overlay(&mut app, KeyCode::Tab));

        assert!(handle_help_overlay(&mut app, KeyCode::F(1)));
        assert!(app.show_help);
        assert!(handle_help_overlay(&mut app, KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.screen, AppScreen::Home);

        assert!(handle_help_overlay(&mut app, KeyCode::Esc));
        assert!(!app.show_help);
    }
}
