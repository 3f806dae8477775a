use crate::app::state::App;
use autodrive_core::{Command, FavoriteStyle};
use crossterm::event::KeyCode;

/// Quick view: `f` toggles the shown vehicle, `Enter`/`o` opens its page,
/// `Esc` closes.
pub fn handle_popup_input(app: &mut App, key: KeyCode) {
    let Some(id) = app.popup_vehicle().map(|vehicle| vehicle.id.clone()) else {
        app.close_popup();
        return;
    };

    match key {
        KeyCode::Esc => app.close_popup(),
        KeyCode::Char('f') => app.dispatch(&favorite_command(id)),
        KeyCode::Enter | KeyCode::Char('o') => {
            app.close_popup();
            app.open_detail(&id);
        }
        _ => {}
    }
}

/// The quick view's favorite control is the text-label one.
fn favorite_command(id: String) -> Command {
    Command::ToggleFavorite {
        id,
        style: FavoriteStyle::Label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodrive_core::{render, Dataset, MemoryStore};
    use std::rc::Rc;

    #[test]
    fn f_issues_the_modal_label_toggle() {
        let dataset = Dataset::bundled();
        let vehicle = dataset.find("kia-rio-2021").unwrap();
        let command = favorite_command(vehicle.id.clone());
        assert!(render::modal_body(vehicle, false).contains(&command.attributes()));

        let mut app = App::new(dataset.clone(), Rc::new(MemoryStore::new()));
        app.open_popup("kia-rio-2021");
        handle_popup_input(&mut app, KeyCode::Char('f'));

        assert!(app.favorites.contains("kia-rio-2021"));
        assert!(app.popup_vehicle().is_some());
    }
}
