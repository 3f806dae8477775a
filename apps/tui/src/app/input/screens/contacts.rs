use crate::app::input::helpers::edit_text;
use crate::app::state::{App, AppScreen, ContactsState};
use autodrive_core::forms::phone;
use autodrive_core::forms::ContactField;
use crossterm::event::KeyCode;

pub fn handle_contacts_input(app: &mut App, key: KeyCode) {
    let contacts = &mut app.contacts;
    match key {
        KeyCode::Esc => {
            contacts.set_focus(0);
            app.go_to(AppScreen::Home);
        }
        KeyCode::Up => contacts.set_focus(contacts.focus.saturating_sub(1)),
        KeyCode::Down => contacts.set_focus((contacts.focus + 1).min(ContactsState::SUBMIT)),
        KeyCode::Enter => app.submit_contact(),
        KeyCode::Char(' ') if contacts.focus == ContactsState::SUBMIT => app.submit_contact(),
        KeyCode::Char(' ') if contacts.focused_field() == Some(ContactField::Consent) => {
            contacts.form.consent = !contacts.form.consent;
        }
        other => {
            if contacts.focused_field() == Some(ContactField::Phone) {
                edit_phone(&mut contacts.form.phone, other);
            } else if let Some(text) = contacts.focused_text_mut() {
                edit_text(text, other);
            }
        }
    }
}

/// Typing re-applies the mask; backspace drops the last digit so the
/// mask's punctuation never gets in the way.
fn edit_phone(value: &mut String, key: KeyCode) {
    match key {
        KeyCode::Backspace => {
            let mut digits: String = value.chars().filter(char::is_ascii_digit).collect();
            digits.pop();
            *value = if digits.len() <= 1 {
                phone::mask("")
            } else {
                phone::mask(&digits)
            };
        }
        KeyCode::Char(ch) => {
            value.push(ch);
            *value = phone::mask(value);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodrive_core::{Dataset, MemoryStore};
    use std::rc::Rc;

    fn app() -> App {
        let mut app = App::new(Dataset::bundled(), Rc::new(MemoryStore::new()));
        app.go_to(AppScreen::Contacts);
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_contacts_input(app, KeyCode::Char(ch));
        }
    }

    fn fill(app: &mut App) {
        type_text(app, "Анна");
        handle_contacts_input(app, KeyCode::Down);
        type_text(app, "9991234567");
        handle_contacts_input(app, KeyCode::Down);
        type_text(app, "anna@example.ru");
        handle_contacts_input(app, KeyCode::Down);
        type_text(app, "Хочу на тест-драйв");
        handle_contacts_input(app, KeyCode::Down);
        handle_contacts_input(app, KeyCode::Char(' '));
    }

    #[test]
    fn phone_is_masked_live() {
        let mut app = app();
        handle_contacts_input(&mut app, KeyCode::Down);
        assert_eq!(app.contacts.form.phone, "+7");

        type_text(&mut app, "999123");
        assert_eq!(app.contacts.form.phone, "+7 (999) 123");

        handle_contacts_input(&mut app, KeyCode::Backspace);
        handle_contacts_input(&mut app, KeyCode::Backspace);
        handle_contacts_input(&mut app, KeyCode::Backspace);
        assert_eq!(app.contacts.form.phone, "+7 (999)");
    }

    #[test]
    fn bare_prefix_is_cleared_on_blur() {
        let mut app = app();
        handle_contacts_input(&mut app, KeyCode::Down);
        handle_contacts_input(&mut app, KeyCode::Down);
        assert_eq!(app.contacts.form.phone, "");
    }

    #[test]
    fn empty_submit_flags_every_field() {
        let mut app = app();
        handle_contacts_input(&mut app, KeyCode::Enter);

        assert_eq!(app.contacts.errors.fields(), ContactField::ALL.as_slice());
        assert!(!app.contacts.success);
        assert!(app.contacts.last_lead.is_none());
    }

    #[test]
    fn valid_submit_saves_lead_and_resets() {
        let mut app = app();
        fill(&mut app);
        handle_contacts_input(&mut app, KeyCode::Enter);

        assert!(app.contacts.success);
        assert!(app.contacts.errors.is_empty());
        assert_eq!(app.contacts.form.name, "");
        assert_eq!(app.toast_text(), Some("Форма отправлена"));
        let lead = app.contacts.last_lead.clone().unwrap();
        assert_eq!(lead.phone, "+7 (999) 123-45-67");
        assert_eq!(app.leads.last(), Some(lead));
    }
}
