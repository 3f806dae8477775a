use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use autodrive_core::forms::ContactField;
use crossterm::event::KeyCode;

mod catalog;
mod contacts;
mod detail;
mod favorites;
mod help;
mod home;
mod popup;
mod services;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_overlay(app, key) {
        return;
    }

    if app.interpreter.modal().is_open() {
        popup::handle_popup_input(app, key);
        return;
    }

    if handle_navigation(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Home => home::handle_home_input(app, key),
        AppScreen::Catalog => catalog::handle_catalog_input(app, key),
        AppScreen::Favorites => favorites::handle_favorites_input(app, key),
        AppScreen::Detail => detail::handle_detail_input(app, key),
        AppScreen::Services => services::handle_services_input(app, key),
        AppScreen::Contacts => contacts::handle_contacts_input(app, key),
    }
}

/// Whether keystrokes currently go into a text field.
fn is_typing(app: &App) -> bool {
    match app.screen {
        AppScreen::Home => app.home.editing_search,
        AppScreen::Catalog => app.catalog.editing.is_some(),
        AppScreen::Contacts => !matches!(
            app.contacts.focused_field(),
            None | Some(ContactField::Consent)
        ),
        AppScreen::Favorites | AppScreen::Detail | AppScreen::Services => false,
    }
}

/// Page switching (`Tab`/`BackTab` always, digits when not typing) and the
/// global `q`/`t` keys.
fn handle_navigation(app: &mut App, key: KeyCode) -> bool {
    let len = AppScreen::NAV.len();
    let current = app.screen.nav_index();

    let target = match key {
        KeyCode::Tab => Some(current.map_or(0, |index| wrap_increment(index, len))),
        KeyCode::BackTab => Some(current.map_or(0, |index| wrap_decrement(index, len))),
        KeyCode::Char(ch @ '1'..='5') if !is_typing(app) => {
            ch.to_digit(10).map(|digit| digit as usize - 1)
        }
        KeyCode::Char('q') if !is_typing(app) => {
            app.running = false;
            return true;
        }
        KeyCode::Char('t') if !is_typing(app) => {
            app.toggle_theme();
            return true;
        }
        _ => None,
    };

    let Some(screen) = target.and_then(|index| AppScreen::NAV.get(index).copied()) else {
        return false;
    };
    app.home.editing_search = false;
    app.catalog.editing = None;
    app.go_to(screen);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodrive_core::{Dataset, MemoryStore};
    use std::rc::Rc;

    fn app() -> App {
        App::new(Dataset::bundled(), Rc::new(MemoryStore::new()))
    }

    #[test]
    fn tab_walks_the_navigation_bar() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, AppScreen::Catalog);
        dispatch_input(&mut app, KeyCode::BackTab);
        dispatch_input(&mut app, KeyCode::BackTab);
        assert_eq!(app.screen, AppScreen::Contacts);
    }

    #[test]
    fn digits_jump_unless_typing() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Char('4'));
        assert_eq!(app.screen, AppScreen::Services);

        dispatch_input(&mut app, KeyCode::Char('5'));
        assert_eq!(app.screen, AppScreen::Contacts);
        // The name field has focus, so digits are text.
        dispatch_input(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen, AppScreen::Contacts);
        assert_eq!(app.contacts.form.name, "2");
    }

    #[test]
    fn q_quits_and_t_switches_theme() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Char('t'));
        assert!(app.theme.is_dark());
        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
