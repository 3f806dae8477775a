use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, ServicesRow};
use autodrive_core::forms::services::{ServiceKind, Urgency};
use crossterm::event::KeyCode;

pub fn handle_services_input(app: &mut App, key: KeyCode) {
    let services = &mut app.services;
    match key {
        KeyCode::Esc => {
            app.go_to(AppScreen::Home);
            return;
        }
        KeyCode::Up => services.cursor = services.cursor.saturating_sub(1),
        KeyCode::Down => services.cursor = (services.cursor + 1).min(ServicesRow::COUNT - 1),
        KeyCode::Left | KeyCode::Right => {
            let forward = key == KeyCode::Right;
            match services.row() {
                ServicesRow::Service => {
                    let len = ServiceKind::ALL.len();
                    services.service = if forward {
                        wrap_increment(services.service, len)
                    } else {
                        wrap_decrement(services.service, len)
                    };
                }
                ServicesRow::Urgency => services.urgency = toggled(services.urgency),
                _ => {}
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => match services.row() {
            ServicesRow::Urgency => services.urgency = toggled(services.urgency),
            ServicesRow::Wash => services.wash = !services.wash,
            ServicesRow::Report => services.report = !services.report,
            ServicesRow::Faq(index) => services.accordion.toggle(index),
            ServicesRow::Service | ServicesRow::Calculate => {
                if key == KeyCode::Enter {
                    app.calculate_quote();
                }
            }
        },
        _ => {}
    }
}

const fn toggled(urgency: Urgency) -> Urgency {
    match urgency {
        Urgency::Standard => Urgency::Urgent,
        Urgency::Urgent => Urgency::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodrive_core::{Dataset, MemoryStore};
    use std::rc::Rc;

    fn app() -> App {
        let mut app = App::new(Dataset::bundled(), Rc::new(MemoryStore::new()));
        app.go_to(AppScreen::Services);
        app
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            handle_services_input(app, *key);
        }
    }

    #[test]
    fn urgent_maintenance_with_wash() {
        let mut app = app();
        // maintenance
        press(&mut app, &[KeyCode::Right]);
        // urgent, wash
        press(&mut app, &[KeyCode::Down, KeyCode::Char(' '), KeyCode::Down, KeyCode::Char(' ')]);
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);

        // (8000 + 1500) * 1.2
        assert_eq!(app.services.quote, Some(11_400));
        assert_eq!(app.toast_text(), Some("Стоимость рассчитана"));
    }

    #[test]
    fn faq_keeps_one_item_open() {
        let mut app = app();
        app.services.cursor = ServicesRow::CALCULATOR_ROWS;
        press(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);

        assert_eq!(app.services.accordion.open_item(), Some(1));

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.services.accordion.open_item(), None);
    }

    #[test]
    fn cursor_stops_at_last_row() {
        let mut app = app();
        for _ in 0..20 {
            handle_services_input(&mut app, KeyCode::Down);
        }
        assert_eq!(app.services.cursor, ServicesRow::COUNT - 1);
    }
}
