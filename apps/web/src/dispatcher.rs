//! The single delegated click/key handler for commands rendered into the
//! page, plus the favorites observers that keep every favorite control in
//! sync.

use crate::dom;
use crate::site::{Site, Store};
use autodrive_core::render::{favorite_icon, favorite_label};
use autodrive_core::{Command, Effect, FavoritesStore, Interpreter, Subscription};
use gloo_events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

const COMMAND_SELECTOR: &str = "[data-command], [data-close-modal]";

pub struct Dispatcher {
    _listeners: Vec<EventListener>,
    _subscriptions: Vec<Subscription>,
}

impl Dispatcher {
    pub fn mount(site: &Site) -> Option<Self> {
        let document = dom::document()?;
        let interpreter = Rc::new(Interpreter::new(
            Rc::clone(&site.dataset),
            Rc::clone(&site.favorites),
        ));

        let on_click = {
            let interpreter = Rc::clone(&interpreter);
            EventListener::new(&document, "click", move |event: &Event| {
                let Some(command) = command_for(event) else {
                    return;
                };
                run(&interpreter, &command);
            })
        };

        let on_key = EventListener::new(&document, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() == "Escape" {
                run(&interpreter, &Command::CloseModal);
            }
        });

        let controls = {
            let favorites = Rc::downgrade(&site.favorites);
            site.favorites.subscribe(move |_| {
                if let Some(favorites) = favorites.upgrade() {
                    refresh_favorite_controls(&favorites);
                }
            })
        };
        let toast = {
            let toast = Rc::clone(&site.toast);
            site.favorites
                .subscribe(move |change| toast.show(change.notice()))
        };

        Some(Self {
            _listeners: vec![on_click, on_key],
            _subscriptions: vec![controls, toast],
        })
    }
}

fn command_for(event: &Event) -> Option<Command> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let control = target.closest(COMMAND_SELECTOR).ok()??;
    if control.has_attribute("data-close-modal") {
        return Some(Command::CloseModal);
    }
    let kind = control.get_attribute("data-command")?;
    Command::parse(&kind, control.get_attribute("data-id").as_deref())
}

fn run(interpreter: &Interpreter<Store>, command: &Command) {
    match interpreter.dispatch(command) {
        Ok(effect) => apply(effect),
        Err(e) => dom::log_error(&format!("{} failed: {e}", command.kind())),
    }
}

fn apply(effect: Effect) {
    match effect {
        Effect::ShowModal { body, .. } => {
            let (Some(modal), Some(slot)) = (dom::by_id("carModal"), dom::by_id("modalBody"))
            else {
                return;
            };
            slot.set_inner_html(&body);
            show_modal(&modal, true);
        }
        Effect::HideModal => {
            if let Some(modal) = dom::by_id("carModal") {
                show_modal(&modal, false);
            }
        }
        // Controls, badges and page grids follow through their subscriptions.
        Effect::FavoriteToggled { .. } | Effect::Ignored => {}
    }
}

fn show_modal(modal: &Element, open: bool) {
    dom::set_class(modal, "show", open);
    let _ = modal.set_attribute("aria-hidden", if open { "false" } else { "true" });
    dom::lock_scroll(open);
}

/// Re-reads the favorites set and repaints every favorite button on the page.
fn refresh_favorite_controls(favorites: &FavoritesStore<Store>) {
    let ids = favorites.list();
    let is_favorite =
        |button: &Element| button.get_attribute("data-id").is_some_and(|id| ids.contains(&id));

    for button in dom::query_all(r#"[data-command="toggle-favorite"]"#) {
        let active = is_favorite(&button);
        dom::set_class(&button, "active", active);
        dom::set_text(&button, favorite_icon(active));
    }
    for button in dom::query_all(r#"[data-command="toggle-favorite-label"]"#) {
        dom::set_text(&button, favorite_label(is_favorite(&button)));
    }
}
