//! Initializers shared by every page: footer year, theme, burger menu,
//! active nav link, favorites badges and the back-to-top button.

use crate::dom;
use crate::site::Site;
use autodrive_core::pages::Page;
use autodrive_core::{Subscription, Theme};
use chrono::Datelike;
use gloo_events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{ScrollBehavior, ScrollToOptions};

const BACK_TOP_THRESHOLD: f64 = 250.0;

pub struct Base {
    _listeners: Vec<EventListener>,
    _badges: Subscription,
}

impl Base {
    pub fn mount(site: &Site) -> Self {
        let mut listeners = Vec::new();

        set_year();
        listeners.extend(setup_theme(site));
        listeners.extend(setup_burger());
        set_active_nav();
        listeners.extend(setup_back_top());

        update_badges(site.favorites.count());
        let badges = site
            .favorites
            .subscribe(|change| update_badges(change.count));

        Self {
            _listeners: listeners,
            _badges: badges,
        }
    }
}

fn set_year() {
    if let Some(year) = dom::by_id("year") {
        dom::set_text(&year, &chrono::Local::now().year().to_string());
    }
}

fn apply_theme(theme: Theme, button: &web_sys::Element) {
    if let Some(body) = dom::document().and_then(|document| document.body()) {
        dom::set_class(&body, "dark", theme.is_dark());
    }
    dom::set_text(button, theme.icon());
}

fn setup_theme(site: &Site) -> Vec<EventListener> {
    let Some(button) = dom::by_id("themeBtn") else {
        return Vec::new();
    };

    let theme = Rc::new(Cell::new(Theme::load(&*site.store)));
    apply_theme(theme.get(), &button);

    let store = Rc::clone(&site.store);
    let target = button.clone();
    let listener = EventListener::new(&button, "click", move |_| {
        let next = theme.get().toggled();
        if let Err(e) = next.save(&*store) {
            dom::log_error(&format!("theme not saved: {e}"));
        }
        theme.set(next);
        apply_theme(next, &target);
    });
    vec![listener]
}

fn setup_burger() -> Vec<EventListener> {
    let (Some(burger), Some(nav)) = (dom::by_id("burgerBtn"), dom::by_id("mainNav")) else {
        return Vec::new();
    };

    let mut listeners = Vec::new();
    let menu = nav.clone();
    listeners.push(EventListener::new(&burger, "click", move |_| {
        let _ = menu.class_list().toggle("open");
    }));

    if let Ok(links) = nav.query_selector_all(".nav-link") {
        for index in 0..links.length() {
            let Some(link) = links.get(index) else {
                continue;
            };
            let menu = nav.clone();
            listeners.push(EventListener::new(&link, "click", move |_| {
                dom::set_class(&menu, "open", false);
            }));
        }
    }
    listeners
}

fn set_active_nav() {
    let Some(path) = dom::window().and_then(|window| window.location().pathname().ok()) else {
        return;
    };
    let current = Page::current_file(&path);
    for link in dom::query_all(".nav-link") {
        if link.get_attribute("href").as_deref() == Some(current) {
            dom::set_class(&link, "active", true);
        }
    }
}

/// Writes the favorites count into every badge on the page.
pub fn update_badges(count: usize) {
    let count = count.to_string();
    for badge in dom::query_all("#favBadge") {
        dom::set_text(&badge, &count);
    }
    if let Some(page_count) = dom::by_id("favoritesCountPage") {
        dom::set_text(&page_count, &count);
    }
}

fn setup_back_top() -> Vec<EventListener> {
    let (Some(button), Some(window)) = (dom::by_id("backTop"), dom::window()) else {
        return Vec::new();
    };

    let toggle = {
        let button = button.clone();
        let window = window.clone();
        move || {
            let scrolled = window.scroll_y().unwrap_or(0.0);
            dom::set_class(&button, "show", scrolled > BACK_TOP_THRESHOLD);
        }
    };
    toggle();

    let on_scroll = EventListener::new(&window, "scroll", move |_| toggle());
    let on_click = EventListener::new(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    });
    vec![on_scroll, on_click]
}
