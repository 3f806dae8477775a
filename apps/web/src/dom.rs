//! Thin lookups over the current document. Every helper returns `None` (or
//! does nothing) when the element is missing, so page code can bail out with
//! `let … else`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, UrlSearchParams, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|window| window.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|document| document.get_element_by_id(id))
}

/// Looks up `id` and casts it to a concrete element type.
pub fn typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|element| element.dyn_into::<T>().ok())
}

/// All elements matching `selector` in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|document| document.query_selector_all(selector).ok())
    else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn query_param(name: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

pub fn navigate(href: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(href) {
            log_error(&format!("navigation to {href} failed: {e:?}"));
        }
    }
}

/// Suppresses or restores page scroll while an overlay is open.
pub fn lock_scroll(locked: bool) {
    let Some(body) = document().and_then(|document| document.body()) else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
