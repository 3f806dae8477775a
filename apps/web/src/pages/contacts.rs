use crate::dom;
use crate::site::{Site, Store};
use autodrive_core::forms::contact::{ContactField, ContactForm, Lead, LeadBook, SubmitError, SUCCESS_TEXT};
use autodrive_core::forms::phone;
use autodrive_core::Notice;
use gloo_events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

/// Phone masks (on any page) and the contact form.
pub struct ContactsPage {
    _listeners: Vec<EventListener>,
}

impl ContactsPage {
    pub fn mount(site: &Site) -> Option<Self> {
        let mut listeners = phone_masks();

        if let Some(form) = dom::typed::<HtmlFormElement>("contactForm") {
            let book = Rc::new(LeadBook::new(Rc::clone(&site.store)));
            if let Some(lead) = book.last() {
                show_note(&lead);
            }

            let toast = Rc::clone(&site.toast);
            let target = form.clone();
            listeners.push(EventListener::new_with_options(
                &form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    event.prevent_default();
                    submit(&book, &target, &toast);
                },
            ));
        }

        if listeners.is_empty() {
            None
        } else {
            Some(Self {
                _listeners: listeners,
            })
        }
    }
}

fn phone_masks() -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for input in dom::query_all(".js-phone-mask") {
        for event in ["input", "focus"] {
            listeners.push(EventListener::new(&input, event, |event: &Event| {
                if let Some(input) = input_of(event) {
                    input.set_value(&phone::mask(&input.value()));
                }
            }));
        }
        listeners.push(EventListener::new(&input, "blur", |event: &Event| {
            if let Some(input) = input_of(event) {
                input.set_value(&phone::on_blur(&input.value()));
            }
        }));
    }
    listeners
}

fn input_of(event: &Event) -> Option<HtmlInputElement> {
    event.current_target()?.dyn_into::<HtmlInputElement>().ok()
}

fn read_form() -> ContactForm {
    let input = |field: ContactField| {
        dom::typed::<HtmlInputElement>(field.input_id())
            .map(|input| input.value())
            .unwrap_or_default()
    };
    ContactForm {
        name: input(ContactField::Name),
        phone: input(ContactField::Phone),
        email: input(ContactField::Email),
        message: dom::typed::<HtmlTextAreaElement>(ContactField::Message.input_id())
            .map(|area| area.value())
            .unwrap_or_default(),
        consent: dom::typed::<HtmlInputElement>(ContactField::Consent.input_id())
            .is_some_and(|input| input.checked()),
    }
}

fn set_error(field: ContactField, text: &str) {
    if let Some(slot) = dom::by_id(field.error_id()) {
        dom::set_text(&slot, text);
    }
}

fn show_note(lead: &Lead) {
    if let Some(note) = dom::by_id("lastRequestNote") {
        dom::set_class(&note, "show", true);
        dom::set_text(&note, &lead.note());
    }
}

fn submit(book: &LeadBook<Store>, form: &HtmlFormElement, toast: &crate::toast::Toast) {
    for field in ContactField::ALL {
        set_error(field, "");
    }
    let success = dom::by_id("formSuccess");
    if let Some(success) = &success {
        dom::set_text(success, "");
    }

    match book.submit(&read_form(), chrono::Local::now().naive_local()) {
        Ok(lead) => {
            if let Some(success) = &success {
                dom::set_text(success, SUCCESS_TEXT);
            }
            toast.show(Notice::FormSent);
            form.reset();
            show_note(&lead);
        }
        Err(SubmitError::Invalid(errors)) => {
            for &field in errors.fields() {
                set_error(field, field.error_message());
            }
        }
        Err(SubmitError::Storage(e)) => dom::log_error(&format!("lead not saved: {e}")),
    }
}
