use crate::dom;
use crate::site::Site;
use autodrive_core::forms::services::{quote_label, Accordion, QuoteRequest, ServiceKind, Urgency};
use autodrive_core::Notice;
use gloo_events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};

/// Cost calculator and FAQ accordion. Either half may be missing.
pub struct ServicesPage {
    faq: RefCell<Accordion>,
    items: Vec<Element>,
    _listeners: Vec<EventListener>,
}

impl ServicesPage {
    pub fn mount(site: &Site) -> Option<Rc<Self>> {
        let form = dom::by_id("serviceCalcForm");
        let items = dom::query_all(".faq-item");
        if form.is_none() && items.is_empty() {
            return None;
        }

        let mut faq = Accordion::new(items.len());
        if let Some(open) = items
            .iter()
            .position(|item| item.class_list().contains("open"))
        {
            faq.toggle(open);
        }

        let mut listeners = Vec::new();
        if let Some(form) = form {
            let toast = Rc::clone(&site.toast);
            listeners.push(EventListener::new_with_options(
                &form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    event.prevent_default();
                    let total = read_request().total();
                    if let Some(result) = dom::by_id("calcResult") {
                        dom::set_text(&result, &quote_label(total));
                    }
                    toast.show(Notice::CostCalculated);
                },
            ));
        }

        Some(Rc::new_cyclic(|page: &std::rc::Weak<Self>| {
            for button in dom::query_all(".faq-btn") {
                let page = page.clone();
                listeners.push(EventListener::new(&button, "click", move |event: &Event| {
                    if let Some(page) = page.upgrade() {
                        page.toggle_from(event);
                    }
                }));
            }
            Self {
                faq: RefCell::new(faq),
                items,
                _listeners: listeners,
            }
        }))
    }

    fn toggle_from(&self, event: &Event) {
        let Some(item) = event
            .current_target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|button| button.closest(".faq-item").ok().flatten())
        else {
            return;
        };
        let Some(index) = self.items.iter().position(|candidate| *candidate == item) else {
            return;
        };

        let mut faq = self.faq.borrow_mut();
        faq.toggle(index);
        for (i, item) in self.items.iter().enumerate() {
            dom::set_class(item, "open", faq.is_open(i));
        }
    }
}

fn read_request() -> QuoteRequest {
    let select = |id: &str| {
        dom::typed::<HtmlSelectElement>(id)
            .map(|select| select.value())
            .unwrap_or_default()
    };
    let checked = |id: &str| dom::typed::<HtmlInputElement>(id).is_some_and(|input| input.checked());

    QuoteRequest {
        service: ServiceKind::parse(&select("calcService")),
        urgency: Urgency::parse(&select("calcUrgency")),
        wash: checked("calcWash"),
        report: checked("calcReport"),
    }
}
