use crate::dom;
use crate::site::Site;
use autodrive_core::pages::{self, Page};
use autodrive_core::render;
use autodrive_core::slider::{Slideshow, AUTOPLAY_PERIOD, FEATURED_COUNT, SLIDE_COUNT};
use autodrive_core::Vehicle;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, UrlSearchParams};

pub struct HomePage {
    slides: Vec<Vehicle>,
    show: RefCell<Slideshow>,
    root: Option<Element>,
    dots: Option<Element>,
    autoplay: RefCell<Option<Interval>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl HomePage {
    pub fn mount(site: &Site) -> Option<Rc<Self>> {
        let root = dom::by_id("heroSlider");
        let featured_grid = dom::by_id("featuredGrid");
        if root.is_none() && featured_grid.is_none() {
            return None;
        }

        let featured = site.dataset.top_rated(FEATURED_COUNT);
        let slides: Vec<Vehicle> = featured
            .iter()
            .take(SLIDE_COUNT)
            .map(|vehicle| (*vehicle).clone())
            .collect();

        if let Some(grid) = &featured_grid {
            grid.set_inner_html(&site.cards(&slides));
        }

        let page = Rc::new(Self {
            show: RefCell::new(Slideshow::new(slides.len())),
            slides,
            root,
            dots: dom::by_id("heroDots"),
            autoplay: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });

        if page.root.is_some() && !page.slides.is_empty() {
            page.render_slide();
            page.install_slider();
            page.start_autoplay();
        }
        page.install_search();

        Some(page)
    }

    fn render_slide(&self) {
        let Some(root) = &self.root else {
            return;
        };
        let current = self.show.borrow().current();
        let Some(vehicle) = self.slides.get(current) else {
            return;
        };
        root.set_inner_html(&render::slide(vehicle));
        if let Some(dots) = &self.dots {
            dots.set_inner_html(&render::slide_dots(self.slides.len(), current));
        }
    }

    fn step(&self, forward: bool) {
        {
            let mut show = self.show.borrow_mut();
            if forward {
                show.next();
            } else {
                show.prev();
            }
        }
        self.render_slide();
    }

    /// Replaces the running interval, if any, with a fresh one.
    fn start_autoplay(self: &Rc<Self>) {
        let page = Rc::downgrade(self);
        let period = u32::try_from(AUTOPLAY_PERIOD.as_millis()).unwrap_or(u32::MAX);
        let interval = Interval::new(period, move || {
            if let Some(page) = page.upgrade() {
                page.step(true);
            }
        });
        self.autoplay.replace(Some(interval));
    }

    fn stop_autoplay(&self) {
        self.autoplay.replace(None);
    }

    fn install_slider(self: &Rc<Self>) {
        let Some(root) = self.root.clone() else {
            return;
        };
        let mut listeners = Vec::new();

        for (id, forward) in [("heroPrev", false), ("heroNext", true)] {
            if let Some(button) = dom::by_id(id) {
                let page = Rc::downgrade(self);
                listeners.push(EventListener::new(&button, "click", move |_| {
                    with_page(&page, |page| page.step(forward));
                }));
            }
        }

        if let Some(dots) = &self.dots {
            let page = Rc::downgrade(self);
            listeners.push(EventListener::new(dots, "click", move |event: &Event| {
                let Some(index) = clicked_dot(event) else {
                    return;
                };
                with_page(&page, |page| {
                    page.show.borrow_mut().select(index);
                    page.render_slide();
                });
            }));
        }

        let page = Rc::downgrade(self);
        listeners.push(EventListener::new(&root, "mouseenter", move |_| {
            with_page(&page, |page| page.stop_autoplay());
        }));
        let page = Rc::downgrade(self);
        listeners.push(EventListener::new(&root, "mouseleave", move |_| {
            if let Some(page) = page.upgrade() {
                page.start_autoplay();
            }
        }));

        self.listeners.borrow_mut().extend(listeners);
    }

    fn install_search(&self) {
        let Some(form) = dom::by_id("heroSearchForm") else {
            return;
        };
        let listener = EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            |event: &Event| {
                event.prevent_default();
                let text = dom::typed::<HtmlInputElement>("heroSearchText")
                    .map(|input| input.value())
                    .unwrap_or_default();
                let category = dom::typed::<HtmlSelectElement>("heroSearchType")
                    .map_or_else(|| "all".to_string(), |select| select.value());

                let Ok(params) = UrlSearchParams::new() else {
                    return;
                };
                for (key, value) in pages::catalog_query(&text, &category) {
                    params.append(key, &value);
                }
                let query = String::from(params.to_string());
                dom::navigate(&format!("{}?{query}", Page::Catalog.file_name()));
            },
        );
        self.listeners.borrow_mut().push(listener);
    }
}

fn with_page(page: &Weak<HomePage>, f: impl FnOnce(&HomePage)) {
    if let Some(page) = page.upgrade() {
        f(&page);
    }
}

fn clicked_dot(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let dot = target.closest(".dot").ok()??;
    dot.get_attribute("data-slide")?.parse().ok()
}
