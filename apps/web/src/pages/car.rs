use crate::dom;
use crate::site::Site;
use autodrive_core::detail::{self, DetailView, Gallery};
use autodrive_core::render;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub struct CarPage {
    gallery: RefCell<Gallery>,
    root: Element,
    listener: RefCell<Option<EventListener>>,
}

impl CarPage {
    pub fn mount(site: &Site) -> Option<Rc<Self>> {
        let root = dom::by_id("carPage")?;
        let id = dom::query_param("id");

        let DetailView::Found { vehicle, similar } = detail::resolve(&site.dataset, id.as_deref())
        else {
            root.set_inner_html(&render::not_found());
            return None;
        };

        let gallery = Gallery::for_vehicle(vehicle);
        root.set_inner_html(&render::detail_page(
            vehicle,
            site.favorites.contains(&vehicle.id),
            &gallery,
        ));
        if let Some(grid) = dom::by_id("similarGrid") {
            grid.set_inner_html(&site.cards(similar));
        }

        let page = Rc::new(Self {
            gallery: RefCell::new(gallery),
            root,
            listener: RefCell::new(None),
        });

        let weak = Rc::downgrade(&page);
        let listener = EventListener::new(&page.root, "click", move |event: &Event| {
            if let Some(page) = weak.upgrade() {
                page.select_thumb(event);
            }
        });
        page.listener.replace(Some(listener));
        Some(page)
    }

    fn select_thumb(&self, event: &Event) {
        let Some(index) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest("[data-thumb]").ok().flatten())
            .and_then(|thumb| thumb.get_attribute("data-thumb"))
            .and_then(|index| index.parse::<usize>().ok())
        else {
            return;
        };

        let mut gallery = self.gallery.borrow_mut();
        if !gallery.select(index) {
            return;
        }

        if let Ok(thumbs) = self.root.query_selector_all("[data-thumb]") {
            for i in 0..thumbs.length() {
                if let Some(thumb) = thumbs.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                    dom::set_class(&thumb, "active", i as usize == index);
                }
            }
        }
        if let Some(main) = dom::by_id("detailMain") {
            let active = gallery.active();
            main.set_class_name(&format!("detail-main {}", active.gradient));
            dom::set_text(&main, &active.emoji);
        }
    }
}
