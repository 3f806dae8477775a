use crate::dom;
use crate::site::Site;
use autodrive_core::{Subscription, Vehicle};
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, HtmlButtonElement};

pub struct FavoritesPage {
    site: Site,
    grid: Element,
    empty: Option<Element>,
    clear: Option<HtmlButtonElement>,
    listeners: RefCell<Vec<EventListener>>,
    subscription: RefCell<Option<Subscription>>,
}

impl FavoritesPage {
    pub fn mount(site: &Site) -> Option<Rc<Self>> {
        let page = Rc::new(Self {
            site: site.clone(),
            grid: dom::by_id("favoritesGrid")?,
            empty: dom::by_id("favoritesEmpty"),
            clear: dom::typed("clearFavorites"),
            listeners: RefCell::new(Vec::new()),
            subscription: RefCell::new(None),
        });
        page.install();
        page.render();
        Some(page)
    }

    /// Favorites in dataset order, not in the order they were added.
    pub fn render(&self) {
        let ids = self.site.favorites.list();
        let items: Vec<&Vehicle> = self
            .site
            .dataset
            .vehicles()
            .iter()
            .filter(|vehicle| ids.contains(&vehicle.id))
            .collect();

        self.grid
            .set_inner_html(&self.site.cards(items.iter().copied()));
        if let Some(empty) = &self.empty {
            dom::set_class(empty, "hidden", !items.is_empty());
        }
        dom::set_class(&self.grid, "hidden", items.is_empty());
        if let Some(clear) = &self.clear {
            clear.set_disabled(items.is_empty());
        }
    }

    fn install(self: &Rc<Self>) {
        if let Some(clear) = &self.clear {
            let favorites = Rc::clone(&self.site.favorites);
            let listener = EventListener::new(clear, "click", move |_| {
                if let Err(e) = favorites.clear() {
                    dom::log_error(&format!("favorites not cleared: {e}"));
                }
            });
            self.listeners.borrow_mut().push(listener);
        }

        let page = Rc::downgrade(self);
        let subscription = self.site.favorites.subscribe(move |_| {
            if let Some(page) = page.upgrade() {
                page.render();
            }
        });
        self.subscription.replace(Some(subscription));
    }
}
