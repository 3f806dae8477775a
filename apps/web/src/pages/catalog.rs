use crate::dom;
use crate::site::Site;
use autodrive_core::catalog::{self, Selection, SortMode};
use autodrive_core::{render, Subscription};
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

/// Filter controls of the catalogue page. Any of them may be absent; a
/// missing control counts as inactive.
struct Controls {
    search: Option<HtmlInputElement>,
    brand: Option<HtmlSelectElement>,
    category: Option<HtmlSelectElement>,
    drive: Option<HtmlSelectElement>,
    sort: Option<HtmlSelectElement>,
    min_price: Option<HtmlInputElement>,
    max_price: Option<HtmlInputElement>,
    favorites_only: Option<HtmlInputElement>,
}

impl Controls {
    fn find() -> Self {
        Self {
            search: dom::typed("filterSearch"),
            brand: dom::typed("filterBrand"),
            category: dom::typed("filterType"),
            drive: dom::typed("filterDrive"),
            sort: dom::typed("filterSort"),
            min_price: dom::typed("minPrice"),
            max_price: dom::typed("maxPrice"),
            favorites_only: dom::typed("filterFavOnly"),
        }
    }

    fn selection(&self) -> Selection {
        let mut selection = Selection {
            query: self.search.as_ref().map(HtmlInputElement::value).unwrap_or_default(),
            sort: self
                .sort
                .as_ref()
                .map_or(SortMode::default(), |select| SortMode::parse(&select.value())),
            favorites_only: self
                .favorites_only
                .as_ref()
                .is_some_and(HtmlInputElement::checked),
            ..Selection::default()
        };
        if let Some(brand) = &self.brand {
            selection.set_brand(&brand.value());
        }
        if let Some(category) = &self.category {
            selection.set_category(&category.value());
        }
        if let Some(drive) = &self.drive {
            selection.set_drive(&drive.value());
        }
        if let Some(min) = &self.min_price {
            selection.set_min_price(&min.value());
        }
        if let Some(max) = &self.max_price {
            selection.set_max_price(&max.value());
        }
        selection
    }

    /// Writes a selection back into the controls.
    fn show(&self, selection: &Selection) {
        let bound = |value: Option<u64>| value.map(|v| v.to_string()).unwrap_or_default();
        if let Some(search) = &self.search {
            search.set_value(&selection.query);
        }
        if let Some(brand) = &self.brand {
            brand.set_value(selection.brand.as_deref().unwrap_or("all"));
        }
        if let Some(category) = &self.category {
            category.set_value(selection.category.map_or("all", |c| c.as_str()));
        }
        if let Some(drive) = &self.drive {
            drive.set_value(selection.drive.as_deref().unwrap_or("all"));
        }
        if let Some(sort) = &self.sort {
            sort.set_value(selection.sort.as_str());
        }
        if let Some(min) = &self.min_price {
            min.set_value(&bound(selection.min_price));
        }
        if let Some(max) = &self.max_price {
            max.set_value(&bound(selection.max_price));
        }
        if let Some(favorites_only) = &self.favorites_only {
            favorites_only.set_checked(selection.favorites_only);
        }
    }

    fn elements(&self) -> Vec<Element> {
        let inputs = [&self.search, &self.min_price, &self.max_price, &self.favorites_only];
        let selects = [&self.brand, &self.category, &self.drive, &self.sort];
        inputs
            .into_iter()
            .flatten()
            .map(|input| Element::clone(input))
            .chain(selects.into_iter().flatten().map(|select| Element::clone(select)))
            .collect()
    }
}

pub struct CatalogPage {
    site: Site,
    grid: Element,
    controls: Controls,
    count: Option<Element>,
    empty: Option<Element>,
    listeners: RefCell<Vec<EventListener>>,
    subscription: RefCell<Option<Subscription>>,
}

impl CatalogPage {
    pub fn mount(site: &Site) -> Option<Rc<Self>> {
        let grid = dom::by_id("catalogGrid")?;
        let controls = Controls::find();

        if let Some(brand) = &controls.brand {
            brand.set_inner_html(&render::brand_options(&site.dataset.brands()));
        }

        // Deep link from the hero search.
        let mut entry = controls.selection();
        if let Some(search) = dom::query_param("search").filter(|s| !s.is_empty()) {
            entry.query = search;
        }
        if let Some(category) = dom::query_param("type").filter(|s| !s.is_empty()) {
            entry.set_category(&category);
        }
        controls.show(&entry);

        let page = Rc::new(Self {
            site: site.clone(),
            grid,
            controls,
            count: dom::by_id("catalogCount"),
            empty: dom::by_id("catalogEmpty"),
            listeners: RefCell::new(Vec::new()),
            subscription: RefCell::new(None),
        });
        page.install();
        page.render();
        Some(page)
    }

    pub fn render(&self) {
        let selection = self.controls.selection();
        let favorites = self.site.favorites.list();
        let view = catalog::apply(self.site.dataset.vehicles(), &selection, &favorites);

        self.grid
            .set_inner_html(&self.site.cards(view.items.iter().copied()));
        if let Some(count) = &self.count {
            dom::set_text(count, &view.count().to_string());
        }
        if let Some(empty) = &self.empty {
            dom::set_class(empty, "hidden", !view.is_empty());
        }
    }

    fn install(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        for element in self.controls.elements() {
            for event in ["input", "change"] {
                let page = Rc::downgrade(self);
                listeners.push(EventListener::new(&element, event, move |_| {
                    if let Some(page) = page.upgrade() {
                        page.render();
                    }
                }));
            }
        }

        if let Some(reset) = dom::by_id("resetFilters") {
            let page = Rc::downgrade(self);
            listeners.push(EventListener::new(&reset, "click", move |_| {
                if let Some(page) = page.upgrade() {
                    page.controls.show(&Selection::default());
                    page.render();
                }
            }));
        }
        self.listeners.borrow_mut().extend(listeners);

        let page = Rc::downgrade(self);
        let subscription = self.site.favorites.subscribe(move |_| {
            if let Some(page) = page.upgrade() {
                page.render();
            }
        });
        self.subscription.replace(Some(subscription));
    }
}
