use std::cell::RefCell;
use std::rc::Rc;

mod base;
mod data;
mod dispatcher;
mod dom;
mod pages;
mod site;
mod storage;
mod toast;

use base::Base;
use dispatcher::Dispatcher;
use pages::{CarPage, CatalogPage, ContactsPage, FavoritesPage, HomePage, ServicesPage};
use site::Site;

/// Everything mounted for the loaded page. Dropping it would detach every
/// listener, cancel the timers and drop the favorites subscriptions, so it
/// lives for the whole session.
#[allow(dead_code)]
struct Mounted {
    site: Site,
    base: Base,
    home: Option<Rc<HomePage>>,
    catalog: Option<Rc<CatalogPage>>,
    favorites: Option<Rc<FavoritesPage>>,
    services: Option<Rc<ServicesPage>>,
    contacts: Option<ContactsPage>,
    car: Option<Rc<CarPage>>,
    dispatcher: Option<Dispatcher>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

fn main() {
    let site = Site::load();
    dom::log(&format!("autodrive: {} vehicles loaded", site.dataset.len()));

    let mounted = Mounted {
        base: Base::mount(&site),
        home: HomePage::mount(&site),
        catalog: CatalogPage::mount(&site),
        favorites: FavoritesPage::mount(&site),
        services: ServicesPage::mount(&site),
        contacts: ContactsPage::mount(&site),
        car: CarPage::mount(&site),
        dispatcher: Dispatcher::mount(&site),
        site,
    };

    MOUNTED.with(|slot| *slot.borrow_mut() = Some(mounted));
}
