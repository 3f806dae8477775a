use autodrive_core::catalog::{self, CatalogView};
use autodrive_core::detail::{self, DetailView, Gallery};
use autodrive_core::forms::contact::{ContactErrors, ContactField, ContactForm, Lead, LeadBook};
use autodrive_core::forms::phone;
use autodrive_core::forms::services::{Accordion, QuoteRequest, ServiceKind, Urgency, FAQ};
use autodrive_core::notice::TOAST_DURATION;
use autodrive_core::pages::{self, Page};
use autodrive_core::slider::{Slideshow, AUTOPLAY_PERIOD, FEATURED_COUNT, SLIDE_COUNT};
use autodrive_core::{
    Command, Dataset, Effect, FavoriteStyle, FavoritesStore, Interpreter, KeyValueStore, Notice,
    Selection, Subscription, Theme, Vehicle,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, warn};

pub type Store = Rc<dyn KeyValueStore>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Home,
    Catalog,
    Favorites,
    Detail,
    Services,
    Contacts,
}

impl AppScreen {
    /// Screens reachable from the navigation bar, in bar order.
    pub const NAV: [Self; 5] = [
        Self::Home,
        Self::Catalog,
        Self::Favorites,
        Self::Services,
        Self::Contacts,
    ];

    pub const fn page(self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::Catalog => Page::Catalog,
            Self::Favorites => Page::Favorites,
            Self::Detail => Page::Car,
            Self::Services => Page::Services,
            Self::Contacts => Page::Contacts,
        }
    }

    pub fn nav_index(self) -> Option<usize> {
        Self::NAV.iter().position(|screen| *screen == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub text: &'static str,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(notice: Notice) -> Self {
        Self {
            text: notice.text(),
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }
}

#[derive(Debug, Clone)]
pub struct HomeState {
    /// The `SLIDE_COUNT` best-rated ids; the featured table and the slides.
    pub featured: Vec<String>,
    pub slideshow: Slideshow,
    pub selected: usize,
    pub paused: bool,
    pub last_advance: Instant,
    pub search: String,
    /// Index into `pages::category_choices()`.
    pub search_category: usize,
    pub editing_search: bool,
}

impl HomeState {
    fn new(dataset: &Dataset) -> Self {
        let featured: Vec<String> = dataset
            .top_rated(FEATURED_COUNT)
            .into_iter()
            .take(SLIDE_COUNT)
            .map(|vehicle| vehicle.id.clone())
            .collect();
        Self {
            slideshow: Slideshow::new(featured.len().min(SLIDE_COUNT)),
            featured,
            selected: 0,
            paused: false,
            last_advance: Instant::now(),
            search: String::new(),
            search_category: 0,
            editing_search: false,
        }
    }

    pub fn slide_id(&self) -> Option<&str> {
        self.featured
            .get(self.slideshow.current())
            .map(String::as_str)
    }

    pub fn category_value(&self) -> &'static str {
        pages::category_choices()
            .nth(self.search_category)
            .map_or("all", |(value, _)| value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogField {
    Query,
    MinPrice,
    MaxPrice,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub selection: Selection,
    pub selected: usize,
    pub editing: Option<CatalogField>,
    /// Price inputs as typed; the selection holds the parsed bounds.
    pub min_input: String,
    pub max_input: String,
}

impl CatalogState {
    pub fn reset(&mut self) {
        self.selection.reset();
        self.selected = 0;
        self.editing = None;
        self.min_input.clear();
        self.max_input.clear();
    }
}

#[derive(Debug, Clone)]
pub struct DetailState {
    pub id: String,
    pub gallery: Gallery,
    pub similar: Vec<String>,
    pub similar_index: usize,
}

/// Rows of the services screen: the calculator controls, then the FAQ items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServicesRow {
    Service,
    Urgency,
    Wash,
    Report,
    Calculate,
    Faq(usize),
}

impl ServicesRow {
    pub const CALCULATOR_ROWS: usize = 5;
    pub const COUNT: usize = Self::CALCULATOR_ROWS + FAQ.len();

    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Service,
            1 => Self::Urgency,
            2 => Self::Wash,
            3 => Self::Report,
            4 => Self::Calculate,
            n => Self::Faq(n - Self::CALCULATOR_ROWS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServicesState {
    pub cursor: usize,
    /// Index into `ServiceKind::ALL`.
    pub service: usize,
    pub urgency: Urgency,
    pub wash: bool,
    pub report: bool,
    pub quote: Option<u64>,
    pub accordion: Accordion,
}

impl Default for ServicesState {
    fn default() -> Self {
        Self {
            cursor: 0,
            service: 0,
            urgency: Urgency::Standard,
            wash: false,
            report: false,
            quote: None,
            accordion: Accordion::new(FAQ.len()),
        }
    }
}

impl ServicesState {
    pub fn row(&self) -> ServicesRow {
        ServicesRow::from_index(self.cursor)
    }

    pub fn request(&self) -> QuoteRequest {
        QuoteRequest {
            service: ServiceKind::ALL.get(self.service).copied(),
            urgency: self.urgency,
            wash: self.wash,
            report: self.report,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactsState {
    pub form: ContactForm,
    /// `0..5` are the `ContactField::ALL` inputs, `5` is the submit button.
    pub focus: usize,
    pub errors: ContactErrors,
    pub success: bool,
    pub last_lead: Option<Lead>,
}

impl ContactsState {
    pub const SUBMIT: usize = ContactField::ALL.len();

    pub fn focused_field(&self) -> Option<ContactField> {
        ContactField::ALL.get(self.focus).copied()
    }

    /// Moves focus, applying the phone mask's focus and blur rules.
    pub fn set_focus(&mut self, focus: usize) {
        if self.focused_field() == Some(ContactField::Phone) {
            self.form.phone = phone::on_blur(&self.form.phone);
        }
        self.focus = focus;
        if self.focused_field() == Some(ContactField::Phone) {
            self.form.phone = phone::mask(&self.form.phone);
        }
    }

    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused_field()? {
            ContactField::Name => Some(&mut self.form.name),
            ContactField::Phone => Some(&mut self.form.phone),
            ContactField::Email => Some(&mut self.form.email),
            ContactField::Message => Some(&mut self.form.message),
            ContactField::Consent => None,
        }
    }
}

pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    /// Where `Esc` on the detail screen returns to.
    pub previous_screen: AppScreen,
    pub show_help: bool,
    pub theme: Theme,
    pub status_message: String,
    pub dataset: Rc<Dataset>,
    pub store: Store,
    pub favorites: Rc<FavoritesStore<Store>>,
    pub interpreter: Interpreter<Store>,
    pub toast: Rc<RefCell<Option<Toast>>>,
    pub home: HomeState,
    pub catalog: CatalogState,
    pub favorites_index: usize,
    /// `None` while on the detail screen means the vehicle was not found.
    pub detail: Option<DetailState>,
    pub services: ServicesState,
    pub contacts: ContactsState,
    pub leads: LeadBook<Store>,
    _favorites_subscription: Subscription,
}

impl App {
    pub fn new(dataset: Dataset, store: Store) -> Self {
        let dataset = Rc::new(dataset);
        let favorites = Rc::new(FavoritesStore::new(Rc::clone(&store)));
        let toast: Rc<RefCell<Option<Toast>>> = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&toast);
        let subscription = favorites.subscribe(move |change| {
            sink.replace(Some(Toast::new(change.notice())));
        });

        let leads = LeadBook::new(Rc::clone(&store));
        let contacts = ContactsState {
            last_lead: leads.last(),
            ..ContactsState::default()
        };

        Self {
            running: true,
            screen: AppScreen::Home,
            previous_screen: AppScreen::Home,
            show_help: false,
            theme: Theme::load(&store),
            status_message: String::new(),
            interpreter: Interpreter::new(Rc::clone(&dataset), Rc::clone(&favorites)),
            home: HomeState::new(&dataset),
            catalog: CatalogState::default(),
            favorites_index: 0,
            detail: None,
            services: ServicesState::default(),
            contacts,
            leads,
            dataset,
            store,
            favorites,
            toast,
            _favorites_subscription: subscription,
        }
    }

    /// Advances timers; called once per frame.
    pub fn update(&mut self) {
        self.tick(Instant::now());
    }

    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .toast
            .borrow()
            .is_some_and(|toast| toast.expired(now));
        if expired {
            self.toast.replace(None);
        }

        if self.screen == AppScreen::Home
            && !self.home.paused
            && now.saturating_duration_since(self.home.last_advance) >= AUTOPLAY_PERIOD
        {
            self.home.slideshow.next();
            self.home.last_advance = now;
        }
    }

    pub fn toast_text(&self) -> Option<&'static str> {
        self.toast.borrow().map(|toast| toast.text)
    }

    pub fn show_toast(&self, notice: Notice) {
        self.toast.replace(Some(Toast::new(notice)));
    }

    pub fn go_to(&mut self, screen: AppScreen) {
        if screen == AppScreen::Home {
            self.home.last_advance = Instant::now();
        }
        self.screen = screen;
    }

    pub fn toggle_theme(&mut self) {
        match self.theme.toggle(&self.store) {
            Ok(theme) => self.theme = theme,
            Err(e) => self.report_storage_error(&e),
        }
    }

    pub fn catalog_view(&self) -> CatalogView<'_> {
        catalog::apply(
            self.dataset.vehicles(),
            &self.catalog.selection,
            &self.favorites.list(),
        )
    }

    /// Favorites in dataset order.
    pub fn favorite_vehicles(&self) -> Vec<&Vehicle> {
        let ids = self.favorites.list();
        self.dataset
            .vehicles()
            .iter()
            .filter(|vehicle| ids.contains(&vehicle.id))
            .collect()
    }

    pub fn popup_vehicle(&self) -> Option<&Vehicle> {
        let modal = self.interpreter.modal();
        self.dataset.find(modal.vehicle_id()?)
    }

    /// Vehicle under the cursor on the current screen.
    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        match self.screen {
            AppScreen::Home => self
                .home
                .featured
                .get(self.home.selected)
                .and_then(|id| self.dataset.find(id)),
            AppScreen::Catalog => self
                .catalog_view()
                .items
                .get(self.catalog.selected)
                .copied(),
            AppScreen::Favorites => self.favorite_vehicles().get(self.favorites_index).copied(),
            AppScreen::Detail => self.detail.as_ref().and_then(|state| {
                state
                    .similar
                    .get(state.similar_index)
                    .and_then(|id| self.dataset.find(id))
            }),
            AppScreen::Services | AppScreen::Contacts => None,
        }
    }

    pub fn detail_vehicle(&self) -> Option<&Vehicle> {
        self.detail
            .as_ref()
            .and_then(|state| self.dataset.find(&state.id))
    }

    pub fn dispatch(&mut self, command: &Command) {
        match self.interpreter.dispatch(command) {
            Ok(Effect::FavoriteToggled { id, active }) => {
                debug!(%id, active, "favorite toggled from terminal");
                self.clamp_cursors();
            }
            Ok(Effect::ShowModal { id, .. }) => debug!(%id, "quick view opened"),
            Ok(Effect::HideModal | Effect::Ignored) => {}
            Err(e) => self.report_storage_error(&e),
        }
    }

    pub fn open_popup(&mut self, id: &str) {
        self.dispatch(&Command::OpenDetail(id.to_owned()));
    }

    pub fn close_popup(&mut self) {
        self.dispatch(&Command::CloseModal);
    }

    pub fn toggle_favorite(&mut self, id: &str, style: FavoriteStyle) {
        self.dispatch(&Command::ToggleFavorite {
            id: id.to_owned(),
            style,
        });
    }

    pub fn clear_favorites(&mut self) {
        if let Err(e) = self.favorites.clear() {
            self.report_storage_error(&e);
        }
        self.favorites_index = 0;
    }

    pub fn open_detail(&mut self, id: &str) {
        self.detail = match detail::resolve(&self.dataset, Some(id)) {
            DetailView::Found { vehicle, similar } => Some(DetailState {
                id: vehicle.id.clone(),
                gallery: Gallery::for_vehicle(vehicle),
                similar: similar.iter().map(|similar| similar.id.clone()).collect(),
                similar_index: 0,
            }),
            DetailView::NotFound => None,
        };
        if self.screen != AppScreen::Detail {
            self.previous_screen = self.screen;
        }
        self.screen = AppScreen::Detail;
    }

    pub fn close_detail(&mut self) {
        self.go_to(self.previous_screen);
    }

    /// Hero search: opens the catalogue with the typed text and category.
    pub fn submit_home_search(&mut self) {
        let pairs = pages::catalog_query(&self.home.search, self.home.category_value());
        let value = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str())
        };
        self.catalog.reset();
        self.catalog.selection = Selection::from_entry(value("search"), value("type"));
        self.home.editing_search = false;
        self.go_to(AppScreen::Catalog);
    }

    pub fn calculate_quote(&mut self) {
        self.services.quote = Some(self.services.request().total());
        self.show_toast(Notice::CostCalculated);
    }

    pub fn submit_contact(&mut self) {
        self.contacts.success = false;
        match self
            .leads
            .submit(&self.contacts.form, chrono::Local::now().naive_local())
        {
            Ok(lead) => {
                self.contacts = ContactsState {
                    success: true,
                    last_lead: Some(lead),
                    ..ContactsState::default()
                };
                self.show_toast(Notice::FormSent);
            }
            Err(autodrive_core::forms::SubmitError::Invalid(errors)) => {
                self.contacts.errors = errors;
            }
            Err(autodrive_core::forms::SubmitError::Storage(e)) => self.report_storage_error(&e),
        }
    }

    /// Keeps list cursors inside their (possibly shrunk) lists.
    pub fn clamp_cursors(&mut self) {
        let catalog_len = self.catalog_view().count();
        self.catalog.selected = self.catalog.selected.min(catalog_len.saturating_sub(1));
        let favorites_len = self.favorite_vehicles().len();
        self.favorites_index = self.favorites_index.min(favorites_len.saturating_sub(1));
    }

    fn report_storage_error(&mut self, error: &autodrive_core::StorageError) {
        warn!(error = %error, "storage operation failed");
        self.status_message = format!("Storage error: {error}");
    }
}
