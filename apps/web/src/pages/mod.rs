//! One controller per page. Each probes for its root element and stays
//! inert (`None`) when it is missing.

pub mod car;
pub mod catalog;
pub mod contacts;
pub mod favorites;
pub mod home;
pub mod services;

pub use car::CarPage;
pub use catalog::CatalogPage;
pub use contacts::ContactsPage;
pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use services::ServicesPage;
