pub mod catalog;
pub mod contacts;
pub mod detail;
pub mod favorites;
pub mod home;
pub mod quick_view;
pub mod services;
