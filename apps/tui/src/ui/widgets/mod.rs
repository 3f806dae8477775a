pub mod chrome;
pub mod palette;
pub mod popup;
pub mod specs;
pub mod tables;
