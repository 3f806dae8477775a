pub mod contact;
pub mod phone;
pub mod services;

pub use contact::{ContactErrors, ContactField, ContactForm, Lead, LeadBook, SubmitError};
pub use services::{Accordion, QuoteRequest, ServiceKind, Urgency};
