//! Contact form validation and the persisted "last lead".

use crate::storage::{load_json, save_json, KeyValueStore, StorageError, LAST_LEAD_KEY};
use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

use super::phone;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 5;
const PHONE_DIGITS: usize = 11;

pub const SUCCESS_TEXT: &str = "Заявка отправлена! (демо)";

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").ok())
        .as_ref()
}

pub fn is_email(value: &str) -> bool {
    email_pattern().is_some_and(|pattern| pattern.is_match(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Message,
    Consent,
}

impl ContactField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Message,
        Self::Consent,
    ];

    /// Id of the form control.
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Message => "message",
            Self::Consent => "agree",
        }
    }

    /// Id of the inline error slot next to the control.
    pub const fn error_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Phone => "phoneError",
            Self::Email => "emailError",
            Self::Message => "messageError",
            Self::Consent => "agreeError",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Имя",
            Self::Phone => "Телефон",
            Self::Email => "Email",
            Self::Message => "Сообщение",
            Self::Consent => "Согласие на обработку данных",
        }
    }

    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Минимум 2 символа",
            Self::Phone => "Введите полный номер",
            Self::Email => "Некорректный email",
            Self::Message => "Сообщение слишком короткое",
            Self::Consent => "Нужно поставить галочку",
        }
    }
}

/// Raw field values as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub consent: bool,
}

/// Fields that failed validation, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} contact field(s) invalid", .fields.len())]
pub struct ContactErrors {
    fields: Vec<ContactField>,
}

impl ContactErrors {
    pub fn contains(&self, field: ContactField) -> bool {
        self.fields.contains(&field)
    }

    pub fn fields(&self) -> &[ContactField] {
        &self.fields
    }

    pub fn message(&self, field: ContactField) -> Option<&'static str> {
        self.contains(field).then(|| field.error_message())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Trimmed values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ValidContact, ContactErrors> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let mut fields = Vec::new();
        if name.chars().count() < MIN_NAME_CHARS {
            fields.push(ContactField::Name);
        }
        if phone::digit_count(phone) < PHONE_DIGITS {
            fields.push(ContactField::Phone);
        }
        if !is_email(email) {
            fields.push(ContactField::Email);
        }
        if message.chars().count() < MIN_MESSAGE_CHARS {
            fields.push(ContactField::Message);
        }
        if !self.consent {
            fields.push(ContactField::Consent);
        }

        if !fields.is_empty() {
            return Err(ContactErrors { fields });
        }

        Ok(ValidContact {
            name: name.to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    }
}

/// The single most recent submission, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    /// Local submission time, `dd.mm.yyyy, HH:MM:SS`.
    pub date: String,
}

impl Lead {
    pub fn new(contact: ValidContact, submitted_at: NaiveDateTime) -> Self {
        Self {
            name: contact.name,
            phone: contact.phone,
            email: contact.email,
            message: contact.message,
            date: submitted_at.format("%d.%m.%Y, %H:%M:%S").to_string(),
        }
    }

    pub fn note(&self) -> String {
        format!("Последняя заявка: {}, {} ({})", self.name, self.phone, self.date)
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.note())
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ContactErrors),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Reads and overwrites the last submitted lead.
#[derive(Debug)]
pub struct LeadBook<S> {
    storage: S,
}

impl<S: KeyValueStore> LeadBook<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Malformed entries read as absent.
    pub fn last(&self) -> Option<Lead> {
        load_json(&self.storage, LAST_LEAD_KEY)
    }

    /// Validates and stores the form. Nothing is written when validation
    /// fails.
    pub fn submit(
        &self,
        form: &ContactForm,
        submitted_at: NaiveDateTime,
    ) -> Result<Lead, SubmitError> {
        let contact = form.validate()?;
        let lead = Lead::new(contact, submitted_at);
        save_json(&self.storage, LAST_LEAD_KEY, &lead)?;
        debug!(date = %lead.date, "lead saved");
        Ok(lead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn filled() -> ContactForm {
        ContactForm {
            name: " Анна ".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            email: "anna@example.ru".to_string(),
            message: "Хочу на тест-драйв".to_string(),
            consent: true,
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(12, 5, 9)
            .unwrap()
    }

    #[test]
    fn valid_form_is_trimmed() {
        let contact = filled().validate().unwrap();
        assert_eq!(contact.name, "Анна");
    }

    #[test]
    fn every_rule_reports_its_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.fields(), &ContactField::ALL);
        assert_eq!(
            errors.message(ContactField::Phone),
            Some("Введите полный номер")
        );
    }

    #[test]
    fn email_needs_at_and_dot() {
        assert!(is_email("a@b.c"));
        assert!(!is_email("a@b"));
        assert!(!is_email("ab.c"));
        assert!(!is_email("a b@c.d"));
    }

    #[test]
    fn name_length_counts_characters() {
        let form = ContactForm {
            name: "Я".to_string(),
            ..filled()
        };
        assert!(form.validate().unwrap_err().contains(ContactField::Name));
    }

    #[test]
    fn submit_persists_lead_with_local_date() {
        let book = LeadBook::new(MemoryStore::new());
        let lead = book.submit(&filled(), noon()).unwrap();
        assert_eq!(lead.date, "07.03.2024, 12:05:09");
        assert_eq!(book.last(), Some(lead.clone()));
        assert_eq!(
            lead.note(),
            "Последняя заявка: Анна, +7 (999) 123-45-67 (07.03.2024, 12:05:09)"
        );
    }

    #[test]
    fn short_phone_leaves_last_lead_unchanged() {
        let book = LeadBook::new(MemoryStore::new());
        let first = book.submit(&filled(), noon()).unwrap();

        let form = ContactForm {
            phone: "+7 (999) 123-45".to_string(),
            ..filled()
        };
        let err = book.submit(&form, noon()).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(ref e) if e.contains(ContactField::Phone)));
        assert_eq!(book.last(), Some(first));
    }

    #[test]
    fn malformed_lead_reads_as_absent() {
        let book = LeadBook::new(MemoryStore::new().with_entry(LAST_LEAD_KEY, "[1, 2"));
        assert_eq!(book.last(), None);
    }
}
