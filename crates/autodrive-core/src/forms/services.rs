//! Service cost calculator and the FAQ accordion.

use crate::format;

pub const WASH_SURCHARGE: u64 = 1500;
pub const REPORT_SURCHARGE: u64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Diagnostic,
    Maintenance,
    Selection,
    Prep,
}

impl ServiceKind {
    pub const ALL: [Self; 4] = [
        Self::Diagnostic,
        Self::Maintenance,
        Self::Selection,
        Self::Prep,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diagnostic => "diagnostic",
            Self::Maintenance => "maintenance",
            Self::Selection => "selection",
            Self::Prep => "prep",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value.trim())
    }

    pub const fn base_price(self) -> u64 {
        match self {
            Self::Diagnostic => 3500,
            Self::Maintenance => 8000,
            Self::Selection => 12000,
            Self::Prep => 7000,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Diagnostic => "Диагностика",
            Self::Maintenance => "Техобслуживание",
            Self::Selection => "Подбор автомобиля",
            Self::Prep => "Предпродажная подготовка",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    #[default]
    Standard,
    Urgent,
}

impl Urgency {
    pub fn parse(value: &str) -> Self {
        if value.trim() == "urgent" {
            Self::Urgent
        } else {
            Self::Standard
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "В обычном порядке",
            Self::Urgent => "Срочно (+20%)",
        }
    }
}

/// Calculator inputs at the moment the form is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuoteRequest {
    /// `None` for an unrecognised service value, which costs nothing.
    pub service: Option<ServiceKind>,
    pub urgency: Urgency,
    pub wash: bool,
    pub report: bool,
}

impl QuoteRequest {
    pub fn total(&self) -> u64 {
        let mut total = self.service.map_or(0, ServiceKind::base_price);
        if self.wash {
            total += WASH_SURCHARGE;
        }
        if self.report {
            total += REPORT_SURCHARGE;
        }
        match self.urgency {
            // ×1.2, rounded half up
            Urgency::Urgent => (total * 12 + 5) / 10,
            Urgency::Standard => total,
        }
    }
}

pub fn quote_label(total: u64) -> String {
    format!("Стоимость: {}", format::price(total))
}

/// Questions shown on the services page.
pub const FAQ: [(&str, &str); 4] = [
    (
        "Сколько длится диагностика?",
        "Обычно от одного до двух часов, в зависимости от автомобиля.",
    ),
    (
        "Можно ли приехать без записи?",
        "Да, но по записи мы гарантируем время начала работ.",
    ),
    (
        "Даёте ли вы гарантию на работы?",
        "На все работы действует гарантия 6 месяцев.",
    ),
    (
        "Что входит в подбор автомобиля?",
        "Поиск вариантов, выездная проверка и сопровождение сделки.",
    ),
];

/// FAQ list where at most one item is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub const fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub const fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opening an item closes every other one; toggling the open item
    /// closes it.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}
