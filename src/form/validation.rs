//! Field rules of the transaction form.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::domain::{CategoryId, Frequency};

pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const DESCRIPTION_TOO_LONG: &str = "Description can have at most 50 characters!";
pub const AMOUNT_REQUIRED: &str = "Amount is required!";
pub const AMOUNT_INVALID: &str = "Invalid amount!";
pub const DATE_INVALID: &str = "Invalid date!";
pub const FREQUENCY_REQUIRED: &str = "Frequency is required!";

pub const DESCRIPTION_MAX_CHARS: usize = 50;
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Category,
    Description,
    Amount,
    Date,
    Frequency,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Category => "category",
            FormField::Description => "description",
            FormField::Amount => "amount",
            FormField::Date => "date",
            FormField::Frequency => "frequency",
        };
        f.write_str(label)
    }
}

/// Per-field validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

pub fn category(selected: &str) -> Result<CategoryId, &'static str> {
    let id = CategoryId::new(selected);
    if id.as_str().is_empty() {
        Err(CATEGORY_REQUIRED)
    } else {
        Ok(id)
    }
}

pub fn description(raw: &str) -> Result<String, &'static str> {
    if raw.chars().count() > DESCRIPTION_MAX_CHARS {
        Err(DESCRIPTION_TOO_LONG)
    } else {
        Ok(raw.to_string())
    }
}

/// Amounts are plain digits with an optional decimal point, no sign.
pub fn amount(raw: &str) -> Result<f64, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AMOUNT_REQUIRED);
    }
    if !trimmed.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
        return Err(AMOUNT_INVALID);
    }
    trimmed.parse::<f64>().map_err(|_| AMOUNT_INVALID)
}

pub fn date(raw: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(today);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| DATE_INVALID)
}

pub fn frequency(value: Option<Frequency>) -> Result<Frequency, &'static str> {
    value.ok_or(FREQUENCY_REQUIRED)
}

/// Keeps the calendar part of an API timestamp such as `2024-03-01T08:00:00`.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
