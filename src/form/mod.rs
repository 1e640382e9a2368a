//! Transaction form that owns the category selection.
//!
//! The form is the parent collaborator of the category selector: it keeps
//! the full category list, exposes the slice belonging to the active
//! transaction type, and turns creation intents into catalog requests.

pub mod validation;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::catalog::CategoryCatalog;
use crate::domain::{Category, Frequency, TransactionDraft, TransactionRecord, TransactionType};
use crate::errors::{PickerError, Result};
use crate::selector::CategorySource;

pub use validation::{FormErrors, FormField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit { transaction_id: u64 },
}

#[derive(Debug, Clone)]
pub struct TransactionForm {
    mode: FormMode,
    saved: bool,
    transaction_type: TransactionType,
    all_categories: Vec<Category>,
    categories: Vec<Category>,
    selected_category_id: String,
    pub description: String,
    pub amount: String,
    /// `YYYY-MM-DD`, blank for today.
    pub date: String,
    pub frequency: Option<Frequency>,
    errors: FormErrors,
    creating: bool,
    pending_category: Option<String>,
    deleting: bool,
}

impl TransactionForm {
    pub fn new(transaction_type: TransactionType) -> Self {
        Self {
            mode: FormMode::New,
            saved: false,
            transaction_type,
            all_categories: Vec::new(),
            categories: Vec::new(),
            selected_category_id: String::new(),
            description: String::new(),
            amount: String::new(),
            date: String::new(),
            frequency: None,
            errors: FormErrors::default(),
            creating: false,
            pending_category: None,
            deleting: false,
        }
    }

    /// Form for a saved (recurring) transaction, which also needs a frequency.
    pub fn new_saved(transaction_type: TransactionType) -> Self {
        Self {
            saved: true,
            ..Self::new(transaction_type)
        }
    }

    pub fn edit(record: &TransactionRecord) -> Self {
        Self {
            mode: FormMode::Edit {
                transaction_id: record.transaction_id,
            },
            saved: record.frequency.is_some(),
            selected_category_id: record.category_id.to_string(),
            description: record.description.clone(),
            amount: record.amount.to_string(),
            date: validation::date_part(&record.date).to_string(),
            frequency: record.frequency,
            ..Self::new(record.transaction_type)
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Asks to delete the transaction being edited. Returns the id to send
    /// to the transaction API, or `None` while a delete is already running.
    pub fn request_delete(&mut self) -> Result<Option<u64>> {
        let FormMode::Edit { transaction_id } = self.mode else {
            return Err(PickerError::InvalidInput(
                "only an existing transaction can be deleted".into(),
            ));
        };
        if self.deleting {
            debug!(transaction_id, "delete already pending");
            return Ok(None);
        }
        self.deleting = true;
        Ok(Some(transaction_id))
    }

    /// Lowers the deleting flag once the delete request has completed.
    pub fn finish_delete(&mut self) {
        self.deleting = false;
    }

    pub fn pending_category(&self) -> Option<&str> {
        self.pending_category.as_deref()
    }

    /// Replaces the category list, as a refetch from the category API does.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.all_categories = categories;
        self.refilter();
    }

    /// Switches between expense and income. A selection that does not
    /// belong to the new type is dropped.
    pub fn set_transaction_type(&mut self, transaction_type: TransactionType) {
        if self.transaction_type == transaction_type {
            return;
        }
        self.transaction_type = transaction_type;
        self.refilter();
        if self.selected_category().is_none() {
            self.selected_category_id.clear();
        }
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.category_id.matches(&self.selected_category_id))
    }

    /// Completes an outstanding creation request against the catalog, then
    /// refetches and selects the new category.
    pub fn resolve_pending_category(
        &mut self,
        catalog: &mut CategoryCatalog,
    ) -> Result<Option<Category>> {
        let Some(name) = self.pending_category.take() else {
            return Ok(None);
        };
        let created = catalog.create(&name, self.transaction_type);
        self.creating = false;
        let category = match created {
            Ok(category) => category,
            Err(err) => {
                warn!(name = %name, error = %err, "category creation failed");
                return Err(err);
            }
        };
        self.set_categories(catalog.list().to_vec());
        self.on_change(category.category_id.as_str());
        Ok(Some(category))
    }

    pub fn validate(&mut self) -> std::result::Result<TransactionDraft, FormErrors> {
        self.validate_on(Local::now().date_naive())
    }

    /// Validates every field, keeping the messages so the selector can show
    /// the category error inline.
    pub fn validate_on(
        &mut self,
        today: NaiveDate,
    ) -> std::result::Result<TransactionDraft, FormErrors> {
        let mut errors = FormErrors::default();

        let category_id = validation::category(&self.selected_category_id)
            .map_err(|msg| errors.insert(FormField::Category, msg))
            .ok();
        let description = validation::description(&self.description)
            .map_err(|msg| errors.insert(FormField::Description, msg))
            .ok();
        let amount = validation::amount(&self.amount)
            .map_err(|msg| errors.insert(FormField::Amount, msg))
            .ok();
        let date = validation::date(&self.date, today)
            .map_err(|msg| errors.insert(FormField::Date, msg))
            .ok();
        let frequency = if self.saved {
            validation::frequency(self.frequency)
                .map(Some)
                .map_err(|msg| errors.insert(FormField::Frequency, msg))
                .ok()
        } else {
            Some(None)
        };

        self.errors = errors.clone();
        match (category_id, description, amount, date, frequency) {
            (Some(category_id), Some(description), Some(amount), Some(date), Some(frequency)) => {
                Ok(TransactionDraft {
                    category_id,
                    description,
                    amount,
                    date,
                    frequency,
                })
            }
            _ => Err(errors),
        }
    }

    fn refilter(&mut self) {
        self.categories = self
            .all_categories
            .iter()
            .filter(|category| category.transaction_type == self.transaction_type)
            .cloned()
            .collect();
    }
}

impl CategorySource for TransactionForm {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn selected_id(&self) -> &str {
        &self.selected_category_id
    }

    fn is_creating(&self) -> bool {
        self.creating
    }

    fn error(&self) -> Option<&str> {
        self.errors.get(FormField::Category)
    }

    fn on_change(&mut self, category_id: &str) {
        self.selected_category_id = category_id.to_string();
        self.errors.clear(FormField::Category);
    }

    fn on_create_category(&mut self, name: &str) {
        if self.creating {
            debug!(name, "category creation already pending");
            return;
        }
        self.pending_category = Some(name.to_string());
        self.creating = true;
    }
}
