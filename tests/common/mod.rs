#![allow(dead_code)]

use category_combo::domain::{Category, TransactionType};
use category_combo::selector::CategorySource;

/// Parent stand-in that records every notification the selector sends.
#[derive(Debug, Default)]
pub struct RecordingSource {
    pub categories: Vec<Category>,
    pub selected: String,
    pub creating: bool,
    pub error: Option<String>,
    pub changes: Vec<String>,
    pub creates: Vec<String>,
}

impl RecordingSource {
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            categories: expenses(names),
            ..Self::default()
        }
    }
}

impl CategorySource for RecordingSource {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn selected_id(&self) -> &str {
        &self.selected
    }

    fn is_creating(&self) -> bool {
        self.creating
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn on_change(&mut self, category_id: &str) {
        self.selected = category_id.to_string();
        self.changes.push(category_id.to_string());
    }

    fn on_create_category(&mut self, name: &str) {
        self.creates.push(name.to_string());
    }
}

/// Enabled expense categories with ids starting at 1.
pub fn expenses(names: &[&str]) -> Vec<Category> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| Category::new(idx as u64 + 1, *name, TransactionType::Expense))
        .collect()
}

pub const CATALOG_FIXTURE: &str = r#"[
    {"categoryId": 1, "categoryName": "Food", "enabled": true, "transactionType": {"transactionTypeId": 1}},
    {"categoryId": 2, "categoryName": "Rent", "enabled": true, "transactionType": {"transactionTypeId": 1}},
    {"categoryId": 3, "categoryName": "Old Hobby", "enabled": false, "transactionType": {"transactionTypeId": 1}},
    {"categoryId": 9, "categoryName": "Salary", "enabled": true, "transactionType": {"transactionTypeId": 2}}
]"#;
