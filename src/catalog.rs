//! In-memory category catalog standing in for the remote category endpoints.

use std::{fs, path::Path};

use tracing::info;

use crate::domain::{Category, CategoryId, TransactionType};
use crate::errors::{PickerError, Result};
use crate::selector::equals_ignore_case;

/// Owns the authoritative category list and hands out identifiers for newly
/// created categories.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
    next_id: u64,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        let next_id = categories
            .iter()
            .filter_map(|category| category.category_id.as_number())
            .max()
            .map_or(1, |max| max + 1);
        Self {
            categories,
            next_id,
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let categories: Vec<Category> = serde_json::from_str(raw)?;
        Ok(Self::new(categories))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&data)?;
        info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            "category catalog loaded"
        );
        Ok(catalog)
    }

    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    pub fn for_type(&self, transaction_type: TransactionType) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|category| category.transaction_type == transaction_type)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| &category.category_id == id)
    }

    /// Adds an enabled category after rejecting blank and duplicate names.
    pub fn create(&mut self, name: &str, transaction_type: TransactionType) -> Result<Category> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PickerError::InvalidInput(
                "category name cannot be empty".into(),
            ));
        }
        let duplicate = self.categories.iter().any(|category| {
            category.transaction_type == transaction_type
                && equals_ignore_case(category.category_name.trim(), trimmed)
        });
        if duplicate {
            return Err(PickerError::CategoryExists(trimmed.to_string()));
        }

        let category = Category::new(self.next_id, trimmed, transaction_type);
        self.next_id += 1;
        self.categories.push(category.clone());
        info!(
            category_id = %category.category_id,
            name = %category.category_name,
            transaction_type = %transaction_type,
            "category created"
        );
        Ok(category)
    }

    pub fn set_enabled(&mut self, id: &CategoryId, enabled: bool) -> Result<()> {
        let category = self
            .categories
            .iter_mut()
            .find(|category| &category.category_id == id)
            .ok_or_else(|| PickerError::CategoryNotFound(id.to_string()))?;
        category.enabled = enabled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        {"categoryId": 4, "categoryName": "Food", "enabled": true, "transactionType": {"transactionTypeId": 1}},
        {"categoryId": 9, "categoryName": "Salary", "enabled": true, "transactionType": {"transactionTypeId": 2}},
        {"categoryId": "legacy", "categoryName": "Old", "enabled": false, "transactionType": 1}
    ]"#;

    #[test]
    fn next_id_follows_highest_numeric_id() {
        let mut catalog = CategoryCatalog::from_json_str(FIXTURE).unwrap();
        let created = catalog.create("Rent", TransactionType::Expense).unwrap();
        assert_eq!(created.category_id, CategoryId::from(10));
        assert!(created.enabled);
    }

    #[test]
    fn create_trims_and_rejects_blank_names() {
        let mut catalog = CategoryCatalog::default();
        assert!(matches!(
            catalog.create("   ", TransactionType::Expense),
            Err(PickerError::InvalidInput(_))
        ));
        let created = catalog.create("  Travel ", TransactionType::Expense).unwrap();
        assert_eq!(created.category_name, "Travel");
        assert_eq!(created.category_id, CategoryId::from(1));
    }

    #[test]
    fn duplicates_are_scoped_to_transaction_type() {
        let mut catalog = CategoryCatalog::from_json_str(FIXTURE).unwrap();
        assert!(matches!(
            catalog.create("FOOD", TransactionType::Expense),
            Err(PickerError::CategoryExists(name)) if name == "FOOD"
        ));
        assert!(catalog.create("Food", TransactionType::Income).is_ok());
    }

    #[test]
    fn for_type_filters_by_transaction_type() {
        let catalog = CategoryCatalog::from_json_str(FIXTURE).unwrap();
        let income = catalog.for_type(TransactionType::Income);
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].category_name, "Salary");
        assert_eq!(catalog.for_type(TransactionType::Expense).len(), 2);
    }

    #[test]
    fn set_enabled_reports_unknown_ids() {
        let mut catalog = CategoryCatalog::from_json_str(FIXTURE).unwrap();
        catalog.set_enabled(&CategoryId::from("legacy"), true).unwrap();
        assert!(catalog.get(&CategoryId::from("legacy")).unwrap().enabled);
        assert!(matches!(
            catalog.set_enabled(&CategoryId::from(99), false),
            Err(PickerError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn malformed_fixture_is_a_serde_error() {
        assert!(matches!(
            CategoryCatalog::from_json_str("{not json"),
            Err(PickerError::Serde(_))
        ));
    }
}
