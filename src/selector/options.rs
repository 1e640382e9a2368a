//! Option list derived from the category list and the current search text.
//!
//! Recomputed on every event; category lists are small enough that caching
//! would only add invalidation bugs.

use crate::domain::{Category, CategoryId, NamedEntity};
use crate::selector::matching::{contains_ignore_case, equals_ignore_case};

/// Target of a position in the visible option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionTarget {
    Category(CategoryId),
    Create(String),
}

#[derive(Debug)]
pub struct OptionSet<'a> {
    pub enabled: Vec<&'a Category>,
    pub visible: Vec<&'a Category>,
    pub exact_match: bool,
    pub show_create: bool,
    pub selected: Option<&'a Category>,
    query: String,
}

impl<'a> OptionSet<'a> {
    pub fn compute(categories: &'a [Category], search_text: &str, selected_id: &str) -> Self {
        let query = search_text.trim().to_string();
        let enabled: Vec<&Category> = categories.iter().filter(|cat| cat.enabled).collect();
        let visible = enabled
            .iter()
            .copied()
            .filter(|cat| contains_ignore_case(cat.name(), &query))
            .collect();
        let exact_match = enabled
            .iter()
            .any(|cat| equals_ignore_case(cat.name(), &query));
        let show_create = !query.is_empty() && !exact_match;
        let selected = enabled
            .iter()
            .copied()
            .find(|cat| cat.category_id.matches(selected_id));

        Self {
            enabled,
            visible,
            exact_match,
            show_create,
            selected,
            query,
        }
    }

    /// Trimmed search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Visible categories plus the create slot when offered.
    pub fn total(&self) -> usize {
        self.visible.len() + usize::from(self.show_create)
    }

    pub fn create_index(&self) -> Option<usize> {
        self.show_create.then_some(self.visible.len())
    }

    pub fn target(&self, index: usize) -> Option<OptionTarget> {
        if let Some(category) = self.visible.get(index) {
            return Some(OptionTarget::Category(category.category_id.clone()));
        }
        (Some(index) == self.create_index()).then(|| OptionTarget::Create(self.query.clone()))
    }

    pub fn is_selected(&self, category: &Category) -> bool {
        self.selected
            .is_some_and(|selected| selected.category_id == category.category_id)
    }
}
