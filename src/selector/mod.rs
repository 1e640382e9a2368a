//! Searchable, single-select category combo-box with inline creation.
//!
//! The selector is a controlled view: the selection, the category list and
//! the creation status all live in a [`CategorySource`] supplied by the
//! parent, and the selector only reports intents back through it.

pub mod matching;
pub mod options;
pub mod state;
pub mod view;

pub use matching::{contains_ignore_case, equals_ignore_case, highlight_segments, LabelSegment};
pub use options::{OptionSet, OptionTarget};
pub use state::{CategorySelector, SelectorKey, SelectorResponse};
pub use view::{CreateRow, EmptyState, InputView, MenuView, OptionRow, SelectorView};

use crate::domain::Category;

pub const DEFAULT_PLACEHOLDER: &str = "Search or create...";

/// View model the selector reads from and reports to.
pub trait CategorySource {
    fn categories(&self) -> &[Category];

    /// Currently selected identifier, empty when nothing is selected.
    fn selected_id(&self) -> &str;

    /// True while a creation request issued through
    /// [`CategorySource::on_create_category`] is still in flight.
    fn is_creating(&self) -> bool;

    fn error(&self) -> Option<&str>;

    fn on_change(&mut self, category_id: &str);

    fn on_create_category(&mut self, name: &str);
}
