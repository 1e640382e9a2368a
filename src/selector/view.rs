use crate::domain::CategoryId;
use crate::selector::matching::LabelSegment;

/// Snapshot of everything the selector displays, independent of the
/// surface it is painted on.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorView {
    pub input: InputView,
    pub menu: Option<MenuView>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    pub text: String,
    pub placeholder: String,
    /// Name of the selected category, shown only while the menu is closed.
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub rows: Vec<OptionRow>,
    pub create: Option<CreateRow>,
    pub empty: Option<EmptyState>,
}

impl MenuView {
    pub fn show_divider(&self) -> bool {
        !self.rows.is_empty() && self.create.is_some()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.highlighted)
            .map(|row| row.index)
            .or_else(|| {
                self.create
                    .as_ref()
                    .filter(|create| create.highlighted)
                    .map(|create| create.index)
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    pub index: usize,
    pub category_id: CategoryId,
    pub segments: Vec<LabelSegment>,
    pub selected: bool,
    pub highlighted: bool,
}

impl OptionRow {
    pub fn label(&self) -> String {
        self.segments.iter().map(|segment| segment.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateRow {
    pub index: usize,
    pub name: String,
    pub highlighted: bool,
    pub creating: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    TypeToCreate,
    NoMatches,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::TypeToCreate => "Type to create a category",
            EmptyState::NoMatches => "No matching categories",
        }
    }
}
