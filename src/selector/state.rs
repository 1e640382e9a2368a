use tracing::debug;

use crate::domain::CategoryId;
use crate::selector::matching::highlight_segments;
use crate::selector::options::{OptionSet, OptionTarget};
use crate::selector::view::{CreateRow, EmptyState, InputView, MenuView, OptionRow, SelectorView};
use crate::selector::CategorySource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKey {
    Up,
    Down,
    Enter,
    Esc,
    Other,
}

/// What an event did, as seen by the host surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorResponse {
    /// Not consumed; the host keeps its default behaviour.
    Ignored,
    /// Consumed without notifying the parent.
    Handled,
    Selected(CategoryId),
    CreateRequested(String),
    /// Closed by the user; the host should move focus away.
    Released,
}

impl SelectorResponse {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, SelectorResponse::Ignored)
    }
}

/// Open/closed state, search text and highlight cursor of the combo-box.
///
/// The highlight is `None` when nothing is highlighted and otherwise always
/// points into the visible option list, create slot included.
#[derive(Debug, Clone, Default)]
pub struct CategorySelector {
    open: bool,
    search_text: String,
    highlight: Option<usize>,
}

impl CategorySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlight
    }

    /// Highlight in the `-1`-for-none convention.
    pub fn highlight_index(&self) -> isize {
        self.highlight.map_or(-1, |index| index as isize)
    }

    pub fn focus(&mut self) {
        self.open();
    }

    /// Replaces the search text, as an edit of the input field does.
    pub fn input(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.highlight = None;
        self.open();
    }

    pub fn push_char(&mut self, ch: char) {
        let mut text = self.search_text.clone();
        text.push(ch);
        self.input(text);
    }

    pub fn backspace(&mut self) {
        let mut text = self.search_text.clone();
        text.pop();
        self.input(text);
    }

    pub fn handle_key<S>(&mut self, key: SelectorKey, source: &mut S) -> SelectorResponse
    where
        S: CategorySource + ?Sized,
    {
        let (total, target, create_fallback) = {
            let options = self.options(&*source);
            let total = options.total();
            self.clamp_highlight(total);
            let target = self.highlight.and_then(|index| options.target(index));
            let create_fallback = (options.show_create && options.visible.is_empty())
                .then(|| options.query().to_string());
            (total, target, create_fallback)
        };

        match key {
            SelectorKey::Down => {
                if !self.open {
                    self.open();
                } else if total > 0 {
                    self.highlight = Some(match self.highlight {
                        Some(index) if index + 1 < total => index + 1,
                        Some(index) => index,
                        None => 0,
                    });
                }
                SelectorResponse::Handled
            }
            SelectorKey::Up => {
                if self.open && total > 0 {
                    self.highlight = Some(self.highlight.map_or(0, |index| index.saturating_sub(1)));
                }
                SelectorResponse::Handled
            }
            SelectorKey::Enter => match (target, create_fallback) {
                (Some(OptionTarget::Category(id)), _) => self.select(id, source),
                (Some(OptionTarget::Create(name)), _) => self
                    .request_create(name, source)
                    .unwrap_or(SelectorResponse::Handled),
                (None, Some(name)) if self.highlight.is_none() => self
                    .request_create(name, source)
                    .unwrap_or(SelectorResponse::Handled),
                _ => SelectorResponse::Handled,
            },
            SelectorKey::Esc => {
                self.close();
                SelectorResponse::Released
            }
            SelectorKey::Other => SelectorResponse::Ignored,
        }
    }

    /// Moves the shared highlight to the option under the pointer.
    pub fn hover<S>(&mut self, index: usize, source: &S) -> SelectorResponse
    where
        S: CategorySource + ?Sized,
    {
        if !self.open || index >= self.options(source).total() {
            return SelectorResponse::Ignored;
        }
        self.highlight = Some(index);
        SelectorResponse::Handled
    }

    pub fn click_option<S>(&mut self, index: usize, source: &mut S) -> SelectorResponse
    where
        S: CategorySource + ?Sized,
    {
        if !self.open {
            return SelectorResponse::Ignored;
        }
        let target = self.options(&*source).visible.get(index).map(|cat| cat.category_id.clone());
        match target {
            Some(id) => self.select(id, source),
            None => SelectorResponse::Ignored,
        }
    }

    pub fn click_create<S>(&mut self, source: &mut S) -> SelectorResponse
    where
        S: CategorySource + ?Sized,
    {
        if !self.open {
            return SelectorResponse::Ignored;
        }
        let name = {
            let options = self.options(&*source);
            options.show_create.then(|| options.query().to_string())
        };
        name.and_then(|name| self.request_create(name, source))
            .unwrap_or(SelectorResponse::Ignored)
    }

    /// Pointer press that landed outside the widget's bounds.
    pub fn pointer_down_outside(&mut self) -> SelectorResponse {
        if !self.open {
            return SelectorResponse::Ignored;
        }
        self.close();
        SelectorResponse::Handled
    }

    pub fn view<S>(&self, source: &S, placeholder: &str) -> SelectorView
    where
        S: CategorySource + ?Sized,
    {
        let options = self.options(source);
        let selected_name = options.selected.map(|cat| cat.category_name.clone());
        let highlight = self.highlight.filter(|index| *index < options.total());

        let menu = self.open.then(|| {
            let rows: Vec<OptionRow> = options
                .visible
                .iter()
                .enumerate()
                .map(|(index, category)| OptionRow {
                    index,
                    category_id: category.category_id.clone(),
                    segments: highlight_segments(&category.category_name, options.query()),
                    selected: options.is_selected(category),
                    highlighted: highlight == Some(index),
                })
                .collect();
            let create = options.create_index().map(|index| CreateRow {
                index,
                name: options.query().to_string(),
                highlighted: highlight == Some(index),
                creating: source.is_creating(),
            });
            let empty = (rows.is_empty() && create.is_none()).then(|| {
                if options.enabled.is_empty() {
                    EmptyState::TypeToCreate
                } else {
                    EmptyState::NoMatches
                }
            });
            MenuView {
                rows,
                create,
                empty,
            }
        });

        SelectorView {
            input: InputView {
                text: self.search_text.clone(),
                placeholder: selected_name
                    .clone()
                    .unwrap_or_else(|| placeholder.to_string()),
                badge: selected_name.filter(|_| !self.open),
            },
            menu,
            error: source
                .error()
                .filter(|message| !message.is_empty())
                .map(str::to_string),
        }
    }

    fn options<'a, S>(&self, source: &'a S) -> OptionSet<'a>
    where
        S: CategorySource + ?Sized,
    {
        OptionSet::compute(source.categories(), &self.search_text, source.selected_id())
    }

    fn clamp_highlight(&mut self, total: usize) {
        self.highlight = match self.highlight {
            Some(_) if total == 0 => None,
            Some(index) => Some(index.min(total - 1)),
            None => None,
        };
    }

    fn select<S>(&mut self, id: CategoryId, source: &mut S) -> SelectorResponse
    where
        S: CategorySource + ?Sized,
    {
        debug!(category_id = %id, "category selected");
        source.on_change(id.as_str());
        self.close();
        SelectorResponse::Selected(id)
    }

    /// Issues a creation request unless one is already in flight.
    fn request_create<S>(&mut self, name: String, source: &mut S) -> Option<SelectorResponse>
    where
        S: CategorySource + ?Sized,
    {
        if name.is_empty() || source.is_creating() {
            debug!(name = %name, "create request suppressed");
            return None;
        }
        debug!(name = %name, "category creation requested");
        source.on_create_category(&name);
        self.close();
        Some(SelectorResponse::CreateRequested(name))
    }

    fn open(&mut self) {
        if !self.open {
            debug!("category menu opened");
            self.open = true;
        }
    }

    fn close(&mut self) {
        if self.open {
            debug!("category menu closed");
        }
        self.open = false;
        self.search_text.clear();
        self.highlight = None;
    }
}
