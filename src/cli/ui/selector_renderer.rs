//! Paints a [`SelectorView`] as terminal lines and records which part of the
//! widget each line belongs to, for mouse hit-testing.

use crate::cli::ui::style::UiStyle;
use crate::selector::{CreateRow, OptionRow, SelectorView};

const CREATING_TEXT: &str = "Creating...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Input,
    Option(usize),
    Create(usize),
    Decoration,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintedSelector {
    pub lines: Vec<String>,
    pub targets: Vec<RowTarget>,
}

impl PaintedSelector {
    pub fn push(&mut self, target: RowTarget, line: String) {
        self.lines.push(line);
        self.targets.push(target);
    }

    /// Widget part under the given line, `None` when outside the widget.
    pub fn target_at(&self, line: usize) -> Option<RowTarget> {
        self.targets.get(line).copied()
    }
}

pub fn paint(view: &SelectorView, style: &UiStyle) -> PaintedSelector {
    let mut painted = PaintedSelector::default();
    painted.push(RowTarget::Input, input_line(view, style));

    if let Some(menu) = &view.menu {
        for row in &menu.rows {
            painted.push(RowTarget::Option(row.index), option_line(row, style));
        }
        if menu.show_divider() {
            painted.push(RowTarget::Decoration, style.horizontal_line(0));
        }
        if let Some(create) = &menu.create {
            painted.push(RowTarget::Create(create.index), create_line(create, style));
        }
        if let Some(empty) = menu.empty {
            let line = format!("{}{}", style.normal_marker, empty.message());
            painted.push(RowTarget::Decoration, style.apply_dim_style(&line));
        }
    }

    if let Some(error) = &view.error {
        painted.push(RowTarget::Error, style.apply_error_style(error));
    }
    painted
}

fn input_line(view: &SelectorView, style: &UiStyle) -> String {
    let input = &view.input;
    let shown = if !input.text.is_empty() {
        input.text.clone()
    } else if let Some(badge) = &input.badge {
        format!("{} {}", style.check_icon, style.apply_highlight_style(badge))
    } else {
        style.apply_dim_style(&input.placeholder)
    };
    format!("{}{}", style.search_icon, shown)
}

fn marker(highlighted: bool, style: &UiStyle) -> String {
    if highlighted {
        style.apply_highlight_style(&style.highlight_marker)
    } else {
        style.normal_marker.clone()
    }
}

fn option_line(row: &OptionRow, style: &UiStyle) -> String {
    let label: String = row
        .segments
        .iter()
        .map(|segment| {
            if segment.marked {
                style.apply_mark_style(&segment.text)
            } else {
                segment.text.clone()
            }
        })
        .collect();
    let check = if row.selected {
        format!(" {}", style.check_icon)
    } else {
        String::new()
    };
    format!("{}{}{}", marker(row.highlighted, style), label, check)
}

fn create_line(create: &CreateRow, style: &UiStyle) -> String {
    if create.creating {
        return format!(
            "{}{}",
            style.normal_marker,
            style.apply_dim_style(CREATING_TEXT)
        );
    }
    format!(
        "{}{} Create \"{}\"",
        marker(create.highlighted, style),
        style.create_icon,
        create.name
    )
}
