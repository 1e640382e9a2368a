//! Runs the category selector on a terminal on behalf of a transaction form.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, KeyCode},
    terminal::{self, ClearType},
    ExecutableCommand, QueueableCommand,
};
use tracing::warn;

use crate::catalog::CategoryCatalog;
use crate::cli::output;
use crate::cli::ui::{
    navigation::{self, PickerInput},
    paint,
    terminal_guard::{MouseCaptureGuard, RawModeGuard},
    test_mode, PaintedSelector, RowTarget, UiStyle,
};
use crate::config::PickerConfig;
use crate::domain::Category;
use crate::errors::Result;
use crate::form::TransactionForm;
use crate::selector::{CategorySelector, SelectorKey, SelectorResponse, SelectorView};

#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    Picked(Category),
    Escaped,
}

pub struct PickerSession<'a> {
    form: &'a mut TransactionForm,
    catalog: &'a mut CategoryCatalog,
    selector: CategorySelector,
    style: UiStyle,
    placeholder: String,
    painted: PaintedSelector,
    origin_row: u16,
    notice: Option<String>,
    interactive: bool,
}

impl<'a> PickerSession<'a> {
    pub fn new(
        form: &'a mut TransactionForm,
        catalog: &'a mut CategoryCatalog,
        config: &PickerConfig,
    ) -> Self {
        Self {
            form,
            catalog,
            selector: CategorySelector::new(),
            style: UiStyle::detect(config.plain_mode),
            placeholder: config.placeholder.clone(),
            painted: PaintedSelector::default(),
            origin_row: 0,
            notice: None,
            interactive: false,
        }
    }

    pub fn with_style(mut self, style: UiStyle) -> Self {
        self.style = style;
        self
    }

    pub fn selector(&self) -> &CategorySelector {
        &self.selector
    }

    pub fn view(&self) -> SelectorView {
        self.selector.view(&*self.form, &self.placeholder)
    }

    /// Layout of the last paint; mouse rows are resolved against it.
    pub fn painted(&self) -> &PaintedSelector {
        &self.painted
    }

    /// Error from the last failed creation, shown under the widget.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Focuses the selector and lays it out for the first input.
    pub fn begin(&mut self) {
        self.selector.focus();
        self.repaint();
    }

    /// Uses the scripted keys when test mode is on, the terminal otherwise.
    pub fn run(&mut self) -> Result<PickOutcome> {
        if let Some(keys) = test_mode::next_selector_events("category") {
            return Ok(self.run_simulated(&keys));
        }
        self.run_interactive()
    }

    pub fn run_simulated(&mut self, keys: &[KeyCode]) -> PickOutcome {
        self.interactive = false;
        self.begin();
        for key in keys {
            if let Some(outcome) = self.apply(navigation::key_input(*key)) {
                return outcome;
            }
        }
        PickOutcome::Escaped
    }

    fn run_interactive(&mut self) -> Result<PickOutcome> {
        let mut raw_mode = RawModeGuard::activate()?;
        let mut stdout = io::stdout();
        let mut mouse_capture = MouseCaptureGuard::activate(&mut stdout)?;
        self.interactive = true;
        self.origin_row = cursor::position()?.1;
        self.begin();

        let outcome = loop {
            self.draw(&mut stdout)?;
            let input = navigation::event_input(event::read()?);
            if let Some(outcome) = self.apply(input) {
                break outcome;
            }
        };

        self.clear(&mut stdout)?;
        mouse_capture.deactivate();
        raw_mode.deactivate();
        Ok(outcome)
    }

    /// Feeds one input to the selector and reports whether the session is
    /// finished. Rows of later mouse inputs refer to the layout painted here.
    pub fn apply(&mut self, input: PickerInput) -> Option<PickOutcome> {
        if matches!(
            input,
            PickerInput::Char(_) | PickerInput::Backspace | PickerInput::Esc
        ) {
            self.notice = None;
        }
        let response = match input {
            PickerInput::Up => self.selector.handle_key(SelectorKey::Up, &mut *self.form),
            PickerInput::Down => self.selector.handle_key(SelectorKey::Down, &mut *self.form),
            PickerInput::Enter => self.selector.handle_key(SelectorKey::Enter, &mut *self.form),
            PickerInput::Esc => self.selector.handle_key(SelectorKey::Esc, &mut *self.form),
            PickerInput::Char(ch) => {
                self.selector.push_char(ch);
                SelectorResponse::Handled
            }
            PickerInput::Backspace => {
                self.selector.backspace();
                SelectorResponse::Handled
            }
            PickerInput::Interrupt => return Some(PickOutcome::Escaped),
            PickerInput::Click { row } => self.click(row),
            PickerInput::Hover { row } => self.hover(row),
            PickerInput::Resize | PickerInput::Unknown => {
                self.selector.handle_key(SelectorKey::Other, &mut *self.form)
            }
        };
        let outcome = self.settle(response);
        if outcome.is_none() {
            self.repaint();
        }
        outcome
    }

    fn settle(&mut self, response: SelectorResponse) -> Option<PickOutcome> {
        match response {
            SelectorResponse::Selected(_) => {
                self.notice = None;
                self.form.selected_category().cloned().map(PickOutcome::Picked)
            }
            SelectorResponse::CreateRequested(_) => {
                match self.form.resolve_pending_category(&mut *self.catalog) {
                    Ok(created) => created.map(PickOutcome::Picked),
                    Err(err) => {
                        warn!(error = %err, "category could not be created");
                        if !self.interactive {
                            output::error(&err);
                        }
                        self.notice = Some(err.to_string());
                        None
                    }
                }
            }
            SelectorResponse::Released => Some(PickOutcome::Escaped),
            SelectorResponse::Handled | SelectorResponse::Ignored => None,
        }
    }

    fn line_at(&self, row: u16) -> Option<RowTarget> {
        let line = row.checked_sub(self.origin_row)?;
        self.painted.target_at(usize::from(line))
    }

    fn click(&mut self, row: u16) -> SelectorResponse {
        match self.line_at(row) {
            Some(RowTarget::Option(index)) => self.selector.click_option(index, &mut *self.form),
            Some(RowTarget::Create(_)) => self.selector.click_create(&mut *self.form),
            Some(RowTarget::Input) => {
                self.selector.focus();
                SelectorResponse::Handled
            }
            Some(RowTarget::Decoration | RowTarget::Error) => SelectorResponse::Handled,
            None => self.selector.pointer_down_outside(),
        }
    }

    fn hover(&mut self, row: u16) -> SelectorResponse {
        match self.line_at(row) {
            Some(RowTarget::Option(index) | RowTarget::Create(index)) => {
                self.selector.hover(index, &*self.form)
            }
            _ => SelectorResponse::Ignored,
        }
    }

    fn repaint(&mut self) {
        let mut painted = paint(&self.view(), &self.style);
        if let Some(notice) = &self.notice {
            painted.push(RowTarget::Error, self.style.apply_error_style(notice));
        }
        self.painted = painted;
    }

    fn draw(&mut self, stdout: &mut Stdout) -> io::Result<()> {
        let painted = &self.painted;
        stdout.queue(cursor::MoveTo(0, self.origin_row))?;
        stdout.queue(terminal::Clear(ClearType::FromCursorDown))?;
        write!(stdout, "{}", painted.lines.join("\r\n"))?;
        stdout.flush()?;

        // Writing past the bottom of the screen scrolls it, so re-derive where
        // the first line ended up.
        let (_, end_row) = cursor::position()?;
        let extra_lines = u16::try_from(painted.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.origin_row = end_row.saturating_sub(extra_lines);

        let input_column = self.style.search_icon.chars().count()
            + self.selector.search_text().chars().count();
        stdout.execute(cursor::MoveTo(
            u16::try_from(input_column).unwrap_or(u16::MAX),
            self.origin_row,
        ))?;
        Ok(())
    }

    fn clear(&mut self, stdout: &mut Stdout) -> io::Result<()> {
        stdout.queue(cursor::MoveTo(0, self.origin_row))?;
        stdout.queue(terminal::Clear(ClearType::FromCursorDown))?;
        stdout.flush()
    }
}
