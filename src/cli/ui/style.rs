use std::io::IsTerminal;

use colored::{Color, Colorize};

/// Glyphs and colours used when painting the selector on a terminal.
#[derive(Debug, Clone)]
pub struct UiStyle {
    pub use_color: bool,
    pub plain_mode: bool,
    pub highlight_marker: String,
    pub normal_marker: String,
    pub search_icon: String,
    pub check_icon: String,
    pub create_icon: String,
    pub horizontal: char,
    pub color_highlight: Option<Color>,
    pub color_mark: Option<Color>,
    pub color_error: Option<Color>,
}

impl UiStyle {
    /// Colour only when stdout is a terminal, `NO_COLOR` is unset and plain
    /// mode is off.
    pub fn detect(plain_mode: bool) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        if plain_mode {
            return Self::plain();
        }
        let use_color = stdout_tty && !no_color;
        Self {
            use_color,
            plain_mode: false,
            highlight_marker: "> ".into(),
            normal_marker: "  ".into(),
            search_icon: "⌕ ".into(),
            check_icon: "✓".into(),
            create_icon: "+".into(),
            horizontal: '─',
            color_highlight: use_color.then_some(Color::Cyan),
            color_mark: use_color.then_some(Color::Yellow),
            color_error: use_color.then_some(Color::Red),
        }
    }

    /// ASCII-only, colourless style; matches are bracketed instead of coloured.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            plain_mode: true,
            highlight_marker: "> ".into(),
            normal_marker: "  ".into(),
            search_icon: String::new(),
            check_icon: "*".into(),
            create_icon: "+".into(),
            horizontal: '-',
            color_highlight: None,
            color_mark: None,
            color_error: None,
        }
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        self.horizontal.to_string().repeat(width.max(24))
    }

    pub fn apply_highlight_style(&self, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match self.color_highlight {
            Some(color) => text.color(color).bold().to_string(),
            None => text.bold().to_string(),
        }
    }

    /// Matches are bracketed whenever colour is unavailable.
    pub fn apply_mark_style(&self, text: &str) -> String {
        if self.plain_mode || !self.use_color {
            return format!("[{text}]");
        }
        match self.color_mark {
            Some(color) => text.color(color).underline().to_string(),
            None => text.underline().to_string(),
        }
    }

    pub fn apply_dim_style(&self, text: &str) -> String {
        if self.use_color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn apply_error_style(&self, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match self.color_error {
            Some(color) => text.color(color).to_string(),
            None => text.to_string(),
        }
    }
}
