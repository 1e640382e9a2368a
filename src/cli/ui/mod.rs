pub mod navigation;
pub mod selector_renderer;
pub mod style;
pub mod terminal_guard;
pub mod test_mode;

pub use selector_renderer::{paint, PaintedSelector, RowTarget};
pub use style::UiStyle;
