pub mod output;
pub mod session;
pub mod ui;

pub use session::{PickOutcome, PickerSession};
