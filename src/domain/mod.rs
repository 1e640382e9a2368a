pub mod category;
pub mod common;
pub mod transaction;

pub use category::{Category, CategoryId};
pub use common::{Displayable, NamedEntity};
pub use transaction::{Frequency, TransactionDraft, TransactionRecord, TransactionType};
