//! Transaction records and the drafts produced by the transaction form.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::category::CategoryId;

/// Whether a transaction (and its category) is money going out or coming in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransactionType {
    #[default]
    Expense,
    Income,
}

impl TransactionType {
    pub fn id(self) -> u8 {
        match self {
            TransactionType::Expense => 1,
            TransactionType::Income => 2,
        }
    }

    pub fn from_id(id: u64) -> Option<Self> {
        match id {
            1 => Some(TransactionType::Expense),
            2 => Some(TransactionType::Income),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "expense" | "expenses" => Some(TransactionType::Expense),
            "income" => Some(TransactionType::Income),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Expense => "Expense",
            TransactionType::Income => "Income",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionTypeRef {
    transaction_type_id: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTransactionType {
    Id(u64),
    Label(String),
    Ref(TransactionTypeRef),
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match RawTransactionType::deserialize(deserializer)? {
            RawTransactionType::Id(id)
            | RawTransactionType::Ref(TransactionTypeRef {
                transaction_type_id: id,
            }) => TransactionType::from_id(id)
                .ok_or_else(|| D::Error::custom(format!("unknown transaction type id {id}"))),
            RawTransactionType::Label(label) => TransactionType::from_label(&label)
                .ok_or_else(|| D::Error::custom(format!("unknown transaction type `{label}`"))),
        }
    }
}

impl Serialize for TransactionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TransactionTypeRef {
            transaction_type_id: u64::from(self.id()),
        }
        .serialize(serializer)
    }
}

/// Repeat cadence of a saved (recurring) transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}

/// Existing transaction as returned by the transaction API, used to seed the
/// edit form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub transaction_id: u64,
    pub category_id: CategoryId,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    /// Timestamp as sent by the API, e.g. `2024-03-01T00:00:00`.
    pub date: String,
    #[serde(default)]
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
}

/// Validated form output ready to hand to the transaction API.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub category_id: CategoryId,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub frequency: Option<Frequency>,
}
