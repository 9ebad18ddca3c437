use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ledger line as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    pub description: String,
    /// Signed amount in cents; negative for debits.
    #[serde(rename = "change")]
    pub change_cents: i64,
}

impl Entry {
    pub fn new(date: impl Into<String>, description: impl Into<String>, change_cents: i64) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            change_cents,
        }
    }

    pub fn dated(date: NaiveDate, description: impl Into<String>, change_cents: i64) -> Self {
        Self::new(date.format("%Y-%m-%d").to_string(), description, change_cents)
    }
}
