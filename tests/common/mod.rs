#![allow(dead_code)]

use ledger_report::Entry;
use once_cell::sync::Lazy;

pub const EN_US_HEADER: &str = "Date       | Description               | Change\n";
pub const NL_NL_HEADER: &str = "Datum      | Omschrijving              | Verandering\n";

/// Entries deliberately out of report order.
pub static UNSORTED: Lazy<Vec<Entry>> = Lazy::new(|| {
    vec![
        Entry::new("2015-01-02", "Get present", 1000),
        Entry::new("2015-01-01", "Buy present", -1000),
    ]
});

/// Same date and description, differing only by amount.
pub static SAME_DAY: Lazy<Vec<Entry>> = Lazy::new(|| {
    vec![
        Entry::new("2015-01-01", "Something", 0),
        Entry::new("2015-01-01", "Something", -1),
        Entry::new("2015-01-01", "Something", 1),
    ]
});

pub fn entry(date: &str, description: &str, change: i64) -> Entry {
    Entry::new(date, description, change)
}
