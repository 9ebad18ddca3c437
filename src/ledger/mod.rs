//! Ledger entries and the report formatter built on top of them.

pub mod entry;
pub mod formatter;

pub use entry::Entry;
pub use formatter::{compare_entries, format_ledger, LedgerFormatter};
