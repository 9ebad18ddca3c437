#![doc(test(attr(deny(warnings))))]

//! Ledger Report renders ledger entries into an aligned plain-text table with
//! locale-specific dates, currency symbols and negative-amount notation.
//!
//! ```
//! use ledger_report::{format_ledger, Entry};
//!
//! let entries = vec![Entry::new("2023-01-05", "Coffee", -350)];
//! let report = format_ledger("USD", "en-US", &entries).unwrap();
//! assert!(report.ends_with("|       ($3.50)\n"));
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod layout;
pub mod ledger;
pub mod locale;
pub mod utils;

use std::sync::Once;

pub use currency::{resolve_currency, Currency};
pub use errors::{ErrorKind, LedgerError};
pub use ledger::{format_ledger, Entry, LedgerFormatter};
pub use locale::{resolve_locale, Locale, LocaleProfile};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Report tracing initialized.");
    });
}
