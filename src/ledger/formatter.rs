use std::cmp::Ordering;

use tracing::debug;

use crate::{
    currency::{format_change, Currency},
    errors::Result,
    layout::{format_row, DATA_CHANGE_WIDTH},
    locale::{format_date, Locale, LocaleProfile},
};

use super::entry::Entry;

/// Renders entries into a fixed-width report for one currency and locale.
///
/// Both codes are validated on construction, currency first, so a formatter
/// can be reused for any number of entry lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerFormatter {
    currency: Currency,
    locale: Locale,
}

impl LedgerFormatter {
    pub fn new(currency: &str, locale: &str) -> Result<Self> {
        let currency: Currency = currency.parse()?;
        let locale: Locale = locale.parse()?;
        Ok(Self::with(currency, locale))
    }

    pub fn with(currency: Currency, locale: Locale) -> Self {
        Self { currency, locale }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The header line alone; also the full report for an empty entry list.
    pub fn header(&self) -> String {
        let profile = self.profile();
        let headers = &profile.headers;
        format_row(
            headers.date,
            headers.description,
            headers.change,
            profile.change_header_width(),
        )
    }

    /// Formats one data row. Fails on a malformed date.
    pub fn row(&self, entry: &Entry) -> Result<String> {
        let profile = self.profile();
        let date = format_date(&entry.date, profile)?;
        let change = format_change(entry.change_cents, profile, self.currency.code())?;
        Ok(format_row(
            &date,
            &entry.description,
            &change,
            DATA_CHANGE_WIDTH,
        ))
    }

    /// Sorts a private copy of `entries` and renders the whole report.
    ///
    /// The first failing row aborts the call; no partial report is returned.
    pub fn format(&self, entries: &[Entry]) -> Result<String> {
        let mut sorted = entries.to_vec();
        sorted.sort_by(compare_entries);

        let mut report = self.header();
        for entry in &sorted {
            match self.row(entry) {
                Ok(line) => report.push_str(&line),
                Err(err) => {
                    debug!("ledger report aborted on entry dated `{}`: {}", entry.date, err);
                    return Err(err);
                }
            }
        }
        debug!(
            "formatted {} ledger entries ({} / {})",
            sorted.len(),
            self.currency,
            self.locale
        );
        Ok(report)
    }

    fn profile(&self) -> &'static LocaleProfile {
        self.locale.profile()
    }
}

/// Report order: date text, then description, then amount.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.description.cmp(&b.description))
        .then_with(|| a.change_cents.cmp(&b.change_cents))
}

/// Validates `currency` and `locale`, then formats `entries`.
pub fn format_ledger(currency: &str, locale: &str, entries: &[Entry]) -> Result<String> {
    LedgerFormatter::new(currency, locale)?.format(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorKind, LedgerError};

    #[test]
    fn currency_is_checked_before_locale() {
        let err = LedgerFormatter::new("GBP", "fr-FR").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCurrency);
        let err = LedgerFormatter::new("USD", "fr-FR").unwrap_err();
        assert_eq!(err, LedgerError::UnknownLocale("fr-FR".into()));
    }

    #[test]
    fn empty_list_is_header_only() {
        let formatter = LedgerFormatter::new("EUR", "nl-NL").unwrap();
        assert_eq!(
            formatter.format(&[]).unwrap(),
            "Datum      | Omschrijving              | Verandering\n"
        );
    }

    #[test]
    fn sort_key_falls_through_to_amount() {
        let a = Entry::new("2015-01-01", "Same", 10);
        let b = Entry::new("2015-01-01", "Same", -10);
        assert_eq!(compare_entries(&a, &b), Ordering::Greater);
        let c = Entry::new("2015-01-01", "Other", 10);
        assert_eq!(compare_entries(&c, &a), Ordering::Less);
        let d = Entry::new("2014-12-31", "Zzz", 99);
        assert_eq!(compare_entries(&d, &c), Ordering::Less);
    }

    #[test]
    fn row_error_discards_report() {
        let formatter = LedgerFormatter::new("USD", "en-US").unwrap();
        let entries = vec![
            Entry::new("2015-01-01", "Fine", 100),
            Entry::new("2015-13-01", "Broken", 100),
        ];
        let err = formatter.format(&entries).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDate);
    }
}
