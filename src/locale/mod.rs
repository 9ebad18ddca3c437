//! Closed catalog of report locales.
//!
//! Every supported locale owns a static [`LocaleProfile`] describing its column
//! titles, date order, number separators and how negative amounts are marked.

mod date;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

pub use date::{format_date, parse_date, LedgerDate};

/// Locales a report can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "nl-NL")]
    NlNl,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::EnUs, Locale::NlNl];

    /// Looks up a locale by its exact language tag (`en-US`, `nl-NL`).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    pub fn code(self) -> &'static str {
        self.profile().code
    }

    pub fn profile(self) -> &'static LocaleProfile {
        match self {
            Locale::EnUs => &EN_US,
            Locale::NlNl => &NL_NL,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::EnUs
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LedgerError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::from_code(code).ok_or_else(|| LedgerError::UnknownLocale(code.to_string()))
    }
}

/// Resolves a language tag to its formatting profile.
pub fn resolve_locale(code: &str) -> Option<&'static LocaleProfile> {
    Locale::from_code(code).map(Locale::profile)
}

/// Column titles of the report header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headers {
    pub date: &'static str,
    pub description: &'static str,
    pub change: &'static str,
}

/// Field order and separator used when rendering a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormatStyle {
    /// `MM/DD/YYYY`
    MonthDayYear,
    /// `DD-MM-YYYY`
    DayMonthYear,
}

/// How a negative amount is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativeStyle {
    /// `($1.00)`
    Parentheses,
    /// `€ 1,00-`
    TrailingMinus,
}

/// Locale-specific formatting preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleProfile {
    pub code: &'static str,
    pub headers: Headers,
    pub date_format: DateFormatStyle,
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// Text placed between the currency symbol and the number.
    pub symbol_spacing: &'static str,
    pub negative_style: NegativeStyle,
}

impl LocaleProfile {
    /// Width of the header amount column: the length of the localized label.
    pub fn change_header_width(&self) -> usize {
        self.headers.change.chars().count()
    }
}

pub const EN_US: LocaleProfile = LocaleProfile {
    code: "en-US",
    headers: Headers {
        date: "Date",
        description: "Description",
        change: "Change",
    },
    date_format: DateFormatStyle::MonthDayYear,
    decimal_separator: '.',
    grouping_separator: ',',
    symbol_spacing: "",
    negative_style: NegativeStyle::Parentheses,
};

pub const NL_NL: LocaleProfile = LocaleProfile {
    code: "nl-NL",
    headers: Headers {
        date: "Datum",
        description: "Omschrijving",
        change: "Verandering",
    },
    date_format: DateFormatStyle::DayMonthYear,
    decimal_separator: ',',
    grouping_separator: '.',
    symbol_spacing: " ",
    negative_style: NegativeStyle::TrailingMinus,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_tags_only() {
        assert_eq!(resolve_locale("en-US"), Some(&EN_US));
        assert_eq!(resolve_locale("nl-NL"), Some(&NL_NL));
        assert_eq!(resolve_locale("fr-FR"), None);
        assert_eq!(resolve_locale("en-us"), None);
    }

    #[test]
    fn parse_rejects_unknown_locale() {
        let err = "fr-FR".parse::<Locale>().unwrap_err();
        assert_eq!(err, LedgerError::UnknownLocale("fr-FR".into()));
        assert_eq!("nl-NL".parse::<Locale>().unwrap(), Locale::NlNl);
    }

    #[test]
    fn header_width_follows_label() {
        assert_eq!(EN_US.change_header_width(), 6);
        assert_eq!(NL_NL.change_header_width(), 11);
    }

    #[test]
    fn serde_uses_language_tags() {
        let json = serde_json::to_string(&Locale::NlNl).unwrap();
        assert_eq!(json, "\"nl-NL\"");
        let back: Locale = serde_json::from_str("\"en-US\"").unwrap();
        assert_eq!(back, Locale::EnUs);
    }
}
