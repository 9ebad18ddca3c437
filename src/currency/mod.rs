use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{LedgerError, Result},
    locale::{LocaleProfile, NegativeStyle},
};

/// ISO 4217 currencies a report can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Eur];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|currency| currency.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    fn from_str(code: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_code(code).ok_or_else(|| LedgerError::UnknownCurrency(code.to_string()))
    }
}

/// Resolves a currency code to its display symbol.
pub fn resolve_currency(code: &str) -> Option<&'static str> {
    Currency::from_code(code).map(Currency::symbol)
}

/// Renders an absolute amount of cents as major units with two fraction
/// digits, grouping the integer part in threes.
pub fn format_number(locale: &LocaleProfile, cents: u64) -> String {
    let major = (cents / 100).to_string();
    let minor = cents % 100;
    format!(
        "{}{}{:02}",
        group_digits(&major, locale.grouping_separator),
        locale.decimal_separator,
        minor
    )
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (idx + 3 - lead) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a signed amount in cents for a data row.
///
/// Non-negative amounts carry one trailing space so they line up with the
/// closing marker of negative ones.
pub fn format_change(cents: i64, locale: &LocaleProfile, currency: &str) -> Result<String> {
    let symbol =
        resolve_currency(currency).ok_or_else(|| LedgerError::UnknownCurrency(currency.into()))?;
    let body = format!(
        "{}{}{}",
        symbol,
        locale.symbol_spacing,
        format_number(locale, cents.unsigned_abs())
    );
    let rendered = if cents < 0 {
        match locale.negative_style {
            NegativeStyle::Parentheses => format!("({body})"),
            NegativeStyle::TrailingMinus => format!("{body}-"),
        }
    } else {
        format!("{body} ")
    };
    Ok(rendered)
}
