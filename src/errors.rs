use std::{fmt, io};

use thiserror::Error;

/// Error type returned by every formatting operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("malformed date `{date}`: {fault}")]
    MalformedDate { date: String, fault: DateFault },
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::UnknownCurrency(_) => ErrorKind::UnknownCurrency,
            LedgerError::UnknownLocale(_) => ErrorKind::UnknownLocale,
            LedgerError::MalformedDate { .. } => ErrorKind::MalformedDate,
        }
    }

    pub(crate) fn malformed_date(date: &str, fault: DateFault) -> Self {
        LedgerError::MalformedDate {
            date: date.to_string(),
            fault,
        }
    }
}

/// Coarse classification of [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownCurrency,
    UnknownLocale,
    MalformedDate,
}

/// Which part of a `YYYY-MM-DD` string could not be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFault {
    FieldCount(usize),
    Year,
    Month,
    MonthOutOfRange(i32),
    Day,
    DayOutOfRange(i32),
}

impl fmt::Display for DateFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFault::FieldCount(count) => write!(f, "expected 3 fields, found {count}"),
            DateFault::Year => f.write_str("bad year"),
            DateFault::Month => f.write_str("bad month"),
            DateFault::MonthOutOfRange(month) => write!(f, "month {month} out of range"),
            DateFault::Day => f.write_str("bad day"),
            DateFault::DayOutOfRange(day) => write!(f, "day {day} out of range"),
        }
    }
}

/// Failures while loading or storing a [`crate::config::ReportConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] LedgerError),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// User-facing error of the `ledger_report` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
