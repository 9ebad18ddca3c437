use std::fmt;

use crate::errors::{DateFault, LedgerError, Result};

use super::{DateFormatStyle, LocaleProfile};

/// A `YYYY-MM-DD` date split into its numeric fields.
///
/// Only the field ranges are checked (month `1..=12`, day `1..=31`); the
/// calendar itself is not consulted, so `2023-02-30` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LedgerDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl LedgerDate {
    pub fn render(&self, style: DateFormatStyle) -> String {
        match style {
            DateFormatStyle::MonthDayYear => {
                format!("{:02}/{:02}/{}", self.month, self.day, self.year)
            }
            DateFormatStyle::DayMonthYear => {
                format!("{:02}-{:02}-{}", self.day, self.month, self.year)
            }
        }
    }
}

impl fmt::Display for LedgerDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parses a `YYYY-MM-DD` string.
pub fn parse_date(date: &str) -> Result<LedgerDate> {
    let fields: Vec<&str> = date.split('-').collect();
    if fields.len() != 3 {
        return Err(LedgerError::malformed_date(
            date,
            DateFault::FieldCount(fields.len()),
        ));
    }

    let year: i32 = fields[0]
        .parse()
        .map_err(|_| LedgerError::malformed_date(date, DateFault::Year))?;
    let month: i32 = fields[1]
        .parse()
        .map_err(|_| LedgerError::malformed_date(date, DateFault::Month))?;
    if !(1..=12).contains(&month) {
        return Err(LedgerError::malformed_date(
            date,
            DateFault::MonthOutOfRange(month),
        ));
    }
    let day: i32 = fields[2]
        .parse()
        .map_err(|_| LedgerError::malformed_date(date, DateFault::Day))?;
    if !(1..=31).contains(&day) {
        return Err(LedgerError::malformed_date(
            date,
            DateFault::DayOutOfRange(day),
        ));
    }

    Ok(LedgerDate {
        year,
        month: month as u32,
        day: day as u32,
    })
}

/// Parses `date` and renders it in the locale's date order.
pub fn format_date(date: &str, locale: &LocaleProfile) -> Result<String> {
    let parsed = parse_date(date)?;
    Ok(parsed.render(locale.date_format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::locale::{EN_US, NL_NL};

    fn fault(date: &str) -> DateFault {
        match parse_date(date) {
            Err(LedgerError::MalformedDate { fault, .. }) => fault,
            other => panic!("expected malformed date for {date}, got {other:?}"),
        }
    }

    #[test]
    fn renders_per_locale() {
        assert_eq!(format_date("2015-01-01", &EN_US).unwrap(), "01/01/2015");
        assert_eq!(format_date("2015-03-12", &NL_NL).unwrap(), "12-03-2015");
    }

    #[test]
    fn pads_short_fields() {
        assert_eq!(format_date("987-1-2", &EN_US).unwrap(), "01/02/987");
    }

    #[test]
    fn field_count_is_checked() {
        assert_eq!(fault("2015-01"), DateFault::FieldCount(2));
        assert_eq!(fault("2015-01-01-01"), DateFault::FieldCount(4));
        assert_eq!(fault("20150101"), DateFault::FieldCount(1));
    }

    #[test]
    fn non_numeric_fields_are_named() {
        assert_eq!(fault("abcd-01-01"), DateFault::Year);
        assert_eq!(fault("2015-xx-01"), DateFault::Month);
        assert_eq!(fault("2015-01-"), DateFault::Day);
    }

    #[test]
    fn month_and_day_ranges() {
        assert_eq!(fault("2023-13-01"), DateFault::MonthOutOfRange(13));
        assert_eq!(fault("2023-00-01"), DateFault::MonthOutOfRange(0));
        assert_eq!(fault("2023-01-00"), DateFault::DayOutOfRange(0));
        assert_eq!(fault("2023-01-32"), DateFault::DayOutOfRange(32));
    }

    #[test]
    fn calendar_is_not_consulted() {
        assert_eq!(format_date("2023-02-30", &EN_US).unwrap(), "02/30/2023");
    }

    #[test]
    fn errors_share_one_kind() {
        let err = parse_date("2023-13-01").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDate);
        assert_eq!(
            err.to_string(),
            "malformed date `2023-13-01`: month 13 out of range"
        );
    }
}
