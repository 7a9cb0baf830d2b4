//! Calendar dates as written in a travel file.

use chrono::NaiveDate;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

use crate::error::ParseError;

/// The textual date layouts accepted in a travel file.
///
/// Variants are declared in the order they are tried by [`parse_date`]; the first
/// layout that matches the whole (trimmed) string wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
pub enum DateFormat {
    /// `1 Jan 2023`, `01 Jan 2023`
    #[strum(serialize = "DD MMM YYYY")]
    DayMonthAbbrevYear,
    /// `1 January 2023`
    #[strum(serialize = "DD Month YYYY")]
    DayMonthNameYear,
    /// `01/01/2023`, `1/1/2023`
    #[strum(serialize = "DD/MM/YYYY")]
    DayMonthYearNumeric,
}

impl DateFormat {
    /// The `chrono` format string used to parse this layout.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::DayMonthAbbrevYear => "%d %b %Y",
            DateFormat::DayMonthNameYear => "%d %B %Y",
            DateFormat::DayMonthYearNumeric => "%d/%m/%Y",
        }
    }

    /// Attempts a full-string match of `s` against this layout.
    pub fn parse(self, s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s, self.pattern()).ok()
    }
}

/// Parses a single calendar date written in one of the [`DateFormat`] layouts.
///
/// Surrounding whitespace is ignored. Layouts are tried in declaration order and
/// partial matches are rejected.
///
/// # Errors
///
/// [`ParseError::InvalidDateFormat`] carrying the trimmed text when no layout matches.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use daysout_core::dates::parse_date;
/// let expected = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
///
/// assert_eq!(parse_date(" 1 Jan 2023 ").unwrap(), expected);
/// assert_eq!(parse_date("1 January 2023").unwrap(), expected);
/// assert_eq!(parse_date("01/01/2023").unwrap(), expected);
/// assert!(parse_date("2023-01-01").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate, ParseError> {
    let text = text.trim();
    DateFormat::iter()
        .find_map(|format| format.parse(text))
        .ok_or_else(|| ParseError::InvalidDateFormat {
            text: text.to_string(),
        })
}

/// Signed number of days from `start` to `end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}
