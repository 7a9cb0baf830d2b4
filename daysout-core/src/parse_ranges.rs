//! Turns the lines of a travel file into validated `(start, end)` date pairs.

use chrono::NaiveDate;
use strum_macros::{AsRefStr, EnumIter, EnumString};
use tracing::debug;

use crate::dates::parse_date;
use crate::error::{LineError, ParseError};

/// A single trip: the day of departure through the day of return, both inclusive.
///
/// `start <= end` always holds; use [`TravelInterval::new`] to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TravelInterval {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
}

impl TravelInterval {
    /// Builds an interval, rejecting a start date that falls after the end date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ParseError> {
        if start > end {
            return Err(ParseError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// What to do when a line fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first bad line.
    #[default]
    FailFast,
    /// Examine every line and report every bad one.
    CollectAll,
}

/// Outcome of [`parse_date_ranges_with`]: the intervals that parsed, plus any line errors.
///
/// Callers must not present `intervals` as a report when `errors` is non-empty.
#[derive(Debug, Default)]
pub struct RangeParseResult {
    pub intervals: Vec<TravelInterval>,
    pub errors: Vec<LineError>,
}

impl RangeParseResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses one `start - end` line into a [`TravelInterval`].
///
/// The line must contain exactly one `-`. Whitespace around the separator and around
/// each date is ignored.
pub fn parse_range_line(line: &str) -> Result<TravelInterval, ParseError> {
    let fields: Vec<&str> = line.split('-').collect();
    let [start, end] = fields.as_slice() else {
        return Err(ParseError::MalformedLine {
            separators: fields.len() - 1,
        });
    };
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    TravelInterval::new(start, end)
}

/// Parses every line into a [`TravelInterval`], keeping input order.
///
/// Parsing stops at the first bad line; nothing after it is examined.
///
/// # Errors
///
/// A [`LineError`] naming the 1-based line number, the raw line, and the
/// [`ParseError`] kind (`MalformedLine`, `InvalidDateFormat` or `InvalidInterval`).
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use daysout_core::error::ParseError;
/// # use daysout_core::parse_ranges::parse_date_ranges;
/// let ranges = parse_date_ranges(["1 Nov 2023 - 3 Nov 2023", "01/10/2023 - 2 October 2023"]).unwrap();
/// assert_eq!(ranges.len(), 2);
/// assert_eq!(ranges[1].start(), NaiveDate::from_ymd_opt(2023, 10, 1).unwrap());
///
/// let err = parse_date_ranges(["31/12/2023 - 1 Nov 2023"]).unwrap_err();
/// assert_eq!(err.line, 1);
/// assert!(matches!(err.error, ParseError::InvalidInterval { .. }));
/// ```
pub fn parse_date_ranges<I, S>(lines: I) -> Result<Vec<TravelInterval>, LineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = parse_date_ranges_with(lines, ErrorPolicy::FailFast);
    match result.errors.pop() {
        Some(error) => Err(error),
        None => Ok(result.intervals),
    }
}

/// Parses every line under the given [`ErrorPolicy`].
///
/// With [`ErrorPolicy::FailFast`] at most one error is returned. With
/// [`ErrorPolicy::CollectAll`] every failing line is reported in line order.
pub fn parse_date_ranges_with<I, S>(lines: I, policy: ErrorPolicy) -> RangeParseResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = RangeParseResult::default();
    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match parse_range_line(line) {
            Ok(interval) => {
                debug!(
                    line = idx + 1,
                    start = %interval.start,
                    end = %interval.end,
                    "parsed interval"
                );
                result.intervals.push(interval);
            }
            Err(error) => {
                result.errors.push(LineError {
                    line: idx + 1,
                    text: line.to_string(),
                    error,
                });
                if policy == ErrorPolicy::FailFast {
                    break;
                }
            }
        }
    }
    result
}
