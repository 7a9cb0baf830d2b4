//! Counts the days spent outside a home jurisdiction from a list of travel date ranges.

pub mod clock;
pub mod config;
pub mod dates;
pub mod error;
pub mod parse_ranges;
pub mod render;
pub mod travel_log;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ColorMode, Config};
pub use dates::{DateFormat, parse_date};
pub use error::{LineError, ParseError};
pub use parse_ranges::{
    ErrorPolicy, RangeParseResult, TravelInterval, parse_date_ranges, parse_date_ranges_with,
};
pub use travel_log::{
    Report, TravelLog, TravelTotals, build_report, compute_travel_logs, past_year_window,
    trailing_window,
};
