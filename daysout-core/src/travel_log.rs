//! Day counts per trip, and the trailing-window view of a travel history.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::clock::Clock;
use crate::dates::days_between;
use crate::parse_ranges::TravelInterval;

/// Default length of the trailing window, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 365;

/// Day counts for one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelLog {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inclusive count of calendar days from start through end.
    pub total_days_outside: i64,
    /// Days excluding both the departure and the return day.
    pub full_days_outside: i64,
}

impl TravelLog {
    pub fn from_interval(interval: TravelInterval) -> Self {
        let span = days_between(interval.start(), interval.end());
        Self {
            start_date: interval.start(),
            end_date: interval.end(),
            total_days_outside: span + 1,
            full_days_outside: (span - 1).max(0),
        }
    }

    /// The interval this log was computed from.
    pub fn interval(&self) -> TravelInterval {
        TravelInterval {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// Column sums over a list of [`TravelLog`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TravelTotals {
    pub total_days_outside: i64,
    pub full_days_outside: i64,
}

impl TravelTotals {
    pub fn of(logs: &[TravelLog]) -> Self {
        logs.iter().fold(Self::default(), |acc, log| Self {
            total_days_outside: acc.total_days_outside + log.total_days_outside,
            full_days_outside: acc.full_days_outside + log.full_days_outside,
        })
    }
}

/// Computes a [`TravelLog`] per interval, sorted by start date.
///
/// The sort is stable, so trips sharing a start date keep their input order.
/// Overlapping trips are not merged; each one is counted on its own.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use daysout_core::parse_ranges::TravelInterval;
/// # use daysout_core::travel_log::compute_travel_logs;
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// let intervals = [
///     TravelInterval::new(d(2023, 11, 5), d(2023, 11, 7)).unwrap(),
///     TravelInterval::new(d(2023, 11, 1), d(2023, 11, 1)).unwrap(),
/// ];
///
/// let logs = compute_travel_logs(&intervals);
/// assert_eq!(logs[0].start_date, d(2023, 11, 1));
/// assert_eq!((logs[0].total_days_outside, logs[0].full_days_outside), (1, 0));
/// assert_eq!((logs[1].total_days_outside, logs[1].full_days_outside), (3, 1));
/// ```
pub fn compute_travel_logs(intervals: &[TravelInterval]) -> Vec<TravelLog> {
    let mut logs: Vec<TravelLog> = intervals
        .iter()
        .copied()
        .map(TravelLog::from_interval)
        .collect();
    logs.sort_by_key(|log| log.start_date);
    logs
}

/// Restricts intervals to the `window_days` days ending on `today`.
///
/// The cutoff is `today - window_days`, saturating at the earliest representable date.
/// Intervals ending before the cutoff are dropped; intervals starting before it are
/// clipped to start on it. End dates are never changed and input order is kept.
pub fn trailing_window(
    intervals: &[TravelInterval],
    today: NaiveDate,
    window_days: i64,
) -> Vec<TravelInterval> {
    let cutoff = Duration::try_days(window_days)
        .and_then(|window| today.checked_sub_signed(window))
        .unwrap_or(NaiveDate::MIN);
    intervals
        .iter()
        .filter(|interval| interval.end() >= cutoff)
        .map(|interval| {
            let start = interval.start().max(cutoff);
            if start != interval.start() {
                debug!(from = %interval.start(), to = %start, "clipped interval start to window");
            }
            // end >= cutoff, so the clipped start never passes the end
            TravelInterval {
                start,
                end: interval.end(),
            }
        })
        .collect()
}

/// The trailing 365-day view of `intervals` as of `today`.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use daysout_core::parse_ranges::TravelInterval;
/// # use daysout_core::travel_log::past_year_window;
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// let intervals = [
///     TravelInterval::new(d(2023, 11, 5), d(2023, 11, 7)).unwrap(),
///     TravelInterval::new(d(2024, 12, 27), d(2025, 1, 12)).unwrap(),
/// ];
///
/// let window = past_year_window(&intervals, d(2025, 12, 28));
/// assert_eq!(window, vec![TravelInterval::new(d(2024, 12, 28), d(2025, 1, 12)).unwrap()]);
/// ```
pub fn past_year_window(intervals: &[TravelInterval], today: NaiveDate) -> Vec<TravelInterval> {
    trailing_window(intervals, today, DEFAULT_WINDOW_DAYS)
}

/// Both views of a travel history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub all_dates: Vec<TravelLog>,
    pub past_year: Vec<TravelLog>,
}

/// Builds the all-time and trailing-window logs, reading "today" from `clock`.
pub fn build_report(intervals: &[TravelInterval], clock: &impl Clock, window_days: i64) -> Report {
    let today = clock.today();
    let recent = trailing_window(intervals, today, window_days);
    debug!(
        %today,
        window_days,
        kept = recent.len(),
        of = intervals.len(),
        "built trailing window"
    );
    Report {
        all_dates: compute_travel_logs(intervals),
        past_year: compute_travel_logs(&recent),
    }
}
