use chrono::NaiveDate;

use crate::parse_ranges::TravelInterval;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

/// Interval from `(y, m, d)` tuples. Panics on `start > end`.
pub fn iv(start: (i32, u32, u32), end: (i32, u32, u32)) -> TravelInterval {
    TravelInterval::new(d(start.0, start.1, start.2), d(end.0, end.1, end.2))
        .expect("start <= end")
}

/// Five trips used throughout the tests, already in chronological order.
pub fn sample_intervals() -> Vec<TravelInterval> {
    vec![
        iv((2023, 11, 1), (2023, 11, 1)),
        iv((2023, 11, 2), (2023, 11, 3)),
        iv((2023, 11, 5), (2023, 11, 7)),
        iv((2023, 11, 7), (2023, 11, 14)),
        iv((2024, 12, 27), (2025, 1, 12)),
    ]
}
