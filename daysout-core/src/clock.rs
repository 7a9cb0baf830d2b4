//! Where "today" comes from.

use chrono::{Local, NaiveDate};

/// Source of "today" for the trailing window.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
