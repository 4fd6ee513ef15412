// Clock service
// Source of "today" for classification and the initial view month

use chrono::Local;

use crate::models::calendar_date::CalendarDate;

/// Supplies the current local calendar date.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Reads the system's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from(Local::now().date_naive())
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
