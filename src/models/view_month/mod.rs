// View month model
// The (year, month) pair a picker is currently displaying

use chrono::{Datelike, Days, NaiveDate};

use crate::models::calendar_date::{CalendarDate, CalendarError};
use crate::utils::date::{self, MAX_YEAR, MIN_YEAR};

/// The month shown by a picker. Independent of today and of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewMonth {
    first_day: NaiveDate,
}

impl ViewMonth {
    /// Create a view month (January = 1).
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange(year));
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or(
            CalendarError::InvalidDate {
                year,
                month,
                day: 1,
            },
        )?;
        Ok(Self { first_day })
    }

    /// The month containing `date`.
    pub fn containing(date: CalendarDate) -> Result<Self, CalendarError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::from(self.first_day)
    }

    pub fn last_day(&self) -> CalendarDate {
        CalendarDate::from(self.first_day + Days::new(u64::from(self.days_in_month()) - 1))
    }

    pub fn days_in_month(&self) -> u32 {
        date::days_in_month(self.year(), self.month())
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// This month moved by `delta` months, with year rollover.
    pub fn shifted(&self, delta: i32) -> Result<Self, CalendarError> {
        let (year, month) = date::shift_month(self.year(), self.month(), delta).ok_or(
            CalendarError::NavigationOutOfRange {
                year: self.year(),
                month: self.month(),
                delta,
            },
        )?;
        Self::new(year, month)
    }
}
