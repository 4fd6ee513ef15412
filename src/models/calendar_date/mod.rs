//! Calendar date model.
//!
//! A `CalendarDate` is a plain (year, month, day) value with no time
//! component. Equality and ordering compare calendar days only, so two dates
//! built from different sources are interchangeable.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use thiserror::Error;

/// A local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from its components (1-based month and day).
    ///
    /// # Examples
    /// ```
    /// use date_range_picker::models::calendar_date::CalendarDate;
    ///
    /// let date = CalendarDate::from_ymd(2023, 8, 15).unwrap();
    /// assert_eq!(date.day(), 15);
    /// assert!(CalendarDate::from_ymd(2023, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, January = 1.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Errors raised when building calendar values from raw components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("month {0} is out of range (expected 1-12)")]
    InvalidMonth(u32),

    #[error("year {0} is outside the supported range")]
    YearOutOfRange(i32),

    #[error("cannot move {delta} months from {year:04}-{month:02}")]
    NavigationOutOfRange { year: i32, month: u32, delta: i32 },
}
