// Test fixtures - reusable test data
// Provides consistent dates and pickers across all test files

#![allow(dead_code)]

use date_range_picker::{CalendarDate, DateRangePicker, FixedClock, ViewMonth};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).expect("valid fixture date")
    }

    /// Returns Aug 15, 2023 (a Tuesday month start)
    pub fn aug_15_2023() -> CalendarDate {
        ymd(2023, 8, 15)
    }

    /// Returns day `day` of August 2023
    pub fn aug_2023(day: u32) -> CalendarDate {
        ymd(2023, 8, day)
    }

    /// Returns day `day` of July 2024
    pub fn jul_2024(day: u32) -> CalendarDate {
        ymd(2024, 7, day)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> CalendarDate {
        ymd(2024, 2, 29)
    }
}

/// Sample view months
pub mod months {
    use super::*;

    pub fn view(year: i32, month: u32) -> ViewMonth {
        ViewMonth::new(year, month).expect("valid fixture month")
    }
}

/// A picker whose "today" is pinned to `today`.
pub fn picker_at(today: CalendarDate) -> DateRangePicker {
    DateRangePicker::with_clock(FixedClock(today)).expect("fixture picker")
}
