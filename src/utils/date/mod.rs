// Date utility functions
// Calendar arithmetic shared by the grid builder and month navigation

use chrono::{NaiveDate, Weekday};

/// Earliest year a picker may display. Kept inside chrono's range with room
/// for the spillover days on either side of a grid.
pub const MIN_YEAR: i32 = -262_000;

/// Latest year a picker may display.
pub const MAX_YEAR: i32 = 262_000;

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Get the number of days in a given month (1-based month).
///
/// Returns 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Shift a (year, month) pair by `delta` months, rolling the year over.
///
/// Returns `None` when the result leaves `MIN_YEAR..=MAX_YEAR`.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Option<(i32, u32)> {
    let total_months = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(delta);
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let new_year = i32::try_from(new_year).ok()?;
    (MIN_YEAR..=MAX_YEAR)
        .contains(&new_year)
        .then_some((new_year, new_month))
}

/// Map a 0 = Sunday .. 6 = Saturday index onto a weekday.
pub fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Column (0..=6) a weekday occupies in a week starting on `first_day_of_week`.
pub fn weekday_column(weekday: Weekday, first_day_of_week: Weekday) -> u32 {
    let weekday = weekday.num_days_from_sunday();
    let first = first_day_of_week.num_days_from_sunday();
    (weekday + 7 - first) % 7
}
