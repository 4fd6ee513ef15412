//! Month grid builder.
//!
//! Lays a month out as six full weeks: the tail of the previous month, every
//! day of the month itself, then the head of the next month until the grid
//! reaches `GRID_CELLS`.

use chrono::{Days, NaiveDate, Weekday};

use crate::models::calendar_date::CalendarDate;
use crate::models::day_cell::{DayCell, MonthGrid, GRID_CELLS};
use crate::models::view_month::ViewMonth;
use crate::utils::date::weekday_column;

/// Builds unclassified month grids for a fixed first day of week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarGridBuilder {
    first_day_of_week: Weekday,
}

impl Default for CalendarGridBuilder {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

impl CalendarGridBuilder {
    pub fn new(first_day_of_week: Weekday) -> Self {
        Self { first_day_of_week }
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Number of previous-month days shown before the 1st.
    pub fn leading_days(&self, view: ViewMonth) -> u32 {
        weekday_column(view.first_day().weekday(), self.first_day_of_week)
    }

    /// Build the grid for `view`. Only `date` and `is_current_month` are
    /// set; the remaining flags come from classification.
    pub fn build(&self, view: ViewMonth) -> MonthGrid {
        let first_weekday = self.leading_days(view);
        let days_in_month = view.days_in_month();
        let first_of_month = view.first_day().naive();
        let last_of_prev_month = first_of_month - Days::new(1);
        let first_of_next_month = first_of_month + Days::new(u64::from(days_in_month));

        let mut cells = [DayCell::new(CalendarDate::from(first_of_month), true); GRID_CELLS];
        let mut index = 0;

        // Previous month, oldest first
        for i in (0..first_weekday).rev() {
            cells[index] = spillover(last_of_prev_month - Days::new(u64::from(i)));
            index += 1;
        }

        for day in 0..days_in_month {
            let date = first_of_month + Days::new(u64::from(day));
            cells[index] = DayCell::new(CalendarDate::from(date), true);
            index += 1;
        }

        // Next month from the 1st
        let trailing = GRID_CELLS - index;
        for (offset, cell) in cells[index..].iter_mut().enumerate() {
            *cell = spillover(first_of_next_month + Days::new(offset as u64));
        }

        log::trace!(
            "built grid for {:04}-{:02}: {} leading, {} trailing",
            view.year(),
            view.month(),
            first_weekday,
            trailing
        );

        MonthGrid::from_cells(cells)
    }
}

fn spillover(date: NaiveDate) -> DayCell {
    DayCell::new(CalendarDate::from(date), false)
}
