// Property-based tests for grid building and range selection
// Exercises every month layout and random click sequences

use chrono::Weekday;
use date_range_picker::utils::date::days_in_month;
use date_range_picker::{
    CalendarDate, CalendarGridBuilder, DateRangePicker, FixedClock, RangeSelection, ViewMonth,
    GRID_CELLS,
};
use proptest::prelude::*;

fn weekday_strategy() -> impl Strategy<Value = Weekday> {
    prop_oneof![
        Just(Weekday::Sun),
        Just(Weekday::Mon),
        Just(Weekday::Tue),
        Just(Weekday::Wed),
        Just(Weekday::Thu),
        Just(Weekday::Fri),
        Just(Weekday::Sat),
    ]
}

proptest! {
    /// Property: every grid has exactly six weeks of cells
    #[test]
    fn prop_grid_always_has_42_cells(
        year in -3000..3000i32,
        month in 1..=12u32,
        first_day in weekday_strategy(),
    ) {
        let view = ViewMonth::new(year, month).unwrap();
        let grid = CalendarGridBuilder::new(first_day).build(view);
        prop_assert_eq!(grid.len(), GRID_CELLS);
    }

    /// Property: current-month cells are exactly 1..=days_in_month, in order
    #[test]
    fn prop_current_month_cells_cover_month(
        year in 1600..2400i32,
        month in 1..=12u32,
        first_day in weekday_strategy(),
    ) {
        let view = ViewMonth::new(year, month).unwrap();
        let grid = CalendarGridBuilder::new(first_day).build(view);
        let days: Vec<u32> = grid.current_month_cells().map(|cell| cell.day()).collect();
        let expected: Vec<u32> = (1..=days_in_month(year, month)).collect();
        prop_assert_eq!(days, expected);
        prop_assert!(grid.current_month_cells().all(|cell| view.contains(cell.date)));
    }

    /// Property: the grid is one consecutive run of days starting on the
    /// configured first day of week
    #[test]
    fn prop_grid_dates_are_consecutive(
        year in 1600..2400i32,
        month in 1..=12u32,
        first_day in weekday_strategy(),
    ) {
        let view = ViewMonth::new(year, month).unwrap();
        let grid = CalendarGridBuilder::new(first_day).build(view);
        let cells = grid.cells();
        prop_assert_eq!(cells[0].date.weekday(), first_day);
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[0].date.naive().succ_opt(), Some(pair[1].date.naive()));
        }
    }

    /// Property: leading cells end on the previous month's last day and
    /// trailing cells start on the next month's 1st
    #[test]
    fn prop_spillover_matches_neighbouring_months(
        year in 1600..2400i32,
        month in 1..=12u32,
        first_day in weekday_strategy(),
    ) {
        let view = ViewMonth::new(year, month).unwrap();
        let builder = CalendarGridBuilder::new(first_day);
        let grid = builder.build(view);
        let cells = grid.cells();
        let leading = builder.leading_days(view) as usize;
        let previous = view.shifted(-1).unwrap();
        let next = view.shifted(1).unwrap();

        prop_assert!(leading < 7);
        prop_assert!(cells[..leading]
            .iter()
            .all(|cell| !cell.is_current_month && previous.contains(cell.date)));
        if leading > 0 {
            prop_assert_eq!(cells[leading - 1].date, previous.last_day());
        }

        let trailing_start = leading + view.days_in_month() as usize;
        prop_assert_eq!(cells[trailing_start].date, next.first_day());
        prop_assert!(cells[trailing_start..].iter().all(|cell| !cell.is_current_month));
    }

    /// Property: whatever is clicked, an end never exists without a start
    /// and never precedes it
    #[test]
    fn prop_selection_invariant_holds(
        clicks in prop::collection::vec((1..=28u32, any::<bool>()), 0..40),
    ) {
        let mut selection = RangeSelection::new();
        for (day, is_current_month) in clicks {
            let date = CalendarDate::from_ymd(2023, 8, day).unwrap();
            selection.handle_click(date, is_current_month);

            let state = selection.state();
            if let Some(end) = state.end() {
                let start = state.start();
                prop_assert!(start.is_some());
                prop_assert!(start.unwrap() <= end);
            }
        }
    }

    /// Property: spillover clicks never change the selection
    #[test]
    fn prop_spillover_clicks_are_inert(
        anchor in 1..=31u32,
        cell_index in 0..GRID_CELLS,
    ) {
        let today = CalendarDate::from_ymd(2023, 8, 15).unwrap();
        let mut picker = DateRangePicker::with_clock(FixedClock(today)).unwrap();
        picker.handle_date_click(CalendarDate::from_ymd(2023, 8, anchor).unwrap(), true);
        let before = picker.selection();

        let grid = picker.grid();
        let cell = grid.cells()[cell_index];
        if cell.is_disabled() {
            picker.handle_date_click(cell.date, cell.is_current_month);
            prop_assert_eq!(picker.selection(), before);
        }
    }

    /// Property: navigating away and back restores the same classified grid
    #[test]
    fn prop_navigation_round_trip_preserves_grid(
        start_day in 1..=15u32,
        end_day in 16..=31u32,
        delta in -40..40i32,
    ) {
        let today = CalendarDate::from_ymd(2024, 7, 1).unwrap();
        let mut picker = DateRangePicker::with_clock(FixedClock(today)).unwrap();
        picker.handle_date_click(CalendarDate::from_ymd(2024, 7, start_day).unwrap(), true);
        picker.handle_date_click(CalendarDate::from_ymd(2024, 7, end_day).unwrap(), true);
        let grid = picker.grid();
        let selection = picker.selection();

        picker.change_month(delta);
        prop_assert_eq!(picker.selection(), selection);
        picker.change_month(-delta);
        prop_assert_eq!(picker.grid(), grid);
    }
}
