// Parameterized tests for month navigation and month layouts
// Each case pins one concrete calendar fact

use date_range_picker::{CalendarDate, CalendarGridBuilder, DateRangePicker, FixedClock, ViewMonth};
use test_case::test_case;

fn picker_viewing(year: i32, month: u32) -> DateRangePicker {
    let today = CalendarDate::from_ymd(2024, 7, 1).unwrap();
    DateRangePicker::with_clock(FixedClock(today))
        .unwrap()
        .with_view_month(ViewMonth::new(year, month).unwrap())
}

#[test_case(2024, 7, 1 => (2024, 8); "next month")]
#[test_case(2024, 7, -1 => (2024, 6); "previous month")]
#[test_case(2024, 12, 1 => (2025, 1); "december rolls forward")]
#[test_case(2024, 1, -1 => (2023, 12); "january rolls back")]
#[test_case(2024, 7, 12 => (2025, 7); "a full year forward")]
#[test_case(2024, 7, -19 => (2022, 12); "more than a year back")]
#[test_case(2024, 7, 0 => (2024, 7); "zero delta")]
fn change_month_normalizes_year(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let mut picker = picker_viewing(year, month);
    picker.change_month(delta);
    let view = picker.view_month();
    (view.year(), view.month())
}

#[test_case(2023, 8 => 2; "august 2023 starts on a tuesday")]
#[test_case(2015, 2 => 0; "february 2015 starts on a sunday")]
#[test_case(2024, 6 => 6; "june 2024 starts on a saturday")]
#[test_case(2024, 9 => 0; "september 2024 starts on a sunday")]
fn leading_spillover_days(year: i32, month: u32) -> u32 {
    CalendarGridBuilder::default().leading_days(ViewMonth::new(year, month).unwrap())
}

#[test_case(2023, 8 => (2, 31, 9); "thirty-one day month")]
#[test_case(2015, 2 => (0, 28, 14); "four exact weeks")]
#[test_case(2024, 6 => (6, 30, 6); "six leading days")]
fn grid_composition(year: i32, month: u32) -> (usize, usize, usize) {
    let grid = CalendarGridBuilder::default().build(ViewMonth::new(year, month).unwrap());
    let cells = grid.cells();
    let leading = cells.iter().take_while(|cell| !cell.is_current_month).count();
    let current = grid.current_month_cells().count();
    (leading, current, cells.len() - leading - current)
}
