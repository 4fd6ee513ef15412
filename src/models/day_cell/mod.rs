//! Day cell and month grid models.
//!
//! A `MonthGrid` always holds exactly `GRID_CELLS` cells (six weeks of seven
//! days), so hosts can lay it out with a fixed number of rows.

use serde::{Serialize, Serializer};

use crate::models::calendar_date::CalendarDate;
use crate::models::selection::SelectionState;

/// Days per grid row
pub const GRID_COLUMNS: usize = 7;

/// Weeks per grid
pub const GRID_ROWS: usize = 6;

/// Total cells in every grid
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// One day in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayCell {
    pub date: CalendarDate,
    /// False for spillover days from the previous or next month
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_start: bool,
    pub is_end: bool,
    pub is_in_range: bool,
}

impl DayCell {
    /// Create an unclassified cell.
    pub fn new(date: CalendarDate, is_current_month: bool) -> Self {
        Self {
            date,
            is_current_month,
            is_today: false,
            is_start: false,
            is_end: false,
            is_in_range: false,
        }
    }

    /// Recompute the derived flags from a selection and today's date.
    ///
    /// Spillover cells are never flagged as today, but still report
    /// start/end/in-range so a range spanning months renders continuously.
    pub fn classified(&self, selection: &SelectionState, today: CalendarDate) -> Self {
        Self {
            date: self.date,
            is_current_month: self.is_current_month,
            is_today: self.is_current_month && self.date == today,
            is_start: selection.is_start(self.date),
            is_end: selection.is_end(self.date),
            is_in_range: selection.contains(self.date),
        }
    }

    /// Spillover cells are rendered but never clickable.
    pub fn is_disabled(&self) -> bool {
        !self.is_current_month
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// A full six-week grid of day cells in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cells: [DayCell; GRID_CELLS],
}

impl MonthGrid {
    pub(crate) fn from_cells(cells: [DayCell; GRID_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        GRID_CELLS
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&DayCell> {
        self.cells.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayCell> {
        self.cells.iter()
    }

    /// The grid as six rows of seven cells.
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell> {
        self.cells.chunks(GRID_COLUMNS)
    }

    /// Cells belonging to the displayed month, in day order.
    pub fn current_month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|cell| cell.is_current_month)
    }

    /// The cell for `date`, if the grid shows it.
    pub fn find(&self, date: CalendarDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }

    /// A new grid with every cell reclassified.
    pub fn classified(&self, selection: &SelectionState, today: CalendarDate) -> Self {
        Self::from_cells(self.cells.map(|cell| cell.classified(selection, today)))
    }

    pub fn into_cells(self) -> [DayCell; GRID_CELLS] {
        self.cells
    }
}

// serde only derives arrays up to 32 elements; emit the cells as a sequence
impl Serialize for MonthGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cells.as_slice().serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a DayCell;
    type IntoIter = std::slice::Iter<'a, DayCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
