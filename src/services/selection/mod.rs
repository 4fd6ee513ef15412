// Range selection service
// Drives the two-click protocol and notifies the host of every change

use std::fmt;

use crate::models::calendar_date::CalendarDate;
use crate::models::selection::SelectionState;

/// Called with the resulting `(start, end)` after every accepted click.
pub type RangeChangeCallback = Box<dyn FnMut(Option<CalendarDate>, Option<CalendarDate>)>;

/// Owns a picker's selection and its optional change callback.
#[derive(Default)]
pub struct RangeSelection {
    state: SelectionState,
    on_range_change: Option<RangeChangeCallback>,
}

impl RangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection that reports every change to `callback`.
    pub fn with_callback<F>(callback: F) -> Self
    where
        F: FnMut(Option<CalendarDate>, Option<CalendarDate>) + 'static,
    {
        Self {
            state: SelectionState::empty(),
            on_range_change: Some(Box::new(callback)),
        }
    }

    pub fn set_on_range_change<F>(&mut self, callback: F)
    where
        F: FnMut(Option<CalendarDate>, Option<CalendarDate>) + 'static,
    {
        self.on_range_change = Some(Box::new(callback));
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Apply a click. Clicks on spillover days are ignored and do not
    /// notify the callback.
    pub fn handle_click(&mut self, clicked: CalendarDate, is_current_month: bool) {
        if !is_current_month {
            log::trace!("Ignoring click on spillover day {}", clicked);
            return;
        }

        let before = self.state.phase();
        self.state = self.state.after_click(clicked);
        log::debug!(
            "Selection click on {}: {:?} -> {:?} (start={:?}, end={:?})",
            clicked,
            before,
            self.state.phase(),
            self.state.start(),
            self.state.end()
        );

        if let Some(callback) = self.on_range_change.as_mut() {
            callback(self.state.start(), self.state.end());
        }
    }
}

impl fmt::Debug for RangeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSelection")
            .field("state", &self.state)
            .field("has_callback", &self.on_range_change.is_some())
            .finish()
    }
}
