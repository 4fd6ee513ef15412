//! Date range picker widget state.
//!
//! `DateRangePicker` is what a host UI owns: it keeps the displayed month,
//! the range selection and the label settings, and hands out freshly
//! classified grids for rendering. State only changes through
//! [`DateRangePicker::handle_date_click`] and the navigation methods.

use std::fmt;

use crate::models::calendar_date::{CalendarDate, CalendarError};
use crate::models::day_cell::{DayCell, MonthGrid};
use crate::models::selection::SelectionState;
use crate::models::settings::{PickerSettings, SettingsError};
use crate::models::view_month::ViewMonth;
use crate::services::clock::{Clock, SystemClock};
use crate::services::grid::CalendarGridBuilder;
use crate::services::selection::RangeSelection;

pub struct DateRangePicker {
    view_month: ViewMonth,
    selection: RangeSelection,
    builder: CalendarGridBuilder,
    settings: PickerSettings,
    clock: Box<dyn Clock>,
}

impl DateRangePicker {
    /// Create a picker showing the current month of the system clock.
    pub fn new() -> Result<Self, CalendarError> {
        Self::with_clock(SystemClock)
    }

    /// Create a picker that reads "today" from `clock`.
    ///
    /// # Examples
    /// ```
    /// use date_range_picker::models::calendar_date::CalendarDate;
    /// use date_range_picker::services::clock::FixedClock;
    /// use date_range_picker::ui::DateRangePicker;
    ///
    /// let today = CalendarDate::from_ymd(2023, 8, 15).unwrap();
    /// let picker = DateRangePicker::with_clock(FixedClock(today)).unwrap();
    /// assert_eq!(picker.month_label(), "August 2023");
    /// assert_eq!(picker.grid().len(), 42);
    /// ```
    pub fn with_clock(clock: impl Clock + 'static) -> Result<Self, CalendarError> {
        let view_month = ViewMonth::containing(clock.today())?;
        let settings = PickerSettings::default();
        Ok(Self {
            view_month,
            selection: RangeSelection::new(),
            builder: CalendarGridBuilder::new(settings.first_weekday()),
            settings,
            clock: Box::new(clock),
        })
    }

    /// Replace the label and week layout settings.
    pub fn with_settings(mut self, settings: PickerSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        self.builder = CalendarGridBuilder::new(settings.first_weekday());
        self.settings = settings;
        Ok(self)
    }

    /// Start on a month other than the current one.
    pub fn with_view_month(mut self, view_month: ViewMonth) -> Self {
        self.view_month = view_month;
        self
    }

    /// Report every selection change as the resulting `(start, end)`.
    pub fn on_range_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Option<CalendarDate>, Option<CalendarDate>) + 'static,
    {
        self.selection.set_on_range_change(callback);
        self
    }

    pub fn view_month(&self) -> ViewMonth {
        self.view_month
    }

    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    /// The displayed month, classified against the current selection and
    /// today's date. Rebuilt on every call.
    pub fn grid(&self) -> MonthGrid {
        self.builder
            .build(self.view_month)
            .classified(&self.selection.state(), self.today())
    }

    pub fn handle_date_click(&mut self, date: CalendarDate, is_current_month: bool) {
        self.selection.handle_click(date, is_current_month);
    }

    /// Move the view by `delta` months. The selection is left alone; a
    /// delta leaving the supported year range is ignored.
    pub fn change_month(&mut self, delta: i32) {
        match self.view_month.shifted(delta) {
            Ok(view_month) => {
                log::debug!(
                    "View month {:04}-{:02} -> {:04}-{:02}",
                    self.view_month.year(),
                    self.view_month.month(),
                    view_month.year(),
                    view_month.month()
                );
                self.view_month = view_month;
            }
            Err(e) => log::warn!("Ignoring month navigation: {}", e),
        }
    }

    /// Show the month containing today.
    pub fn jump_to_today(&mut self) {
        match ViewMonth::containing(self.today()) {
            Ok(view_month) => self.view_month = view_month,
            Err(e) => log::warn!("Cannot show today's month: {}", e),
        }
    }

    /// Weekday header labels in display order.
    pub fn weekday_labels(&self) -> Vec<&str> {
        self.settings.weekday_labels_in_order()
    }

    pub fn month_label(&self) -> String {
        self.settings.format_month(self.view_month)
    }

    pub fn day_label(&self, cell: &DayCell) -> String {
        self.settings.format_day(cell.date)
    }
}

impl fmt::Debug for DateRangePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateRangePicker")
            .field("view_month", &self.view_month)
            .field("selection", &self.selection)
            .field("builder", &self.builder)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
