// Date Range Picker Library
// Calendar grid generation and two-click range selection for picker widgets

pub mod models;
pub mod services;
pub mod ui;
pub mod utils;

pub use models::calendar_date::{CalendarDate, CalendarError};
pub use models::day_cell::{DayCell, MonthGrid, GRID_CELLS};
pub use models::selection::{SelectionPhase, SelectionState};
pub use models::settings::{MonthLabelStyle, PickerSettings, SettingsError};
pub use models::view_month::ViewMonth;
pub use services::clock::{Clock, FixedClock, SystemClock};
pub use services::grid::CalendarGridBuilder;
pub use services::selection::RangeSelection;
pub use ui::DateRangePicker;
