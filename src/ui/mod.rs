// UI module
// Widget state consumed by host renderers

pub mod date_range_picker;

pub use date_range_picker::DateRangePicker;
