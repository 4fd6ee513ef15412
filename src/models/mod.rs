// Module exports for models

pub mod calendar_date;
pub mod day_cell;
pub mod selection;
pub mod settings;
pub mod view_month;
