// Settings module
// Label set and week layout supplied by the host

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::calendar_date::CalendarDate;
use crate::models::view_month::ViewMonth;
use crate::utils::date::weekday_from_sunday_index;

const ENGLISH_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CHINESE_WEEKDAYS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// How the month/year header is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthLabelStyle {
    /// "August 2023"
    #[default]
    Long,
    /// "2023年8月"
    Cjk,
}

/// Picker presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    /// Seven labels, Sunday first
    pub weekday_labels: Vec<String>,
    pub month_label: MonthLabelStyle,
    /// Appended to the day number on each cell, e.g. "日"
    pub day_suffix: String,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self::english()
    }
}

impl PickerSettings {
    pub fn english() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            weekday_labels: ENGLISH_WEEKDAYS.iter().map(|s| s.to_string()).collect(),
            month_label: MonthLabelStyle::Long,
            day_suffix: String::new(),
        }
    }

    pub fn chinese() -> Self {
        Self {
            first_day_of_week: 0,
            weekday_labels: CHINESE_WEEKDAYS.iter().map(|s| s.to_string()).collect(),
            month_label: MonthLabelStyle::Cjk,
            day_suffix: "日".to_string(),
        }
    }

    /// Validate the settings data.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if weekday_from_sunday_index(self.first_day_of_week).is_none() {
            return Err(SettingsError::InvalidFirstDayOfWeek(self.first_day_of_week));
        }
        if self.weekday_labels.len() != 7 {
            return Err(SettingsError::WrongWeekdayLabelCount(self.weekday_labels.len()));
        }
        Ok(())
    }

    /// The configured first day of week; Sunday if the index is out of range.
    pub fn first_weekday(&self) -> Weekday {
        weekday_from_sunday_index(self.first_day_of_week).unwrap_or(Weekday::Sun)
    }

    /// Weekday labels rotated so the configured first day comes first.
    pub fn weekday_labels_in_order(&self) -> Vec<&str> {
        let start = self.first_weekday().num_days_from_sunday() as usize;
        let count = self.weekday_labels.len();
        (0..count)
            .filter_map(|i| self.weekday_labels.get((start + i) % count))
            .map(String::as_str)
            .collect()
    }

    /// Header text for a month.
    pub fn format_month(&self, view: ViewMonth) -> String {
        match self.month_label {
            MonthLabelStyle::Long => view.first_day().naive().format("%B %Y").to_string(),
            MonthLabelStyle::Cjk => format!("{}年{}月", view.year(), view.month()),
        }
    }

    /// Cell text for a day.
    pub fn format_day(&self, date: CalendarDate) -> String {
        format!("{}{}", date.day(), self.day_suffix)
    }
}

/// Validation errors for PickerSettings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("first day of week must be 0-6 (Sunday-Saturday), got {0}")]
    InvalidFirstDayOfWeek(u8),

    #[error("expected 7 weekday labels, got {0}")]
    WrongWeekdayLabelCount(usize),
}
