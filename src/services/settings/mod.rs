// Settings service
// TOML persistence for picker settings

mod service;

pub use service::{parse_settings, SettingsService};
