use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::PickerSettings;

const SETTINGS_FILE_NAME: &str = "picker.toml";

/// Loads and stores picker settings as a TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the per-user config directory, if the platform has one.
    pub fn at_default_location() -> Option<Self> {
        ProjectDirs::from("org", "DateRangePicker", "date-range-picker")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings, falling back to defaults when the file
    /// does not exist yet.
    pub fn get(&self) -> Result<PickerSettings> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!(
                    "No picker settings at {}, using defaults",
                    self.path.display()
                );
                return Ok(PickerSettings::default());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read settings from {}", self.path.display())
                })
            }
        };
        parse_settings(&text)
            .with_context(|| format!("Failed to load settings from {}", self.path.display()))
    }

    /// Update settings
    pub fn update(&self, settings: &PickerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }

        let text = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::debug!("Saved picker settings to {}", self.path.display());
        Ok(())
    }
}

/// Parse and validate settings from TOML text. Missing keys take their
/// default values.
pub fn parse_settings(text: &str) -> Result<PickerSettings> {
    let settings: PickerSettings = toml::from_str(text).context("Failed to parse settings")?;
    settings.validate()?;
    Ok(settings)
}
