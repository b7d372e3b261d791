//! Configuration file support for pickwheel.
//!
//! Configuration is loaded from `~/.config/pickwheel/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/pickwheel/config.toml
//! slot_height = 40.0
//! friction_multiplier = 20.0
//! cyclic = true
//! min_date = "2000-01-01"
//! max_date = "2030-12-31"
//!
//! # Rolling date wheel
//! days_backward = 14
//! today_label = "Today"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::calendar::{DateBounds, DateLabels, DateWindow};
use crate::error::{PickerResult, PickwheelError};
use crate::fling::ExponentialDecay;
use crate::log;
use crate::scroll::DEFAULT_MINIMUM_ALPHA;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Height of one slot, in offset units
    pub slot_height: f32,

    /// Friction multiplier of the exponential fling decay
    pub friction_multiplier: f32,

    /// Lowest alpha of the labels next to the selection
    pub minimum_alpha: f32,

    /// Frames in one settle animation
    pub settle_frames: u32,

    /// Delay between settle frames, in milliseconds
    pub frame_interval_ms: u64,

    /// Whether wheels wrap around when they have enough items
    pub cyclic: bool,

    /// Pad single-digit hours and minutes with a zero
    pub leading_zero: bool,

    /// Earliest selectable date
    pub min_date: Option<NaiveDate>,

    /// Latest selectable date
    pub max_date: Option<NaiveDate>,

    /// Days before today offered by the rolling date wheel
    pub days_backward: u32,

    /// Days after today offered by the rolling date wheel
    pub days_forward: u32,

    /// Label for today's date
    pub today_label: String,

    /// Label for yesterday's date
    pub yesterday_label: String,
}

impl Default for Config {
    fn default() -> Self {
        let labels = DateLabels::default();
        Self {
            slot_height: 40.0,
            friction_multiplier: 20.0,
            minimum_alpha: DEFAULT_MINIMUM_ALPHA,
            settle_frames: 12,
            frame_interval_ms: 16,
            cyclic: true,
            leading_zero: true,
            min_date: None,
            max_date: None,
            days_backward: 7,
            days_forward: 0,
            today_label: labels.today,
            yesterday_label: labels.yesterday,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path, then apply
    /// environment overrides.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        let config = if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: {}", e);
                    log::log(&format!("Config fallback to defaults: {}", e));
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.with_env()
    }

    /// Parse a config file.
    pub fn load_from(path: &Path) -> Result<Self, PickwheelError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| PickwheelError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pickwheel")
    }

    /// Apply `PICKWHEEL_MIN_DATE` / `PICKWHEEL_MAX_DATE` when set and valid.
    pub fn with_env(self) -> Self {
        let min = env_date("PICKWHEEL_MIN_DATE");
        let max = env_date("PICKWHEEL_MAX_DATE");
        self.with_overrides(min, max, None)
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
        cyclic: Option<bool>,
    ) -> Self {
        if min_date.is_some() {
            self.min_date = min_date;
        }
        if max_date.is_some() {
            self.max_date = max_date;
        }
        if let Some(cyclic) = cyclic {
            self.cyclic = cyclic;
        }
        self
    }

    /// Date bounds, with defaults for missing ends.
    pub fn bounds(&self) -> PickerResult<DateBounds> {
        DateBounds::new(self.min_date, self.max_date)
    }

    pub fn decay(&self) -> ExponentialDecay {
        ExponentialDecay::new(self.friction_multiplier, self.settle_frames)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn date_labels(&self) -> DateLabels {
        DateLabels {
            today: self.today_label.clone(),
            yesterday: self.yesterday_label.clone(),
            ..DateLabels::default()
        }
    }

    pub fn date_window(&self) -> DateWindow {
        DateWindow::new(self.days_backward, self.days_forward)
    }
}

fn env_date(name: &str) -> Option<NaiveDate> {
    let raw = std::env::var(name).ok()?;
    match raw.parse::<NaiveDate>() {
        Ok(date) => Some(date),
        Err(e) => {
            log::log(&format!("Ignoring {}={}: {}", name, raw, e));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.slot_height, 40.0);
        assert!(config.cyclic);
        assert!(config.min_date.is_none());
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            slot_height = 32.0
            cyclic = false
            min_date = "2000-01-01"
            max_date = "2000-12-31"
            today_label = "Oggi"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.slot_height, 32.0);
        assert!(!config.cyclic);
        assert_eq!(config.min_date, NaiveDate::from_ymd_opt(2000, 1, 1));
        assert_eq!(config.today_label, "Oggi");
        // Unset fields keep their defaults
        assert_eq!(config.friction_multiplier, 20.0);
        assert_eq!(config.yesterday_label, "Yesterday");

        let bounds = config.bounds().unwrap();
        assert_eq!(bounds.years(), 2000..=2000);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let file: Config = toml::from_str(r#"min_date = "2000-01-01""#).unwrap();
        let cli_min = NaiveDate::from_ymd_opt(2010, 6, 1);
        let config = file.with_overrides(cli_min, None, Some(false));
        assert_eq!(config.min_date, cli_min);
        assert!(!config.cyclic);
    }

    #[test]
    fn test_inverted_dates_surface_on_bounds() {
        let config: Config = toml::from_str(
            r#"
            min_date = "2020-01-01"
            max_date = "2010-01-01"
        "#,
        )
        .unwrap();
        assert!(config.bounds().is_err());
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("pickwheel-config-{}.toml", std::process::id()));
        std::fs::write(&path, "slot_height = \"tall\"").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, PickwheelError::Config(_)));
        let _ = std::fs::remove_file(path);
    }
}
