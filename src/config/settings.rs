//! User settings for FinTrack
//!
//! Display and alerting preferences persisted as `config.json` in the base
//! directory.

use serde::{Deserialize, Serialize};

use super::paths::FinTrackPaths;
use crate::error::FinTrackError;

/// Budget alert preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertSettings {
    /// Whether budget alerts are shown
    #[serde(default)]
    pub enabled: bool,

    /// Percentage of a budget at which an alert fires (0-100)
    #[serde(default = "default_alert_threshold")]
    pub threshold_percent: u8,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold_percent: default_alert_threshold(),
        }
    }
}

/// User settings for FinTrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Budget alert preferences
    #[serde(default)]
    pub alerts: AlertSettings,

    /// How many rows the dashboard's recent/top lists show
    #[serde(default = "default_top_n")]
    pub dashboard_top_n: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_alert_threshold() -> u8 {
    80
}

fn default_top_n() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            alerts: AlertSettings::default(),
            dashboard_top_n: default_top_n(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinTrackPaths) -> Result<Self, FinTrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinTrackError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinTrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.alerts.threshold_percent > 100 {
                return Err(FinTrackError::Config(format!(
                    "Alert threshold must be between 0 and 100, got {}",
                    settings.alerts.threshold_percent
                )));
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinTrackPaths) -> Result<(), FinTrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinTrackError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinTrackError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: crate::models::Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert!(!settings.alerts.enabled);
        assert_eq!(settings.alerts.threshold_percent, 80);
        assert_eq!(settings.dashboard_top_n, 5);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinTrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.alerts.enabled = true;
        settings.alerts.threshold_percent = 90;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert!(loaded.alerts.enabled);
        assert_eq!(loaded.alerts.threshold_percent, 90);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinTrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.alerts.threshold_percent, 80);
    }

    #[test]
    fn test_rejects_threshold_over_100() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinTrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"alerts": {"enabled": true, "threshold_percent": 150}}"#,
        )
        .unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(FinTrackError::Config(_))
        ));
    }
}
