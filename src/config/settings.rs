//! User settings for spendlog
//!
//! Display preferences persisted to `config.json`. Every field has a default,
//! so older or partial files still load.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::SpendPaths;
use crate::error::SpendError;
use crate::storage::file_io::{read_text, write_text_atomic};

/// User settings for spendlog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of categories in the history breakdown
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_top_categories() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            top_categories: default_top_categories(),
        }
    }
}

impl Settings {
    /// The configured date format, or the default if it is not a valid
    /// strftime pattern
    pub fn display_date_format(&self) -> &str {
        let invalid =
            StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error));
        if invalid {
            tracing::warn!(format = %self.date_format, "invalid date format; using default");
            DEFAULT_DATE_FORMAT
        } else {
            &self.date_format
        }
    }

    /// Load settings from disk, writing the defaults if the file is missing
    ///
    /// A malformed file is logged and replaced by defaults in memory only;
    /// the file itself is left for the user to fix.
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, SpendError> {
        let settings_path = paths.settings_file();

        let Some(contents) = read_text(&settings_path)? else {
            let settings = Settings::default();
            settings.save(paths)?;
            tracing::info!(path = %settings_path.display(), "created default settings");
            return Ok(settings);
        };

        match serde_json::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    path = %settings_path.display(),
                    error = %e,
                    "settings file is malformed; using defaults"
                );
                Ok(Settings::default())
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), SpendError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SpendError::Config(format!("Failed to serialize settings: {}", e)))?;

        write_text_atomic(paths.settings_file(), &contents)
    }
}
