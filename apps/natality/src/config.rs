//! Configuration for natality
//!
//! Column names, cleaning and partition parameters, and report settings.
//! Every field has a default matching the NSFG pregnancy file, so an empty
//! config file is valid.

use std::path::Path;

use natality_io::{CleaningOptions, PartitionOptions};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, NatalityError, Result};

/// Analysis configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NatalityConfig {
    /// Analysed columns
    pub columns: ColumnConfig,
    /// Raw-record cleaning
    pub cleaning: CleaningConfig,
    /// Live/first/other split
    pub partition: PartitionOptions,
    /// Report settings
    pub report: ReportConfig,
}

/// Columns the analyses read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Total birth weight in pounds
    pub weight: String,
    /// Pregnancy length in weeks
    pub length: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            weight: "totalwgt_lb".to_string(),
            length: "prglngth".to_string(),
        }
    }
}

/// Cleaning switch plus its options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// Run cleaning before partitioning
    pub enabled: bool,
    #[serde(flatten)]
    pub options: CleaningOptions,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            options: CleaningOptions::default(),
        }
    }
}

/// Report settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of ranked pregnancy lengths to print
    pub top_modes: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top_modes: 5 }
    }
}

impl NatalityConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| NatalityError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let columns = [
            ("columns.weight", &self.columns.weight),
            ("columns.length", &self.columns.length),
            ("partition.outcome_column", &self.partition.outcome_column),
            ("partition.birth_order_column", &self.partition.birth_order_column),
        ];
        for (key, name) in columns {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyColumn(key.to_string()));
            }
        }

        if self.cleaning.enabled {
            let options = &self.cleaning.options;
            for (key, name) in [
                ("cleaning.pounds_column", &options.pounds_column),
                ("cleaning.ounces_column", &options.ounces_column),
                ("cleaning.total_column", &options.total_column),
            ] {
                if name.trim().is_empty() {
                    return Err(ConfigError::EmptyColumn(key.to_string()));
                }
            }

            if options.max_pounds.is_nan() || options.max_pounds <= 0.0 {
                return Err(ConfigError::OutOfRange(
                    "cleaning.max_pounds must be positive".to_string(),
                ));
            }
        }

        if self.report.top_modes == 0 {
            return Err(ConfigError::OutOfRange(
                "report.top_modes must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
