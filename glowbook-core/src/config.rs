//! Global glowbook configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{GlowbookError, GlowbookResult};
use crate::recurrence::DEFAULT_OCCURRENCES;

static DEFAULT_EXPORT_DIR: &str = "~/glowbook";
static DEFAULT_CURRENCY: &str = "USD";

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_occurrence_count() -> u32 {
    DEFAULT_OCCURRENCES
}

/// Global configuration at ~/.config/glowbook/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GlowbookConfig {
    /// Where exported .ics files land when no --output is given.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Occurrence count used when a series request does not pick one.
    #[serde(default = "default_occurrence_count")]
    pub default_occurrences: u32,

    /// Display currency code for projected costs.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for GlowbookConfig {
    fn default() -> Self {
        GlowbookConfig {
            export_dir: default_export_dir(),
            default_occurrences: default_occurrence_count(),
            currency: default_currency(),
        }
    }
}

impl GlowbookConfig {
    pub fn config_path() -> GlowbookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GlowbookError::Config("Could not determine config directory".into()))?
            .join("glowbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented-out default file on first use.
    pub fn load() -> GlowbookResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: GlowbookConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| GlowbookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| GlowbookError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/glowbook/config.toml
    pub fn save(&self) -> GlowbookResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GlowbookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| GlowbookError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| GlowbookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Update one setting by name. Keys match the config file fields.
    pub fn set(&mut self, key: &str, value: &str) -> GlowbookResult<()> {
        match key {
            "export_dir" => {
                self.export_dir = PathBuf::from(value);
            }
            "default_occurrences" => {
                let count: u32 = value.parse().map_err(|_| {
                    GlowbookError::Config(format!("'{value}' is not a valid occurrence count"))
                })?;
                self.default_occurrences = count;
            }
            "currency" => {
                self.currency = value.to_string();
            }
            other => {
                return Err(GlowbookError::Config(format!(
                    "Unknown config key '{other}'. Expected export_dir, default_occurrences or currency"
                )));
            }
        }
        Ok(())
    }

    /// Export directory with `~` expanded.
    pub fn export_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.export_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    fn create_default_config(path: &std::path::Path) -> GlowbookResult<()> {
        let contents = format!(
            "\
# glowbook configuration

# Where exported .ics files go:
# export_dir = \"{DEFAULT_EXPORT_DIR}\"

# Occurrence count when a series doesn't pick one:
# default_occurrences = {DEFAULT_OCCURRENCES}

# Display currency for projected costs:
# currency = \"{DEFAULT_CURRENCY}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GlowbookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GlowbookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: GlowbookConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_occurrences, DEFAULT_OCCURRENCES);
        assert_eq!(config.currency, "USD");
        assert_eq!(config.export_dir, PathBuf::from("~/glowbook"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: GlowbookConfig = toml::from_str("currency = \"EUR\"").unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.default_occurrences, DEFAULT_OCCURRENCES);
    }

    #[test]
    fn set_updates_known_keys() {
        let mut config = GlowbookConfig::default();

        config.set("currency", "EUR").unwrap();
        config.set("default_occurrences", "8").unwrap();
        config.set("export_dir", "/tmp/bookings").unwrap();

        assert_eq!(config.currency, "EUR");
        assert_eq!(config.default_occurrences, 8);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/bookings"));
    }

    #[test]
    fn set_rejects_unknown_key_and_bad_count() {
        let mut config = GlowbookConfig::default();

        assert!(config.set("colour", "teal").is_err());
        assert!(config.set("default_occurrences", "lots").is_err());
        assert_eq!(config.default_occurrences, DEFAULT_OCCURRENCES);
    }

    #[test]
    fn set_roundtrips_through_toml() {
        let mut config = GlowbookConfig::default();
        config.set("currency", "GBP").unwrap();

        let content = toml::to_string_pretty(&config).unwrap();
        let reloaded: GlowbookConfig = toml::from_str(&content).unwrap();

        assert_eq!(reloaded.currency, "GBP");
    }
}
