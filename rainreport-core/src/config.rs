use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{fetch::DEFAULT_TIMEOUT, geo::FixedPosition, model::Coordinates};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080/";

/// A stored position used when none is given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// service_url = "http://localhost:8080/"
/// timeout_ms = 5000
///
/// [location]
/// latitude = 59.33
/// longitude = 18.06
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the rain report service.
    pub service_url: String,

    /// Request timeout in milliseconds.
    pub timeout_ms: u64,

    pub location: Option<LocationConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            location: None,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn set_location(&mut self, coords: Coordinates) {
        self.location = Some(LocationConfig {
            latitude: coords.latitude,
            longitude: coords.longitude,
        });
    }

    /// The stored location as a geolocation capability, if one is configured.
    pub fn stored_position(&self) -> Option<FixedPosition> {
        self.location
            .map(|loc| FixedPosition(Coordinates::new(loc.latitude, loc.longitude)))
    }

    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("se", "phooey", "rainreport")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_five_second_timeout() {
        let cfg = Config::default();

        assert_eq!(cfg.timeout(), Duration::from_millis(5000));
        assert_eq!(cfg.service_url, DEFAULT_SERVICE_URL);
        assert!(cfg.stored_position().is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = Config::from_toml(r#"service_url = "https://rain.example.com/""#)
            .expect("valid config");

        assert_eq!(cfg.service_url, "https://rain.example.com/");
        assert_eq!(cfg.timeout_ms, 5000);
        assert!(cfg.location.is_none());
    }

    #[test]
    fn location_table_becomes_stored_position() {
        let cfg = Config::from_toml(
            r#"
            timeout_ms = 250

            [location]
            latitude = 59.33
            longitude = 18.06
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.timeout(), Duration::from_millis(250));
        assert_eq!(
            cfg.stored_position(),
            Some(FixedPosition(Coordinates::new(59.33, 18.06)))
        );
    }

    #[test]
    fn set_location_overrides_previous() {
        let mut cfg = Config::default();

        cfg.set_location(Coordinates::new(1.0, 2.0));
        cfg.set_location(Coordinates::new(3.0, 4.0));

        assert_eq!(
            cfg.location,
            Some(LocationConfig {
                latitude: 3.0,
                longitude: 4.0
            })
        );
    }

    #[test]
    fn toml_roundtrip_keeps_location() {
        let mut cfg = Config::default();
        cfg.set_location(Coordinates::new(13.37, 90.01));

        let text = toml::to_string_pretty(&cfg).expect("serializable");
        let back = Config::from_toml(&text).expect("parsable");

        assert_eq!(back, cfg);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("timeout_ms = \"soon\"").is_err());
    }
}
