use crate::errors::{AppError, AppResult};
use crate::models::season::Season;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level keys written by `init`; `config --check` reports the missing ones.
pub const CONFIG_FIELDS: [&str; 3] = ["season_labels", "output", "color"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Localized `seasonText` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonLabels {
    #[serde(default = "default_winter_label")]
    pub winter: String,
    #[serde(default = "default_summer_label")]
    pub summer: String,
}

impl SeasonLabels {
    pub fn label(&self, season: Season) -> &str {
        match season {
            Season::Winter => &self.winter,
            Season::Summer => &self.summer,
        }
    }
}

impl Default for SeasonLabels {
    fn default() -> Self {
        Self {
            winter: default_winter_label(),
            summer: default_summer_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub season_labels: SeasonLabels,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_winter_label() -> String {
    "winter time".to_string()
}
fn default_summer_label() -> String {
    "summer time".to_string()
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            season_labels: SeasonLabels::default(),
            output: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworktime")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rworktime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworktime.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        // an empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Top-level fields absent from a config file's content
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        let mapping = value.as_mapping();

        Ok(CONFIG_FIELDS
            .iter()
            .copied()
            .filter(|key| !mapping.is_some_and(|m| m.contains_key(*key)))
            .collect())
    }

    /// Write a default configuration file at `path` (parent dirs included).
    /// In test mode nothing is written.
    pub fn init_at(path: &Path, is_test: bool) -> AppResult<()> {
        if is_test {
            return Ok(());
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(())
    }
}
