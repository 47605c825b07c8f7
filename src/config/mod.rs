use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Fields every configuration file is expected to carry.
pub const FIELDS: [&str; 4] = ["data_file", "chart_file", "user", "log_level"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_chart_file")]
    pub chart_file: String,
    /// Name recorded with every mutating operation in the log.
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("work_log.json")
        .to_string_lossy()
        .to_string()
}
fn default_chart_file() -> String {
    Config::config_dir()
        .join("work_plot.pdf")
        .to_string_lossy()
        .to_string()
}
fn default_user() -> String {
    "admin".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            chart_file: default_chart_file(),
            user: default_user(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Data file with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn chart_path(&self) -> PathBuf {
        expand_tilde(&self.chart_file)
    }

    /// Names of known fields absent from a YAML document.
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        let map = value.as_mapping();

        Ok(FIELDS
            .iter()
            .copied()
            .filter(|f| map.is_none_or(|m| !m.contains_key(*f)))
            .collect())
    }

    /// Initialize configuration and data files
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        // Write config file
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            fs::write(Self::config_file(), self.to_yaml()?).map_err(|_| AppError::ConfigSave)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        // Create an empty log if none exists yet
        let data = self.data_path();
        if let Some(parent) = data.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !data.exists() {
            fs::write(&data, "[]")?;
        }

        success(format!("Data file:   {}", data.display()));
        Ok(())
    }
}
