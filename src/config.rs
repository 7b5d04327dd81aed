use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{InsightError, Result};
use crate::quantity::{UnitSystem, unit_system};

pub const DEFAULT_CONFIG_PATH: &str = "/etc/mkube-insight/config.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_cluster_name")]
    pub cluster_name: String,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default = "default_memory_units")]
    pub memory_units: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

fn default_cluster_name() -> String {
    "mkube".to_string()
}

fn default_memory_units() -> String {
    "binaryBytes".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster_name: default_cluster_name(),
            output: OutputFormat::default(),
            memory_units: default_memory_units(),
            namespace: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| InsightError::Config {
            path: path.to_path_buf(),
            message: format!("reading: {}", e),
        })?;
        Self::parse(&data).map_err(|message| InsightError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Load an explicit path, or the default path when it exists, or defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load(&path)
                } else {
                    debug!("no config at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn parse(data: &str) -> std::result::Result<Self, String> {
        // An empty document deserializes as unit, not as a map
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(data).map_err(|e| format!("parsing: {}", e))
    }

    /// Unit system for node memory; unknown names degrade to the fallback.
    pub fn memory_system(&self) -> &'static UnitSystem {
        unit_system(&self.memory_units)
    }
}
