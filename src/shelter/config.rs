use crate::error::{Result, ShelterError};
use crate::store::fs_backend::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for shelter, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelterConfig {
    /// File name of the catalog inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Seed the default catalog when no catalog file exists yet
    #[serde(default = "default_seed_on_missing")]
    pub seed_on_missing: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_seed_on_missing() -> bool {
    true
}

impl Default for ShelterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_on_missing: default_seed_on_missing(),
        }
    }
}

impl ShelterConfig {
    pub const KEYS: [&'static str; 2] = ["data-file", "seed-on-missing"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelterError::Io)?;
        let mut config: ShelterConfig =
            serde_json::from_str(&content).map_err(ShelterError::Serialization)?;
        config.data_file = check_data_file(&config.data_file)?.to_string();
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelterError::Serialization)?;
        fs::write(config_path, content).map_err(ShelterError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.clone()),
            "seed-on-missing" => Ok(self.seed_on_missing.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                self.data_file = check_data_file(value)?.to_string();
            }
            "seed-on-missing" => {
                self.seed_on_missing = value.trim().parse().map_err(|_| {
                    ShelterError::Config(format!(
                        "seed-on-missing must be true or false, got '{}'",
                        value
                    ))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).ok().map(|v| (*k, v)))
            .collect()
    }
}

fn check_data_file(value: &str) -> Result<&str> {
    let value = value.trim();
    if value.is_empty() || value.contains(['/', '\\']) {
        return Err(ShelterError::Config(format!(
            "data-file must be a plain file name, got '{}'",
            value
        )));
    }
    if is_reserved_name(value) {
        return Err(ShelterError::Config(format!(
            "data-file cannot be '{}', that name is used by shelter itself",
            value
        )));
    }
    Ok(value)
}

// The config file itself, directory entries, and the store's temp files.
fn is_reserved_name(name: &str) -> bool {
    name == CONFIG_FILENAME || name == "." || name == ".." || name.starts_with(".pets-")
}

fn unknown_key(key: &str) -> ShelterError {
    ShelterError::Config(format!(
        "unknown config key '{}' (known: {})",
        key,
        ShelterConfig::KEYS.join(", ")
    ))
}
