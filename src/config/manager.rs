use std::path::{Path, PathBuf};

use crate::utils::persistence::read_if_exists;

use super::{Config, ConfigError};

const CONFIG_FILE: &str = "config.json";

/// Reads [`Config`] from `config.json`. The file is edited by hand; a missing
/// file means defaults.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: &Path) -> Self {
        Self::new(base.join(CONFIG_FILE))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        match read_if_exists(&self.config_path)? {
            Some(data) => {
                serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
            }
            None => Ok(Config::default()),
        }
    }
}
