use std::path::PathBuf;

use strkit::{config::MainConfig, constants::config::DEFAULT_CONF_FILE, debug, error::*};

use crate::directories::ProjectDirs;

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
}

impl BootStrap {
    /// Loads the main configuration, from `config_file` when given or from
    /// the default location otherwise.
    pub fn new(config_file: Option<&str>) -> Result<Self> {
        let config_file = match config_file {
            Some(file) => PathBuf::from(file),
            None => ProjectDirs::new()?.config_dir().join(DEFAULT_CONF_FILE),
        };
        debug!("Loading configuration from {}", config_file.display());

        Ok(BootStrap {
            config: MainConfig::load(&config_file)?,
        })
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }
}
