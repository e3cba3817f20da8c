use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::constants::config::DEFAULT_EMAIL_SEPARATOR;
use crate::constants::template::DEFAULT_GREETING;
use crate::error::*;
use crate::log;

#[derive(Deserialize, Debug, Default)]
pub struct MainConfig {
    #[serde(default)]
    pub defaults: Defaults,
    /// Extra variables available to greeting patterns
    #[serde(default)]
    pub vars: HashMap<String, String>,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Defaults {
    pub greeting: String,
    pub email_separator: String,
    pub rect_width: usize,
    pub rect_height: usize,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            greeting: DEFAULT_GREETING.to_string(),
            email_separator: DEFAULT_EMAIL_SEPARATOR.to_string(),
            rect_width: 6,
            rect_height: 4,
        }
    }
}

impl MainConfig {
    /// Loads the main configuration from the given file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    /// * `ConfigReadError` - If the file exists but cannot be read
    /// * `SerdeTomlError` - If the file is not valid TOML for a `MainConfig`
    pub fn load(config_file: &Path) -> Result<Self> {
        let file_name = config_file.to_string_lossy().to_string();
        let toml_data = match parse(config_file) {
            Ok(data) => data,
            Err(Error::Io(e)) if e.kind() == ::std::io::ErrorKind::NotFound => {
                crate::debug!("No configuration found at {}, using defaults", file_name);
                return Ok(Self::default());
            }
            Err(Error::Io(e)) => {
                return Err(Error::ConfigReadError {
                    file: file_name,
                    cause: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        toml::from_str::<MainConfig>(&toml_data).map_err(|e| Error::SerdeTomlError {
            location: ConfigType::MAIN,
            file: file_name.clone(),
            cause: log::debug_message(e.to_string(), format!("\n[Config path] {}", file_name)),
        })
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}
