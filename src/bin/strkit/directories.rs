use std::env;
use std::path::PathBuf;

use strkit::error::*;

/// Wrapper for 'dirs' that treats MacOS more like Linux, by following the XDG specification.
/// `STRKIT_CONFIG_DIR` is checked before the `XDG_CONFIG_HOME` environment variable.
/// The fallback directory is `~/.config/strkit`.
pub struct ProjectDirs {
    config_dir: PathBuf,
}

impl ProjectDirs {
    pub fn new() -> Result<ProjectDirs> {
        // Checks whether or not $STRKIT_CONFIG_DIR exists. If it doesn't, set config dir
        // to our system's default configuration home.
        let config_dir = if let Some(config_dir) = env::var_os("STRKIT_CONFIG_DIR") {
            let config_dir = config_dir.to_string_lossy().to_string();
            let expanded =
                shellexpand::full(&config_dir).map_err(|e| Error::InterpolationError {
                    location: ConfigType::MAIN,
                    cause: e.to_string(),
                })?;
            PathBuf::from(expanded.as_ref())
        } else {
            #[cfg(target_os = "macos")]
            let config_dir_op = env::var_os("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .filter(|p| p.is_absolute())
                .or_else(|| dirs_next::home_dir().map(|d| d.join(".config")));

            #[cfg(not(target_os = "macos"))]
            let config_dir_op = dirs_next::config_dir();

            config_dir_op
                .map(|d| d.join("strkit"))
                .ok_or("Could not get home directory")?
        };

        Ok(ProjectDirs { config_dir })
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }
}
