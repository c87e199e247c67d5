//! Locating and reading the `config.toml` that tunes advice thresholds and
//! the repository fetcher.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use code2diagram::{Code2DiagramError, config::AppConfig};

const LOCAL_CONFIG: &str = "code2diagram/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid TOML in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Configuration file does not exist: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for Code2DiagramError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Loads the application configuration.
///
/// An explicit path must exist. Without one, the first existing file among
/// `./code2diagram/config.toml` and the platform config directory is used,
/// and the defaults apply when neither exists.
///
/// # Errors
///
/// Returns [`Code2DiagramError::Config`] when the explicit file is missing
/// or the selected file is not valid TOML for [`AppConfig`].
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, Code2DiagramError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return read_config(path, "explicit");
    }

    for (origin, candidate) in search_paths() {
        if candidate.is_file() {
            return read_config(&candidate, origin);
        }
        debug!(origin, path = candidate.display().to_string(); "No configuration file here");
    }

    debug!("Using default configuration");
    Ok(AppConfig::default())
}

/// Implicit configuration locations in priority order.
fn search_paths() -> Vec<(&'static str, PathBuf)> {
    let mut paths = vec![("local", PathBuf::from(LOCAL_CONFIG))];
    match ProjectDirs::from("com", "code2diagram", "code2diagram") {
        Some(dirs) => paths.push(("system", dirs.config_dir().join("config.toml"))),
        None => debug!("Platform config directory is unavailable"),
    }
    paths
}

fn read_config(path: &Path, origin: &str) -> Result<AppConfig, Code2DiagramError> {
    info!(origin, path = path.display().to_string(); "Reading configuration");

    let raw = fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|err| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            reason: err.message().to_string(),
        }
        .into()
    })
}
