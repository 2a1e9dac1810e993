//! User configuration read from `~/.langappa/config.toml`. Every key is
//! optional and command-line flags win over the file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;

use crate::error::ConfigError;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".langappa";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "langappa.log";
/// Deck files live here unless a base is configured.
const DEFAULT_DECK_DIR: &str = "public";

/// Shape of the TOML file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Values supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory or `http(s)://` URL that holds the deck CSV files.
    pub base: String,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Config {
    /// Load the config file (when present) and apply the overrides on top.
    /// `path` defaults to the file in the application data directory.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let data_dir = data_dir()?;
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| data_dir.join(CONFIG_FILE_NAME));
        let file = read_file_config(&path)?;
        Ok(Self::resolve(&data_dir, file, overrides))
    }

    /// Merge file values and overrides over the defaults rooted at `data_dir`.
    pub fn resolve(data_dir: &Path, file: FileConfig, overrides: Overrides) -> Self {
        let base = overrides
            .base
            .or(file.base)
            .unwrap_or_else(|| data_dir.join(DEFAULT_DECK_DIR).display().to_string());
        let log_file = overrides
            .log_file
            .or(file.log_file)
            .unwrap_or_else(|| data_dir.join(LOG_FILE_NAME));
        let log_level = file.log_level.unwrap_or_else(|| "info".to_string());

        Self {
            base,
            log_level,
            log_file,
        }
    }
}

/// Read and parse a config file. A missing file is not an error.
pub fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the application data directory inside the user's home.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
