//! Typed errors for the pieces that callers may want to inspect. Everything
//! above these modules works with `anyhow::Result`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while fetching or parsing a deck resource.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("header row is missing the {0:?} column")]
    MissingHeader(&'static str),
}

/// Failure while reading the TOML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not locate home directory")]
    NoHomeDirectory,
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
