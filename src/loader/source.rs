//! Where deck files come from: a local directory or a static web host.

use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client;

use crate::error::LoadError;

/// Anything that can hand back the text of a named deck resource. Sources are
/// shared with the background loader thread, hence `Send + Sync`.
pub trait ResourceSource: Send + Sync {
    fn fetch(&self, name: &str) -> Result<String, LoadError>;

    /// Where resources come from, for log lines.
    fn describe(&self) -> String;
}

/// Deck files stored in a local directory.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceSource for DirectorySource {
    fn fetch(&self, name: &str) -> Result<String, LoadError> {
        let path = self.root.join(name);
        fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Deck files published on a static web host.
pub struct HttpSource {
    base: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base: impl Into<String>) -> Result<Self, LoadError> {
        let base = base.into();
        let client = Client::builder().build().map_err(|source| LoadError::Http {
            url: base.clone(),
            source,
        })?;
        Ok(Self { base, client })
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), name)
    }
}

impl ResourceSource for HttpSource {
    fn fetch(&self, name: &str) -> Result<String, LoadError> {
        let url = self.url_for(name);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| LoadError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .map_err(|source| LoadError::Http { url, source })
    }

    fn describe(&self) -> String {
        self.base.clone()
    }
}

/// True when the base should be fetched over HTTP rather than read from disk.
pub fn is_remote(base: &str) -> bool {
    base.starts_with("http://") || base.starts_with("https://")
}

/// Pick the source implementation matching the configured base.
pub fn source_for(base: &str) -> Result<Box<dyn ResourceSource>, LoadError> {
    if is_remote(base) {
        Ok(Box::new(HttpSource::new(base)?))
    } else {
        Ok(Box::new(DirectorySource::new(base)))
    }
}
