use std::path::Path;

use altv_natives_core::CatalogError;

/// Errors that can occur while generating the declaration file.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed: {0}")]
    Fetch(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Invalid settings in {path}: {source}")]
    Settings {
        path: String,
        source: toml::de::Error,
    },
}

impl GenerateError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Helper for `map_err` on filesystem calls.
    pub(crate) fn at(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::io(path, source)
    }
}
