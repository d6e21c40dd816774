//! Loading the natives catalog from the local cache or the network.

use std::cell::OnceCell;
use std::fs;
use std::path::Path;

use altv_natives_core::Catalog;

use crate::error::GenerateError;

/// Somewhere a raw natives document can be downloaded from.
pub trait CatalogSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, GenerateError>;
}

/// Blocking HTTP download of the natives document.
///
/// The client is only built on the first download, so runs served from
/// the cache never initialise TLS.
#[derive(Default)]
pub struct HttpSource {
    client: OnceCell<reqwest::blocking::Client>,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self) -> Result<&reqwest::blocking::Client, GenerateError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("altv-natives/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(self.client.get_or_init(|| client))
    }

    /// Whether the HTTP client has been built yet.
    pub fn is_connected(&self) -> bool {
        self.client.get().is_some()
    }
}

impl CatalogSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, GenerateError> {
        let response = self.client()?.get(url).send()?;

        if !response.status().is_success() {
            return Err(GenerateError::fetch(format!(
                "HTTP {} for {url}",
                response.status()
            )));
        }

        Ok(response.bytes()?.to_vec())
    }
}

/// Load the catalog, downloading and caching it on first use.
///
/// An existing cache file is trusted as-is and never revalidated against
/// `source_url`. On a cache miss the downloaded body is parsed first and
/// only then written to `cache_path` byte for byte, so a broken download
/// never poisons the cache.
pub fn load(
    cache_path: &Path,
    source_url: &str,
    source: &dyn CatalogSource,
) -> Result<Catalog, GenerateError> {
    if cache_path.exists() {
        log::debug!("Reading cached natives from {}", cache_path.display());
        let bytes = fs::read(cache_path).map_err(GenerateError::at(cache_path))?;
        return Ok(Catalog::from_slice(&bytes)?);
    }

    log::info!("Downloading natives from {source_url}");
    let body = source.fetch(source_url)?;
    let catalog = Catalog::from_slice(&body)?;

    if let Some(parent) = cache_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(GenerateError::at(parent))?;
    }
    fs::write(cache_path, &body).map_err(GenerateError::at(cache_path))?;
    log::debug!("Cached {} bytes to {}", body.len(), cache_path.display());

    Ok(catalog)
}
