//! Generator settings (source URL, file locations, extra type mappings).
//!
//! Settings come from the first file found of:
//!
//! 1. `altv-natives.toml` in the working directory
//! 2. `~/.config/altv-natives/settings.toml`
//!
//! and fall back to the built-in defaults. Every key is optional.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use altv_natives_core::TypeMap;

use crate::error::GenerateError;

pub const DEFAULT_SOURCE_URL: &str = "https://natives.altv.mp/natives";
pub const DEFAULT_CACHE_FILE: &str = "natives.json";
pub const DEFAULT_PREVIOUS_CACHE_FILE: &str = "natives.release-old.json";
pub const DEFAULT_OUTPUT: &str = "dist/index.d.ts";

/// Name of the per-project settings file.
pub const LOCAL_SETTINGS_FILE: &str = "altv-natives.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub source_url: String,
    pub cache_file: PathBuf,
    pub previous_cache_file: PathBuf,
    pub output: PathBuf,
    /// Additional or replacement type mappings, applied over the defaults.
    pub types: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            cache_file: PathBuf::from(DEFAULT_CACHE_FILE),
            previous_cache_file: PathBuf::from(DEFAULT_PREVIOUS_CACHE_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            types: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. `origin` is only used in errors.
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self, GenerateError> {
        toml::from_str(contents).map_err(|source| GenerateError::Settings {
            path: origin.display().to_string(),
            source,
        })
    }

    /// Read settings from a file.
    pub fn from_file(path: &Path) -> Result<Self, GenerateError> {
        let contents = std::fs::read_to_string(path).map_err(GenerateError::at(path))?;
        Self::from_toml(&contents, path)
    }

    /// Default type map with this file's `[types]` applied on top.
    pub fn type_map(&self) -> TypeMap {
        let mut types = TypeMap::default();
        types.extend(self.types.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        types
    }
}

/// Canonical path of the per-user settings file.
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join("altv-natives").join("settings.toml"))
}

/// Resolve which settings file applies when running from `working_dir`.
pub fn settings_path(working_dir: &Path) -> Option<PathBuf> {
    let local = working_dir.join(LOCAL_SETTINGS_FILE);
    if local.is_file() {
        return Some(local);
    }
    user_settings_path().filter(|p| p.is_file())
}

/// Load the settings that apply when running from `working_dir`.
///
/// A settings file that exists but does not parse is an error rather than
/// being silently replaced by defaults.
pub fn load_settings(working_dir: &Path) -> Result<Settings, GenerateError> {
    match settings_path(working_dir) {
        Some(path) => {
            log::debug!("Using settings from {}", path.display());
            Settings::from_file(&path)
        }
        None => Ok(Settings::default()),
    }
}
