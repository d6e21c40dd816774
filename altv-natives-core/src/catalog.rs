//! The natives metadata document.
//!
//! The source document is an object keyed by namespace, each holding an
//! object keyed by native hash. Both levels keep document order; generated
//! output follows that order exactly, so nothing here sorts.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::CatalogError;

/// A single parameter of a native.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Passed by reference; only these may become optional.
    #[serde(rename = "ref", default)]
    pub is_ref: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, is_ref: bool) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_ref,
        }
    }
}

/// One native as described by the catalog.
///
/// Fields the generator does not use (hashes, build numbers, examples)
/// are ignored when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NativeEntry {
    /// Source-style name, e.g. `_GET_ENTITY_COORDS`.
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    /// Result types, either bare (`int`) or bracketed (`[BOOL, Vector3]`).
    pub results: String,
    #[serde(default)]
    pub comment: String,
}

/// All natives of one namespace, keyed by native hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub natives: Vec<(String, NativeEntry)>,
}

/// The full natives catalog in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    namespaces: Vec<Namespace>,
}

impl Catalog {
    pub fn new(namespaces: Vec<Namespace>) -> Self {
        Self { namespaces }
    }

    /// Parse a catalog from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let root: Map<String, Value> = serde_json::from_slice(bytes)?;
        let mut namespaces = Vec::with_capacity(root.len());

        for (name, value) in root {
            let entries: Map<String, Value> = serde_json::from_value(value)?;
            let mut natives = Vec::with_capacity(entries.len());
            for (key, entry) in entries {
                natives.push((key, serde_json::from_value::<NativeEntry>(entry)?));
            }
            namespaces.push(Namespace { name, natives });
        }

        Ok(Self { namespaces })
    }

    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        Self::from_slice(json.as_bytes())
    }

    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    /// Every native, namespace by namespace.
    pub fn natives(&self) -> impl Iterator<Item = &NativeEntry> {
        self.namespaces
            .iter()
            .flat_map(|ns| ns.natives.iter().map(|(_, entry)| entry))
    }

    pub fn len(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.natives.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
