use std::collections::HashMap;

/// Native type tags that map onto a different TypeScript type.
///
/// Tags not listed here are emitted as-is and are expected to be declared
/// by the client typings (e.g. `Vector3`, `BOOL`, `Blip`).
pub const DEFAULT_TYPE_MAPPINGS: &[(&str, &str)] = &[
    ("Hash", "number"),
    ("int", "number"),
    ("float", "number"),
    ("FireId", "number"),
    ("Any", "any"),
    ("ScrHandle", "number"),
    ("Interior", "number"),
    ("Cam", "number"),
    ("Pickup", "number"),
    // Player is not accepted by every native taking a Ped, but most do
    ("Ped", "Ped | Player | number"),
    ("Player", "Player | number"),
    ("Vehicle", "Vehicle | number"),
    ("Entity", "Entity | number"),
];

/// Lookup table from native type tag to TypeScript type expression.
///
/// Lookups are exact and case-sensitive; unknown tags resolve to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    entries: HashMap<String, String>,
}

impl TypeMap {
    /// An empty map: every tag resolves to itself.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace a mapping.
    pub fn insert(&mut self, tag: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(tag.into(), target.into());
    }

    /// Builder-style [`TypeMap::insert`].
    pub fn with(mut self, tag: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(tag, target);
        self
    }

    pub fn resolve<'a>(&'a self, tag: &'a str) -> &'a str {
        self.entries.get(tag).map(String::as_str).unwrap_or(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for (tag, target) in DEFAULT_TYPE_MAPPINGS {
            map.insert(*tag, *target);
        }
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TypeMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (tag, target) in iter {
            self.insert(tag, target);
        }
    }
}
