/// Errors raised while reading or rendering a natives catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed results {results:?} for native {native}: {reason}")]
    Format {
        native: String,
        results: String,
        reason: &'static str,
    },
}

impl CatalogError {
    pub fn format(native: impl Into<String>, results: impl Into<String>, reason: &'static str) -> Self {
        Self::Format {
            native: native.into(),
            results: results.into(),
            reason,
        }
    }
}
