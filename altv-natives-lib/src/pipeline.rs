//! The end-to-end generation run: load, render, report, write.

use std::path::{Path, PathBuf};

use altv_natives_core::{Catalog, GenerationMode, RenderedNative, TypeMap, synthesize};

use crate::diff::{self, DiffReport};
use crate::emitter;
use crate::error::GenerateError;
use crate::loader::{self, CatalogSource};
use crate::settings::Settings;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub namespaces: usize,
    pub natives: usize,
    pub mode: GenerationMode,
    pub diff: DiffReport,
}

/// Render every native of the catalog in document order.
///
/// Stops at the first malformed native; a partial module would silently
/// misdescribe the API.
pub fn render_catalog(
    catalog: &Catalog,
    types: &TypeMap,
    mode: GenerationMode,
) -> Result<Vec<RenderedNative>, GenerateError> {
    catalog
        .natives()
        .map(|entry| synthesize(entry, types, mode).map_err(GenerateError::from))
        .collect()
}

/// Run the whole generator.
///
/// Relative paths in `settings` are resolved against `root`. The output
/// file is only touched once every native rendered successfully.
pub fn generate(
    settings: &Settings,
    mode: GenerationMode,
    root: &Path,
    source: &dyn CatalogSource,
) -> Result<GenerateSummary, GenerateError> {
    let cache_path = root.join(&settings.cache_file);
    let catalog = loader::load(&cache_path, &settings.source_url, source)?;
    log::debug!(
        "Loaded {} natives in {} namespaces",
        catalog.len(),
        catalog.namespaces().len()
    );

    let rendered = render_catalog(&catalog, &settings.type_map(), mode)?;
    let diff = diff::report(&catalog, &root.join(&settings.previous_cache_file))?;

    let output = root.join(&settings.output);
    emitter::emit(&rendered, mode, &output)?;

    Ok(GenerateSummary {
        output,
        namespaces: catalog.namespaces().len(),
        natives: rendered.len(),
        mode,
        diff,
    })
}
