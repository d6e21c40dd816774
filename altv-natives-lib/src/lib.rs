//! Natives declaration generator: catalog caching, module emission and
//! release diffing on top of `altv-natives-core`.

pub mod diff;
pub mod emitter;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod settings;

pub use altv_natives_core::{Catalog, GenerationMode, RenderedNative, TypeMap};
pub use diff::DiffReport;
pub use error::GenerateError;
pub use loader::{CatalogSource, HttpSource};
pub use pipeline::{GenerateSummary, generate, render_catalog};
pub use settings::{Settings, load_settings};
