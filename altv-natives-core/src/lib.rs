//! Natives catalog data model and declaration rendering.
//!
//! This crate turns the alt:V natives metadata document into TypeScript
//! declaration text without touching the filesystem or the network.
//! Loading, caching and writing live in `altv-natives-lib`.

pub mod catalog;
pub mod error;
pub mod mode;
pub mod naming;
pub mod signature;
pub mod types;

pub use catalog::{Catalog, Namespace, NativeEntry, Param};
pub use error::CatalogError;
pub use mode::{GenerationMode, ModuleTemplate};
pub use naming::normalize;
pub use signature::{RenderedNative, render_comment, render_params, render_results, synthesize};
pub use types::TypeMap;
