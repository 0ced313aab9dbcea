//! Rendering: registry model to Go source text.
//!
//! ## Module Structure
//!
//! - `code`: structured model of the emitted Go declarations
//! - `registry`: the registry template built from a [`RegistryModel`]
//! - `printer`: gofmt-style printing of the code model

pub mod code;
pub mod printer;
pub mod registry;

pub use registry::{REGISTRY_TYPE, RenderOptions};

use crate::core::model::RegistryModel;

/// Render a registry model to raw Go source.
pub fn render(model: &RegistryModel, options: RenderOptions) -> String {
    printer::print(&registry::registry_file(model, options))
}
