//! Tool manifest parsing and validation.
//!
//! A manifest is a JSON document naming the launcher site and listing the
//! tools to render. This crate turns it into a validated [`Manifest`].

pub mod loader;
pub mod tool;

pub use loader::{load, parse, Manifest, ManifestError, DEFAULT_SITE_TITLE};
pub use tool::{Replacements, ToolSpec};
