//! Static site generator for toolsite.
//!
//! Renders each manifest tool's template by literal substitution and writes a
//! launcher index linking every page.

pub mod builder;
pub mod index;
pub mod render;

pub use builder::{
    BuildConfig, BuildError, BuildPhase, BuildResult, StaticBuilder, INDEX_FILE,
};
pub use index::{build_index, Card, IndexBuilder};
pub use render::{apply_replacements, render, RenderError};
