//! Site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use toolsite_manifest::{Manifest, ManifestError};

use crate::index::IndexBuilder;
use crate::render::{render, RenderError};

/// Filename of the generated launcher page.
pub const INDEX_FILE: &str = "index.html";

/// Configuration for building a site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding tool templates
    pub templates_dir: PathBuf,

    /// Directory receiving tool pages and the index
    pub output_dir: PathBuf,

    /// Path to the JSON manifest
    pub manifest_path: PathBuf,

    /// Escape names, descriptions and links on the index page
    pub escape_html: bool,

    /// Fail instead of overwriting when two tools share an output file
    pub deny_duplicate_outputs: bool,
}

impl BuildConfig {
    /// Standard layout under a project root.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            templates_dir: root.join("templates"),
            output_dir: root.join("docs"),
            manifest_path: root.join("tools.json"),
            escape_html: false,
            deny_duplicate_outputs: false,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::from_root(".")
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of tool pages written
    pub pages: usize,

    /// Every file written, index last
    pub written: Vec<PathBuf>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Output {output} is claimed by several tools: {}", .slugs.join(", "))]
    DuplicateOutput { output: String, slugs: Vec<String> },

    #[error("Failed to render index: {0}")]
    Template(String),

    #[error("Failed to write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },
}

/// Stage of a build. Stages only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuildPhase {
    Loading,
    Rendering,
    Indexing,
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    index: IndexBuilder,
    phase: BuildPhase,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        let index = IndexBuilder::new(config.escape_html);
        Self {
            config,
            index,
            phase: BuildPhase::Loading,
        }
    }

    /// Current stage of the build.
    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    /// Build the site.
    ///
    /// Tool pages are written in manifest order and the index last. The first
    /// failure stops the build; pages already written are left in place.
    pub fn build(&mut self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        self.phase = BuildPhase::Loading;
        tracing::debug!("Phase: {:?}", self.phase);

        let manifest = toolsite_manifest::load(&self.config.manifest_path)?;
        self.check_duplicates(&manifest)?;
        ensure_dir(&self.config.output_dir)?;

        self.advance(BuildPhase::Rendering);
        let mut written = Vec::with_capacity(manifest.tools.len() + 1);

        for tool in &manifest.tools {
            let html = render(&self.config.templates_dir, tool)?;
            let out_path = self.config.output_dir.join(&tool.output);
            write_file(&out_path, &html)?;
            written.push(out_path);
        }

        self.advance(BuildPhase::Indexing);
        let index_html = self
            .index
            .build(&manifest.site_title, &manifest.tools)
            .map_err(|e: minijinja::Error| BuildError::Template(e.to_string()))?;
        let index_path = self.config.output_dir.join(INDEX_FILE);
        write_file(&index_path, &index_html)?;
        written.push(index_path);

        Ok(BuildResult {
            pages: manifest.tools.len(),
            written,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn advance(&mut self, next: BuildPhase) {
        debug_assert!(next > self.phase);
        self.phase = next;
        tracing::debug!("Phase: {:?}", self.phase);
    }

    /// Warn about, or reject, tools that write the same output file.
    fn check_duplicates(&self, manifest: &Manifest) -> Result<(), BuildError> {
        for (output, slugs) in manifest.duplicate_outputs() {
            if self.config.deny_duplicate_outputs {
                return Err(BuildError::DuplicateOutput { output, slugs });
            }
            tracing::warn!(
                "Output {} is written by {}; the last one wins",
                output,
                slugs.join(", ")
            );
        }
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|e| BuildError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    fs::write(path, contents).map_err(|e| BuildError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
