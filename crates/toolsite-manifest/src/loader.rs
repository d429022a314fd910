//! Manifest loading.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::tool::{RawToolSpec, ToolSpec};

/// Site title used when the manifest does not set one.
pub const DEFAULT_SITE_TITLE: &str = "Tools";

/// A parsed and validated manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// Title of the launcher page
    pub site_title: String,

    /// Tools in declaration order
    pub tools: Vec<ToolSpec>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.to_string(),
            tools: Vec::new(),
        }
    }
}

impl Manifest {
    /// Output filenames claimed by more than one tool.
    ///
    /// Each entry pairs the output with the slugs that write it, listed in
    /// order of first appearance.
    pub fn duplicate_outputs(&self) -> Vec<(String, Vec<String>)> {
        let mut claims: Vec<(String, Vec<String>)> = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for tool in &self.tools {
            match seen.get(tool.output.as_str()) {
                Some(&i) => claims[i].1.push(tool.slug.clone()),
                None => {
                    seen.insert(&tool.output, claims.len());
                    claims.push((tool.output.clone(), vec![tool.slug.clone()]));
                }
            }
        }

        claims.retain(|(_, slugs)| slugs.len() > 1);
        claims
    }
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default = "default_site_title")]
    site_title: String,
    #[serde(default)]
    tools: Vec<RawToolSpec>,
}

fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}

/// Errors that can occur when loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Invalid manifest {origin}: {message}")]
    Config { origin: String, message: String },

    #[error("tools[{index}]{} is missing required field `{field}`", describe_slug(.slug))]
    Schema {
        index: usize,
        slug: Option<String>,
        field: &'static str,
    },
}

fn describe_slug(slug: &Option<String>) -> String {
    match slug {
        Some(s) => format!(" ({})", s),
        None => String::new(),
    }
}

/// Read and parse the manifest at `path`.
pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
    let origin = path.display().to_string();

    let source = fs::read_to_string(path).map_err(|e| ManifestError::Config {
        origin: origin.clone(),
        message: e.to_string(),
    })?;

    parse_from(&source, &origin)
}

/// Parse a manifest from JSON source.
pub fn parse(source: &str) -> Result<Manifest, ManifestError> {
    parse_from(source, "<inline>")
}

fn parse_from(source: &str, origin: &str) -> Result<Manifest, ManifestError> {
    let raw: RawManifest = serde_json::from_str(source).map_err(|e| ManifestError::Config {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;

    let tools = raw
        .tools
        .into_iter()
        .enumerate()
        .map(|(index, tool)| {
            tool.validate()
                .map_err(|(slug, field)| ManifestError::Schema { index, slug, field })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Manifest {
        site_title: raw.site_title,
        tools,
    })
}
