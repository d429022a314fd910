//! Template rendering by literal substitution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use toolsite_manifest::{Replacements, ToolSpec};

/// Errors that can occur when rendering a tool template.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to read template {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },
}

/// Apply replacements to `text` in order.
///
/// Each token replaces every non-overlapping occurrence in the text produced
/// by the previous pairs, so a value inserted early can be matched by a later
/// token.
pub fn apply_replacements(text: &str, replacements: &Replacements) -> String {
    replacements
        .iter()
        .fold(text.to_string(), |acc, (token, value)| {
            acc.replace(token, value)
        })
}

/// Render a tool's template found under `templates_root`.
pub fn render(templates_root: &Path, tool: &ToolSpec) -> Result<String, RenderError> {
    let path = templates_root.join(&tool.template);

    let raw = fs::read_to_string(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => RenderError::TemplateNotFound { path: path.clone() },
        _ => RenderError::Read {
            path: path.clone(),
            message: e.to_string(),
        },
    })?;

    tracing::debug!(
        "Applying {} replacements to {}",
        tool.replacements.len(),
        path.display()
    );

    Ok(apply_replacements(&raw, &tool.replacements))
}
