//! Optional `toolsite.toml` configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use toolsite_static::BuildConfig;

/// Default config filename, looked up under the project root.
pub const CONFIG_FILE: &str = "toolsite.toml";

/// Configuration file structure (toolsite.toml).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_templates")]
    pub templates: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_manifest")]
    pub manifest: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            templates: default_templates(),
            output: default_output(),
            manifest: default_manifest(),
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct BuildSettings {
    #[serde(default)]
    pub escape_html: bool,
    #[serde(default)]
    pub deny_duplicate_outputs: bool,
}

fn default_templates() -> String {
    "templates".to_string()
}
fn default_output() -> String {
    "docs".to_string()
}
fn default_manifest() -> String {
    "tools.json".to_string()
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub escape_html: bool,
    pub deny_duplicate_outputs: bool,
}

/// Load the config file.
///
/// A missing default file yields defaults; a missing file named explicitly
/// with `--config` is an error, as is a malformed one.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ConfigFile> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => root.join(CONFIG_FILE),
    };

    if !config_path.exists() {
        if explicit.is_some() {
            anyhow::bail!("Config file not found: {}", config_path.display());
        }
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    tracing::debug!("Loaded config from {}", config_path.display());

    Ok(config)
}

impl ConfigFile {
    /// Resolve paths against `root` and apply command-line overrides.
    pub fn resolve(&self, root: &Path, overrides: Overrides) -> BuildConfig {
        BuildConfig {
            templates_dir: root.join(&self.paths.templates),
            output_dir: overrides
                .output
                .unwrap_or_else(|| root.join(&self.paths.output)),
            manifest_path: root.join(&self.paths.manifest),
            escape_html: overrides.escape_html || self.build.escape_html,
            deny_duplicate_outputs: overrides.deny_duplicate_outputs
                || self.build.deny_duplicate_outputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_default_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(temp.path(), None).unwrap();

        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.paths.output, "docs");
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let temp = tempdir().unwrap();

        let result = load_config(temp.path(), Some(&temp.path().join("custom.toml")));

        assert!(result.is_err());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "[paths]\noutput = \"public\"\n\n[build]\nescape_html = true\n",
        )
        .unwrap();

        let config = load_config(temp.path(), None).unwrap();

        assert_eq!(config.paths.output, "public");
        assert_eq!(config.paths.templates, "templates");
        assert_eq!(config.paths.manifest, "tools.json");
        assert!(config.build.escape_html);
        assert!(!config.build.deny_duplicate_outputs);
    }

    #[test]
    fn malformed_file_is_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "[paths\noutput = 1").unwrap();

        assert!(load_config(temp.path(), None).is_err());
    }

    #[test]
    fn resolves_against_root_with_overrides() {
        let root = Path::new("/srv/site");

        let build = ConfigFile::default().resolve(
            root,
            Overrides {
                output: Some(PathBuf::from("/tmp/out")),
                escape_html: false,
                deny_duplicate_outputs: true,
            },
        );

        assert_eq!(build.templates_dir, root.join("templates"));
        assert_eq!(build.manifest_path, root.join("tools.json"));
        assert_eq!(build.output_dir, PathBuf::from("/tmp/out"));
        assert!(!build.escape_html);
        assert!(build.deny_duplicate_outputs);
    }
}
