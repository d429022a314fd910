//! Manifest validation command.

use std::path::Path;

use anyhow::Result;
use toolsite_static::BuildConfig;

use crate::config::{load_config, Overrides};

/// Run the check command.
pub fn run(root: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(root, config_path)?.resolve(root, Overrides::default());

    let problems = check(&config)?;
    if problems > 0 {
        anyhow::bail!(
            "Found {} problem(s) in {}",
            problems,
            config.manifest_path.display()
        );
    }

    Ok(())
}

/// Validate the manifest and its templates, returning the number of problems.
///
/// Duplicate outputs only count as problems when they are denied.
fn check(config: &BuildConfig) -> Result<usize> {
    let manifest = toolsite_manifest::load(&config.manifest_path)?;
    let mut problems = 0;

    for tool in &manifest.tools {
        let template = config.templates_dir.join(&tool.template);
        if !template.is_file() {
            tracing::warn!("{}: template not found: {}", tool.slug, template.display());
            problems += 1;
        }
    }

    for (output, slugs) in manifest.duplicate_outputs() {
        tracing::warn!("Output {} is written by {}", output, slugs.join(", "));
        if config.deny_duplicate_outputs {
            problems += 1;
        }
    }

    if problems == 0 {
        tracing::info!(
            "Manifest OK: {} tools, title \"{}\"",
            manifest.tools.len(),
            manifest.site_title
        );
    }

    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn project(manifest: &str, templates: &[&str]) -> tempfile::TempDir {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("templates")).unwrap();
        for name in templates {
            fs::write(temp.path().join("templates").join(name), "x").unwrap();
        }
        fs::write(temp.path().join("tools.json"), manifest).unwrap();
        temp
    }

    #[test]
    fn accepts_valid_project() {
        let temp = project(
            r#"{"tools": [{"slug": "a", "template": "a.html", "output": "a.html"}]}"#,
            &["a.html"],
        );

        run(temp.path(), None).unwrap();

        assert!(!temp.path().join("docs").exists());
    }

    #[test]
    fn counts_missing_templates() {
        let temp = project(
            r#"{"tools": [
                {"slug": "a", "template": "a.html", "output": "a.html"},
                {"slug": "b", "template": "b.html", "output": "b.html"},
                {"slug": "c", "template": "c.html", "output": "c.html"}
            ]}"#,
            &["a.html"],
        );
        let config = BuildConfig::from_root(temp.path());

        assert_eq!(check(&config).unwrap(), 2);
        assert!(run(temp.path(), None).is_err());
    }

    #[test]
    fn duplicates_count_only_when_denied() {
        let temp = project(
            r#"{"tools": [
                {"slug": "a", "template": "a.html", "output": "same.html"},
                {"slug": "b", "template": "a.html", "output": "same.html"}
            ]}"#,
            &["a.html"],
        );

        let lenient = BuildConfig::from_root(temp.path());
        assert_eq!(check(&lenient).unwrap(), 0);

        let strict = BuildConfig {
            deny_duplicate_outputs: true,
            ..BuildConfig::from_root(temp.path())
        };
        assert_eq!(check(&strict).unwrap(), 1);
    }

    #[test]
    fn schema_errors_fail() {
        let temp = project(r#"{"tools": [{"slug": "a"}]}"#, &[]);

        let err = run(temp.path(), None).unwrap_err();

        assert!(err.to_string().contains("missing required field"));
    }
}
