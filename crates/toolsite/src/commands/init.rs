//! Initialize a toolsite project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(root: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing toolsite in {}", root.display());

    let templates_dir = root.join("templates");
    if !templates_dir.exists() {
        fs::create_dir_all(&templates_dir).context("Failed to create templates directory")?;
    }

    write_starter(&root.join("tools.json"), DEFAULT_MANIFEST, yes)?;
    write_starter(&templates_dir.join("example.html"), DEFAULT_TEMPLATE, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'toolsite build' to generate the site.");

    Ok(())
}

/// Write a starter file unless it exists and `overwrite` is off.
fn write_starter(path: &Path, contents: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(())
}

const DEFAULT_MANIFEST: &str = r#"{
  "site_title": "Tools",
  "tools": [
    {
      "slug": "example",
      "name": "Example Tool",
      "description": "A starter page rendered from templates/example.html",
      "template": "example.html",
      "output": "example.html",
      "replacements": {
        "{{TITLE}}": "Example Tool",
        "{{GREETING}}": "Hello from toolsite"
      }
    }
  ]
}
"#;

const DEFAULT_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{TITLE}}</title>
</head>
<body>
  <h1>{{TITLE}}</h1>
  <p>{{GREETING}}</p>
  <p><a href="./index.html">Back to all tools</a></p>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use toolsite_static::{BuildConfig, StaticBuilder};

    #[test]
    fn scaffolds_buildable_project() {
        let temp = tempdir().unwrap();

        run(temp.path(), false).unwrap();

        assert!(temp.path().join("tools.json").is_file());
        assert!(temp.path().join("templates/example.html").is_file());

        StaticBuilder::new(BuildConfig::from_root(temp.path()))
            .build()
            .unwrap();

        let page = fs::read_to_string(temp.path().join("docs/example.html")).unwrap();
        assert!(page.contains("<h1>Example Tool</h1>"));
        assert!(page.contains("<p>Hello from toolsite</p>"));
    }

    #[test]
    fn keeps_existing_files_without_yes() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("tools.json"), "{}").unwrap();

        run(temp.path(), false).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("tools.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn overwrites_with_yes() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("tools.json"), "{}").unwrap();

        run(temp.path(), true).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("tools.json")).unwrap(),
            DEFAULT_MANIFEST
        );
    }
}
