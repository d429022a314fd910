//! Site build command.

use std::path::Path;

use anyhow::Result;
use toolsite_static::StaticBuilder;

use crate::config::{load_config, Overrides};

/// Run the build command.
pub fn run(root: &Path, config_path: Option<&Path>, overrides: Overrides) -> Result<()> {
    let file_config = load_config(root, config_path)?;
    let config = file_config.resolve(root, overrides);

    tracing::debug!("Building from {}", config.manifest_path.display());

    let result = StaticBuilder::new(config).build()?;

    tracing::info!(
        "Built {} pages and index in {}ms",
        result.pages,
        result.duration_ms
    );
    tracing::debug!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builds_with_config_file_paths() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("src/pages")).unwrap();
        fs::write(root.join("src/pages/a.html"), "<p>{{X}}</p>").unwrap();
        fs::write(
            root.join("site.json"),
            r#"{"tools": [{"slug": "a", "template": "a.html", "output": "a.html", "replacements": {"{{X}}": "ok"}}]}"#,
        )
        .unwrap();
        fs::write(
            root.join("toolsite.toml"),
            "[paths]\ntemplates = \"src/pages\"\noutput = \"public\"\nmanifest = \"site.json\"\n",
        )
        .unwrap();

        run(root, None, Overrides::default()).unwrap();

        assert_eq!(
            fs::read_to_string(root.join("public/a.html")).unwrap(),
            "<p>ok</p>"
        );
        assert!(root.join("public/index.html").is_file());
    }

    #[test]
    fn fails_without_manifest() {
        let temp = tempdir().unwrap();

        let err = run(temp.path(), None, Overrides::default()).unwrap_err();

        assert!(err.to_string().contains("tools.json"));
    }
}
