//! `emit` command: write the resolved navigation manifest.

use crate::config::SiteConfig;
use crate::log;
use crate::navigation::{NavData, current_year};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Resolve all link tables and write the manifest as JSON.
///
/// The manifest is a pure function of the config and the current year:
/// `{ "header": …, "footer": … }` with camelCase field names.
pub fn emit_nav(config: &SiteConfig, output: Option<&Path>, compact: bool) -> Result<()> {
    config.validate()?;
    let nav = NavData::assemble(config, current_year())?;

    let json = if compact {
        serde_json::to_string(&nav)?
    } else {
        serde_json::to_string_pretty(&nav)?
    };

    match output {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            log!("emit"; "wrote navigation manifest to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_emit_to_file() {
        let config = SiteConfig::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navigation.json");

        emit_nav(&config, Some(&path), false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));

        let manifest: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(manifest["header"]["links"][0]["text"], "Blog");
        assert_eq!(manifest["header"]["links"][0]["href"], "/blog");
        assert_eq!(manifest["footer"]["links"], Value::Array(vec![]));
        assert_eq!(
            manifest["footer"]["socialLinks"].as_array().unwrap().len(),
            3
        );
        assert!(
            manifest["footer"]["footNote"]
                .as_str()
                .unwrap()
                .contains("Nolan Braman")
        );
    }

    #[test]
    fn test_emit_compact_is_single_line() {
        let config = SiteConfig::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navigation.json");

        emit_nav(&config, Some(&path), true).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end().lines().count(), 1);
    }

    #[test]
    fn test_emit_rejects_invalid_config() {
        let config = SiteConfig::from_str(
            r#"
                [base]
                url = "example.com"
            "#,
        )
        .unwrap();

        assert!(emit_nav(&config, None, false).is_err());
    }

    #[test]
    fn test_emit_rejects_empty_href() {
        // An empty literal target must fail up front, not reach the
        // manifest with an empty href.
        let config = SiteConfig::from_str(
            r#"
                [[nav.links]]
                text = "X"
                href = ""
            "#,
        )
        .unwrap();

        let err = emit_nav(&config, None, false).unwrap_err().to_string();
        assert!(err.contains("empty target"));
    }

    #[test]
    fn test_emit_to_unwritable_path() {
        let config = SiteConfig::default();
        let result = emit_nav(&config, Some(Path::new("/nonexistent/dir/nav.json")), false);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("failed to write"));
    }
}
