//! Site configuration management for `waypost.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url, path prefix) |
//! | `[nav]`     | Header navigation links                         |
//! | `[footer]`  | Footer links, social links, copyright           |
//! | `[extra]`   | User-defined custom fields                      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! author = "Alice"
//! url = "https://example.com"
//!
//! [[nav.links]]
//! text = "Blog"
//! route = "blog"
//!
//! [[footer.social_links]]
//! aria_label = "Github"
//! icon = "tabler:brand-github"
//! href = "https://github.com/alice"
//!
//! [footer.copyright]
//! since = 2020
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```
//!
//! Every field has a default, and the defaults reproduce the site's
//! current navigation - a missing config file is not an error.

mod base;
pub mod defaults;
mod error;
mod nav;

// Re-export public types used by other modules
pub use nav::{LinkConfig, LinkTarget, SocialConfig};

// Internal imports used in this module
use base::BaseConfig;
use error::ConfigError;
use nav::{FooterConfig, NavConfig};

use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing waypost.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Header navigation
    #[serde(default)]
    pub nav: NavConfig,

    /// Footer navigation and copyright
    #[serde(default)]
    pub footer: FooterConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// All link entries across the header and footer tables
    pub fn link_entries(&self) -> impl Iterator<Item = &LinkConfig> {
        self.nav
            .links
            .iter()
            .chain(self.footer.links.iter())
            .chain(self.footer.secondary_links.iter())
    }

    /// Validate the configuration.
    ///
    /// Checks the structural rules that must hold before assembly:
    /// every entry has a non-empty label and exactly one target, and
    /// `[base].url` carries a scheme when set.
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        for link in self.link_entries() {
            if link.text.trim().is_empty() {
                bail!(ConfigError::Validation(
                    "link with empty `text` found".into()
                ));
            }
            link.target()?;
        }

        for social in &self.footer.social_links {
            if social.aria_label.trim().is_empty() {
                bail!(ConfigError::Validation(
                    "social link with empty `aria_label` found".into()
                ));
            }
            if social.icon.trim().is_empty() {
                bail!(ConfigError::Validation(format!(
                    "social link `{}` has an empty `icon`",
                    social.aria_label
                )));
            }
            social.target()?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [base]
            title = "My Blog"
            author = "Test Author"
        "#;
        let result = SiteConfig::from_str(config_str);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.base.title, "My Blog");
        assert_eq!(config.base.author, "Test Author");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "My Blog"
        "#;
        let result = SiteConfig::from_str(invalid_config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("parsing error"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
                [base]
                title = "From File"
            "#
        )
        .unwrap();

        let config = SiteConfig::from_path(file.path()).unwrap();
        assert_eq!(config.base.title, "From File");
        assert_eq!(config.config_path, file.path());
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SiteConfig::from_path(Path::new("/nonexistent/waypost.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("IO error"));
    }

    #[test]
    fn test_validate_default_config() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_base_url() {
        let config = r#"
            [base]
            url = "ftp://example.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("http"));
    }

    #[test]
    fn test_validate_empty_link_text() {
        let config = r#"
            [[nav.links]]
            text = "  "
            path = "/about"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("empty `text`"));
    }

    #[test]
    fn test_validate_empty_link_href() {
        let config = r#"
            [[nav.links]]
            text = "X"
            href = ""
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("empty target"));
    }

    #[test]
    fn test_validate_link_without_target() {
        let config = r#"
            [[footer.secondary_links]]
            text = "Home"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("exactly one"));
    }

    #[test]
    fn test_validate_social_empty_icon() {
        let config = r#"
            [[footer.social_links]]
            aria_label = "Github"
            icon = ""
            href = "https://github.com/eathren"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("icon"));
    }

    #[test]
    fn test_link_entries_covers_all_tables() {
        let config = r#"
            [[nav.links]]
            text = "A"
            path = "/a"

            [[footer.links]]
            text = "B"
            path = "/b"

            [[footer.secondary_links]]
            text = "C"
            path = "/c"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let texts: Vec<&str> = config.link_entries().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_extra_fields() {
        let config = r#"
            [extra]
            custom_field = "custom_value"
            number_field = 42
            nested = { key = "value" }
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.extra.get("custom_field").and_then(|v| v.as_str()),
            Some("custom_value")
        );
        assert_eq!(
            config.extra.get("number_field").and_then(|v| v.as_integer()),
            Some(42)
        );
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [base]
            title = "Test"

            [unknown_section]
            field = "value"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
