//! `[nav]` and `[footer]` section configuration.
//!
//! The link tables that make up the site's header and footer. Every entry
//! names exactly one target, resolved at assembly time:
//!
//! | Field   | Meaning                                      |
//! |---------|----------------------------------------------|
//! | `path`  | Site-relative path, run through the permalink builder |
//! | `route` | Named route (currently only `"blog"`)        |
//! | `asset` | Static file path, resolved without trailing-slash handling |
//! | `href`  | Literal URL, emitted unchanged               |

use super::{ConfigError, defaults};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Resolved view of a link entry's single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    Path(&'a str),
    Route(&'a str),
    Asset(&'a str),
    Href(&'a str),
}

impl<'a> LinkTarget<'a> {
    /// The raw target string.
    pub fn value(&self) -> &'a str {
        match self {
            Self::Path(s) | Self::Route(s) | Self::Asset(s) | Self::Href(s) => s,
        }
    }
}

// ============================================================================
// Link Entries
// ============================================================================

/// One navigation link: a display label plus exactly one target.
///
/// # Example
/// ```toml
/// [[nav.links]]
/// text = "About"
/// path = "/about"
///
/// [[nav.links]]
/// text = "Blog"
/// route = "blog"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LinkConfig {
    /// Display label.
    pub text: String,

    /// Site-relative path target.
    #[serde(default)]
    pub path: Option<String>,

    /// Named route target.
    #[serde(default)]
    pub route: Option<String>,

    /// Literal URL target.
    #[serde(default)]
    pub href: Option<String>,
}

impl LinkConfig {
    /// The entry's single target, or a validation error when zero or
    /// several of `path`/`route`/`href` are set, or the target is an
    /// empty string.
    pub fn target(&self) -> Result<LinkTarget<'_>> {
        let target = match (&self.path, &self.route, &self.href) {
            (Some(path), None, None) => LinkTarget::Path(path),
            (None, Some(route), None) => LinkTarget::Route(route),
            (None, None, Some(href)) => LinkTarget::Href(href),
            _ => bail!(ConfigError::Validation(format!(
                "link `{}` must set exactly one of `path`, `route`, `href`",
                self.text
            ))),
        };
        if target.value().is_empty() {
            bail!(ConfigError::Validation(format!(
                "link `{}` has an empty target",
                self.text
            )));
        }
        Ok(target)
    }
}

/// One social link: accessibility label, icon identifier, and one target.
///
/// # Example
/// ```toml
/// [[footer.social_links]]
/// aria_label = "RSS"
/// icon = "tabler:rss"
/// asset = "/rss.xml"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SocialConfig {
    /// Accessibility label for the rendered icon link.
    pub aria_label: String,

    /// Icon identifier (e.g. `tabler:brand-github`).
    pub icon: String,

    /// Site-relative path target.
    #[serde(default)]
    pub path: Option<String>,

    /// Static asset target.
    #[serde(default)]
    pub asset: Option<String>,

    /// Literal URL target.
    #[serde(default)]
    pub href: Option<String>,
}

impl SocialConfig {
    /// The entry's single target, or a validation error when zero or
    /// several of `path`/`asset`/`href` are set, or the target is an
    /// empty string.
    pub fn target(&self) -> Result<LinkTarget<'_>> {
        let target = match (&self.path, &self.asset, &self.href) {
            (Some(path), None, None) => LinkTarget::Path(path),
            (None, Some(asset), None) => LinkTarget::Asset(asset),
            (None, None, Some(href)) => LinkTarget::Href(href),
            _ => bail!(ConfigError::Validation(format!(
                "social link `{}` must set exactly one of `path`, `asset`, `href`",
                self.aria_label
            ))),
        };
        if target.value().is_empty() {
            bail!(ConfigError::Validation(format!(
                "social link `{}` has an empty target",
                self.aria_label
            )));
        }
        Ok(target)
    }
}

// ============================================================================
// Sections
// ============================================================================

/// `[nav]` section in waypost.toml - header navigation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct NavConfig {
    /// Header links, in display order.
    #[serde(default = "defaults::nav::links")]
    #[educe(Default = defaults::nav::links())]
    pub links: Vec<LinkConfig>,
}

/// `[footer]` section in waypost.toml - footer navigation and copyright.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FooterConfig {
    /// Primary footer links (empty by default, reserved for later use).
    #[serde(default = "defaults::footer::links")]
    #[educe(Default = defaults::footer::links())]
    pub links: Vec<LinkConfig>,

    /// Secondary footer links, in display order.
    #[serde(default = "defaults::footer::secondary_links")]
    #[educe(Default = defaults::footer::secondary_links())]
    pub secondary_links: Vec<LinkConfig>,

    /// Social profile links, in display order.
    #[serde(default = "defaults::footer::social_links")]
    #[educe(Default = defaults::footer::social_links())]
    pub social_links: Vec<SocialConfig>,

    /// Copyright line settings for the foot note.
    #[serde(default)]
    pub copyright: CopyrightConfig,
}

/// `[footer.copyright]` - fields of the generated foot note.
///
/// The end year is always the current calendar year at assembly time.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct CopyrightConfig {
    /// First year of the copyright range.
    #[serde(default = "defaults::footer::copyright::since")]
    #[educe(Default = defaults::footer::copyright::since())]
    pub since: i32,

    /// Copyright holder. Falls back to `[base].author` when unset.
    #[serde(default = "defaults::footer::copyright::holder")]
    #[educe(Default = defaults::footer::copyright::holder())]
    pub holder: Option<String>,
}
