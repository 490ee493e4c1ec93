//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, URL layout, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in waypost.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// author = "Alice"
/// url = "https://myblog.com"
/// path_prefix = "site"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, used in log output.
    #[serde(default)]
    pub title: String,

    /// Author name, used as the default copyright holder in the footer.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Base URL for canonical links.
    /// Must start with http:// or https:// when set.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Path prefix prepended to every site-relative link
    /// (for sites served under a subdirectory, e.g. GitHub Pages).
    #[serde(default = "defaults::base::path_prefix")]
    #[educe(Default = defaults::base::path_prefix())]
    pub path_prefix: String,

    /// Append a trailing slash to page permalinks (never to assets).
    #[serde(default = "defaults::r#false")]
    pub trailing_slash: bool,

    /// Path of the blog index route.
    #[serde(default = "defaults::base::blog")]
    #[educe(Default = defaults::base::blog())]
    pub blog: String,
}
