//! Canonical URL construction for site-relative links.
//!
//! All site-relative paths go through here so that the path prefix and
//! trailing-slash policy are applied in exactly one place.

use crate::config::SiteConfig;

/// Permalink builder bound to a site configuration.
///
/// # URL Shapes
///
/// | Call | Input | Output (prefix="", no trailing slash) |
/// |------|-------|---------------------------------------|
/// | `permalink` | `/about` | `/about` |
/// | `permalink` | `blog` | `/blog` |
/// | `permalink` | `https://example.com` | `https://example.com` (unchanged) |
/// | `blog_permalink` | - | `/blog` |
/// | `asset` | `/rss.xml` | `/rss.xml` |
pub struct Permalinks<'a> {
    config: &'a SiteConfig,
}

impl<'a> Permalinks<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Canonical site-relative URL for an internal page path.
    ///
    /// Applies the configured path prefix and trailing-slash policy.
    /// URLs that carry a scheme are returned unchanged.
    pub fn permalink(&self, path: &str) -> String {
        if is_external_link(path) {
            return path.to_owned();
        }

        let resolved = create_path(&[&self.config.base.path_prefix, path]);
        if self.config.base.trailing_slash && resolved != "/" {
            format!("{resolved}/")
        } else {
            resolved
        }
    }

    /// Canonical URL of the blog index route.
    pub fn blog_permalink(&self) -> String {
        self.permalink(&self.config.base.blog)
    }

    /// Resolved URL for a static asset.
    ///
    /// Assets get the path prefix but never a trailing slash.
    pub fn asset(&self, path: &str) -> String {
        if is_external_link(path) {
            return path.to_owned();
        }
        create_path(&[&self.config.base.path_prefix, path])
    }

    /// Absolute URL for a page, joined with `[base].url` when set.
    ///
    /// Without a base URL the site-relative permalink is returned.
    pub fn canonical(&self, path: &str) -> String {
        let permalink = self.permalink(path);
        match &self.config.base.url {
            Some(url) => format!("{}{}", url.trim_end_matches('/'), permalink),
            None => permalink,
        }
    }
}

// ============================================================================
// Path Helpers
// ============================================================================

/// Strip leading and trailing slashes.
pub fn trim_slash(s: &str) -> &str {
    s.trim_matches('/')
}

/// Join path segments into a single absolute path.
///
/// Empty segments vanish, so `create_path(&["", "/about"])` is `/about`
/// and `create_path(&["", ""])` is `/`.
pub fn create_path(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .map(|part| trim_slash(part))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}

/// Check if a link is external (has a scheme like http:, mailto:, etc.)
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
