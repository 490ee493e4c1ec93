//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.
//! The link tables default to the site's current navigation, so an
//! empty `waypost.toml` reproduces the full header and footer.

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "Nolan Braman".into()
    }

    pub fn path_prefix() -> String {
        "".into()
    }

    pub fn blog() -> String {
        "blog".into()
    }
}

// ============================================================================
// [nav] Section Defaults
// ============================================================================

pub mod nav {
    use super::super::LinkConfig;

    pub fn links() -> Vec<LinkConfig> {
        vec![
            LinkConfig {
                text: "Blog".into(),
                route: Some("blog".into()),
                path: None,
                href: None,
            },
            LinkConfig {
                text: "About".into(),
                path: Some("/about".into()),
                route: None,
                href: None,
            },
        ]
    }
}

// ============================================================================
// [footer] Section Defaults
// ============================================================================

pub mod footer {
    use super::super::{LinkConfig, SocialConfig};

    /// Primary footer links are intentionally empty for now.
    pub fn links() -> Vec<LinkConfig> {
        vec![]
    }

    pub fn secondary_links() -> Vec<LinkConfig> {
        vec![
            LinkConfig {
                text: "Home".into(),
                path: Some("/home".into()),
                route: None,
                href: None,
            },
            LinkConfig {
                text: "Blog".into(),
                path: Some("blog".into()),
                route: None,
                href: None,
            },
            LinkConfig {
                text: "About".into(),
                path: Some("/about".into()),
                route: None,
                href: None,
            },
        ]
    }

    pub fn social_links() -> Vec<SocialConfig> {
        vec![
            SocialConfig {
                aria_label: "LinkedIn".into(),
                icon: "tabler:brand-linkedin".into(),
                href: Some("https://www.linkedin.com/in/nolanbraman/".into()),
                path: None,
                asset: None,
            },
            SocialConfig {
                aria_label: "Github".into(),
                icon: "tabler:brand-github".into(),
                href: Some("https://github.com/eathren".into()),
                path: None,
                asset: None,
            },
            SocialConfig {
                aria_label: "RSS".into(),
                icon: "tabler:rss".into(),
                asset: Some("/rss.xml".into()),
                path: None,
                href: None,
            },
        ]
    }

    pub mod copyright {
        pub fn since() -> i32 {
            2018
        }

        pub fn holder() -> Option<String> {
            None
        }
    }
}
