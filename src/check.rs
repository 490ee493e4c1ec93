//! `check` command: validate the config and the assembled data.

use crate::config::SiteConfig;
use crate::log;
use crate::navigation::{NavData, current_year};
use crate::permalink::Permalinks;
use anyhow::{Result, ensure};

/// Validate the configuration, assemble the navigation model, and
/// verify the resolved output.
///
/// Structural rules (labels, targets, URL scheme) are checked by
/// `SiteConfig::validate`; this adds checks on the resolved hrefs,
/// which only exist after assembly.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    config.validate()?;
    let nav = NavData::assemble(config, current_year())?;

    for link in nav
        .header
        .links
        .iter()
        .chain(&nav.footer.links)
        .chain(&nav.footer.secondary_links)
    {
        ensure!(
            !link.href.is_empty(),
            "link `{}` resolved to an empty href",
            link.text
        );
    }
    for social in &nav.footer.social_links {
        ensure!(
            !social.href.is_empty(),
            "social link `{}` resolved to an empty href",
            social.aria_label
        );
    }

    if !config.base.title.is_empty() {
        log!("check"; "{}", config.base.title);
    }
    log!(
        "check";
        "{} header, {} footer, {} secondary, {} social links ok",
        nav.header.links.len(),
        nav.footer.links.len(),
        nav.footer.secondary_links.len(),
        nav.footer.social_links.len()
    );

    if config.base.url.is_some() {
        let permalinks = Permalinks::new(config);
        log!("check"; "canonical home: {}", permalinks.canonical("/"));
    }

    Ok(())
}
