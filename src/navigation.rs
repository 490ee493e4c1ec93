//! Header and footer navigation data.
//!
//! `NavData::assemble` turns the configured link tables into the resolved
//! model the rendering layer consumes: every target runs through the
//! permalink builder once, and the foot note gets its end year. The result
//! is immutable; re-assembling with the same config and year yields
//! identical output.

use crate::config::{LinkConfig, LinkTarget, SiteConfig, SocialConfig};
use crate::permalink::Permalinks;
use anyhow::{Result, bail};
use chrono::{Datelike, Local};
use serde::Serialize;

// ============================================================================
// Resolved Model
// ============================================================================

/// A resolved navigation link.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

/// A resolved social profile link.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub aria_label: String,
    pub icon: String,
    pub href: String,
}

/// Header navigation data.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeaderData {
    pub links: Vec<NavLink>,
}

/// Footer navigation data plus the generated copyright line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    pub links: Vec<NavLink>,
    pub secondary_links: Vec<NavLink>,
    pub social_links: Vec<SocialLink>,
    pub foot_note: String,
}

/// The complete navigation model of the site.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavData {
    pub header: HeaderData,
    pub footer: FooterData,
}

impl NavData {
    /// Assemble the navigation model from the configured tables.
    ///
    /// `year` becomes the end year of the copyright range; pass
    /// [`current_year`] outside of tests.
    pub fn assemble(config: &SiteConfig, year: i32) -> Result<Self> {
        let permalinks = Permalinks::new(config);

        Ok(Self {
            header: HeaderData {
                links: resolve_links(&config.nav.links, &permalinks)?,
            },
            footer: FooterData {
                links: resolve_links(&config.footer.links, &permalinks)?,
                secondary_links: resolve_links(&config.footer.secondary_links, &permalinks)?,
                social_links: config
                    .footer
                    .social_links
                    .iter()
                    .map(|social| resolve_social(social, &permalinks))
                    .collect::<Result<_>>()?,
                foot_note: foot_note(config, year),
            },
        })
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn resolve_links(links: &[LinkConfig], permalinks: &Permalinks) -> Result<Vec<NavLink>> {
    links
        .iter()
        .map(|link| {
            Ok(NavLink {
                text: link.text.clone(),
                href: resolve_target(link.target()?, permalinks)?,
            })
        })
        .collect()
}

fn resolve_social(social: &SocialConfig, permalinks: &Permalinks) -> Result<SocialLink> {
    Ok(SocialLink {
        aria_label: social.aria_label.clone(),
        icon: social.icon.clone(),
        href: resolve_target(social.target()?, permalinks)?,
    })
}

fn resolve_target(target: LinkTarget<'_>, permalinks: &Permalinks) -> Result<String> {
    match target {
        LinkTarget::Path(path) => Ok(permalinks.permalink(path)),
        LinkTarget::Route(route) if route == "blog" => Ok(permalinks.blog_permalink()),
        LinkTarget::Route(route) => bail!("unknown named route `{route}`"),
        LinkTarget::Asset(path) => Ok(permalinks.asset(path)),
        LinkTarget::Href(href) => Ok(href.to_owned()),
    }
}

// ============================================================================
// Foot Note
// ============================================================================

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Copyright line with a dynamic end year.
///
/// The double space after `-` matches the site's historical output.
fn foot_note(config: &SiteConfig, year: i32) -> String {
    let copyright = &config.footer.copyright;
    let holder = copyright.holder.as_deref().unwrap_or(&config.base.author);
    format!(
        "CopyRight © {} -  {year} {holder}. All Rights Reserved.",
        copyright.since
    )
}
