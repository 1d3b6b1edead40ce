//! Built-in site configurations.
//!
//! The Loom docs sidebar went through four revisions. The fourth is the
//! canonical one; the earlier three are kept so `loomdocs diff` and
//! `loomdocs init --revision` can reproduce and compare them.

use std::fmt;

use crate::nav::{NavGroup, NavItem};
use crate::site::{Plugin, SiteConfig};

const TITLE: &str = "Loom";
const SITE_URL: &str = "https://loom-agents.github.io";
const BASE_PATH: &str = "/docs";
const FAVICON: &str = "/favicon.svg";
const THEME_CSS: &str = "./src/styles/theme.css";
const GITHUB: &str = "https://github.com/loom-agents/agents";
const LLMS_TXT_PLUGIN: &str = "starlight-llms-txt";

/// Historical configuration revision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Revision {
    /// Guides plus a four-page "Class Reference" under `reference/*`.
    First,
    /// Group renamed to "Agents" with pages moved to `agents/*`; adds
    /// favicon, site URL and base path.
    Second,
    /// Adds the llms.txt plugin and an "AI Reference" group.
    Third,
    /// Back to "Class Reference" under `reference/*`, with "MCP" inserted.
    #[default]
    Fourth,
}

impl Revision {
    /// All revisions, oldest first.
    pub const ALL: [Self; 4] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    /// Revision by its 1-based number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            _ => None,
        }
    }

    /// 1-based revision number.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "revision {}", self.number())
    }
}

/// The canonical (fourth) configuration.
#[must_use]
pub fn canonical() -> SiteConfig {
    revision(Revision::Fourth)
}

/// Build the configuration literal for a revision.
#[must_use]
pub fn revision(revision: Revision) -> SiteConfig {
    let base = SiteConfig::new(TITLE)
        .with_stylesheet(THEME_CSS)
        .with_social_link("github", GITHUB);

    match revision {
        Revision::First => base
            .with_group(guides())
            .with_group(reference_group("Class Reference", "reference", false)),
        Revision::Second => located(base)
            .with_group(guides())
            .with_group(reference_group("Agents", "agents", false)),
        Revision::Third => located(base)
            .with_plugin(Plugin::new(LLMS_TXT_PLUGIN))
            .with_group(guides())
            .with_group(reference_group("Agents", "agents", false))
            .with_group(ai_reference()),
        Revision::Fourth => located(base)
            .with_plugin(Plugin::new(LLMS_TXT_PLUGIN))
            .with_group(guides())
            .with_group(reference_group("Class Reference", "reference", true))
            .with_group(ai_reference()),
    }
}

fn located(config: SiteConfig) -> SiteConfig {
    config
        .with_favicon(FAVICON)
        .with_site_url(SITE_URL)
        .with_base_path(BASE_PATH)
}

fn guides() -> NavGroup {
    NavGroup::new(
        "Guides",
        vec![
            NavItem::slug("Introduction", "guides/introduction"),
            NavItem::slug("Examples", "guides/examples"),
        ],
    )
}

fn reference_group(label: &str, prefix: &str, with_mcp: bool) -> NavGroup {
    let mut pages = vec![("Loom", "loom")];
    if with_mcp {
        pages.push(("MCP", "mcp"));
    }
    pages.extend([("Agent", "agent"), ("Runner", "runner"), ("Trace", "trace")]);

    NavGroup::new(
        label,
        pages
            .into_iter()
            .map(|(label, page)| NavItem::slug(label, format!("{prefix}/{page}")))
            .collect(),
    )
}

fn ai_reference() -> NavGroup {
    NavGroup::new(
        "AI Reference",
        ["llms.txt", "llms-full.txt", "llms-small.txt"]
            .into_iter()
            .map(|file| NavItem::link(file, format!("{BASE_PATH}/{file}")))
            .collect(),
    )
}
