//! Export to the static-site generator.
//!
//! The generator reads its configuration as JSON: top-level `site` and
//! `base`, with the documentation theme's options nested under `starlight`
//! using camelCase keys (`customCss`, `social`, `sidebar`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConfigError;
use crate::nav::NavGroup;
use crate::site::{Plugin, SiteConfig};

/// Generator-facing configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Deployed site origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Base path the site is served under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Documentation theme options.
    pub starlight: ThemeOptions,
}

/// Options passed to the documentation theme integration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default)]
    pub custom_css: Vec<String>,
    #[serde(default)]
    pub social: BTreeMap<String, String>,
    #[serde(default)]
    pub plugins: Vec<Plugin>,
    #[serde(default)]
    pub sidebar: Vec<NavGroup>,
}

impl From<&SiteConfig> for GeneratorConfig {
    fn from(config: &SiteConfig) -> Self {
        Self {
            site: config.site_url.clone(),
            base: config.base_path.clone(),
            starlight: ThemeOptions {
                title: config.title.clone(),
                favicon: config.favicon.clone(),
                custom_css: config.stylesheets.clone(),
                social: config.social_links.clone(),
                plugins: config.plugins.clone(),
                sidebar: config.navigation.clone(),
            },
        }
    }
}

impl From<GeneratorConfig> for SiteConfig {
    fn from(generator: GeneratorConfig) -> Self {
        let theme = generator.starlight;
        Self {
            title: theme.title,
            site_url: generator.site,
            base_path: generator.base,
            favicon: theme.favicon,
            stylesheets: theme.custom_css,
            social_links: theme.social,
            plugins: theme.plugins,
            navigation: theme.sidebar,
        }
    }
}

/// Render a configuration as pretty-printed generator JSON.
pub fn to_json(config: &SiteConfig) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(&GeneratorConfig::from(config))?)
}

/// Read a configuration back from generator JSON.
///
/// The result is not validated.
pub fn from_json(json: &str) -> Result<SiteConfig, ConfigError> {
    let generator: GeneratorConfig = serde_json::from_str(json)?;
    Ok(generator.into())
}
