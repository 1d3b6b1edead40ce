//! Site configuration record.
//!
//! [`SiteConfig`] is the complete static description of the documentation
//! site: metadata, stylesheets, social links, plugins and the sidebar. It is
//! built once, validated, and handed unchanged to the generator export.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::nav::{NavGroup, NavItem};
use crate::{ConfigError, require_http_url, require_non_empty};

/// Plugin enabled for the build.
///
/// In TOML a plugin is either a bare name or a table with `name` and
/// `options`:
///
/// ```toml
/// plugins = ["starlight-llms-txt", { name = "starlight-blog", options = { authors = 2 } }]
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPlugin")]
pub struct Plugin {
    /// Plugin identifier (package name).
    pub name: String,
    /// Plugin options, passed through untouched.
    pub options: toml::Table,
}

impl Plugin {
    /// Plugin without options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: toml::Table::new(),
        }
    }

    /// Set a single option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlugin {
    Name(String),
    Full(RawPluginTable),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPluginTable {
    name: String,
    #[serde(default)]
    options: toml::Table,
}

impl From<RawPlugin> for Plugin {
    fn from(raw: RawPlugin) -> Self {
        match raw {
            RawPlugin::Name(name) => Self::new(name),
            RawPlugin::Full(RawPluginTable { name, options }) => Self { name, options },
        }
    }
}

/// Documentation site configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Deployed site origin (e.g., `https://loom-agents.github.io`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    /// Path prefix the site is served under (e.g., `/docs`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Favicon asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Custom stylesheets; later entries override earlier ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stylesheets: Vec<String>,
    /// Platform name to profile URL.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social_links: BTreeMap<String, String>,
    /// Enabled plugins, in activation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,
    /// Sidebar groups in display order.
    #[serde(default)]
    pub navigation: Vec<NavGroup>,
}

impl SiteConfig {
    /// Create an empty configuration with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            site_url: None,
            base_path: None,
            favicon: None,
            stylesheets: Vec::new(),
            social_links: BTreeMap::new(),
            plugins: Vec::new(),
            navigation: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = Some(site_url.into());
        self
    }

    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    #[must_use]
    pub fn with_favicon(mut self, favicon: impl Into<String>) -> Self {
        self.favicon = Some(favicon.into());
        self
    }

    #[must_use]
    pub fn with_stylesheet(mut self, path: impl Into<String>) -> Self {
        self.stylesheets.push(path.into());
        self
    }

    #[must_use]
    pub fn with_social_link(mut self, platform: impl Into<String>, url: impl Into<String>) -> Self {
        self.social_links.insert(platform.into(), url.into());
        self
    }

    #[must_use]
    pub fn with_plugin(mut self, plugin: Plugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: NavGroup) -> Self {
        self.navigation.push(group);
        self
    }

    /// Parse a configuration from TOML without validating it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML in the `loomdocs.toml` layout.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Normalized base path: empty for the root, otherwise a leading slash
    /// and no trailing slash (e.g., `/docs`).
    #[must_use]
    pub fn base_prefix(&self) -> String {
        let trimmed = self.base_path.as_deref().unwrap_or("").trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }

    /// Absolute URL of the site root: `site_url` joined with the base path.
    ///
    /// Returns `None` when `site_url` is unset.
    #[must_use]
    pub fn page_root(&self) -> Option<String> {
        let site = self.site_url.as_deref()?.trim_end_matches('/');
        Some(format!("{site}{}", self.base_prefix()))
    }

    /// Absolute URL of an internal page.
    #[must_use]
    pub fn page_url(&self, slug: &str) -> Option<String> {
        let root = self.page_root()?;
        let slug = slug.trim_matches('/');
        if slug.is_empty() {
            Some(format!("{root}/"))
        } else {
            Some(format!("{root}/{slug}/"))
        }
    }

    /// Href the sidebar renders for an item.
    ///
    /// Slugs resolve under the base path with a trailing slash; links are
    /// returned as written.
    #[must_use]
    pub fn href(&self, item: &NavItem) -> String {
        match item {
            NavItem::Slug { slug, .. } => format!("{}/{}/", self.base_prefix(), slug),
            NavItem::Link { link, .. } => link.clone(),
        }
    }

    /// Every internal slug in display order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.navigation
            .iter()
            .flat_map(|group| group.items.iter())
            .filter_map(NavItem::as_slug)
    }

    /// Find the sidebar item for a slug, with the label of its group.
    #[must_use]
    pub fn find_slug(&self, slug: &str) -> Option<(&str, &NavItem)> {
        let slug = slug.trim_matches('/');
        self.navigation.iter().find_map(|group| {
            group
                .items
                .iter()
                .find(|item| item.as_slug() == Some(slug))
                .map(|item| (group.label.as_str(), item))
        })
    }

    /// Total number of sidebar items across groups.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.navigation.iter().map(|group| group.items.len()).sum()
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        self.validate_location()?;
        self.validate_assets()?;
        self.validate_social_links()?;
        self.validate_plugins()?;
        self.validate_navigation()?;
        Ok(())
    }

    fn validate_location(&self) -> Result<(), ConfigError> {
        if let Some(site_url) = &self.site_url {
            require_non_empty(site_url, "site_url")?;
            require_http_url(site_url, "site_url")?;
        }
        if let Some(base_path) = &self.base_path
            && !base_path.starts_with('/')
        {
            return Err(ConfigError::Validation(
                "base_path must start with /".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_assets(&self) -> Result<(), ConfigError> {
        if let Some(favicon) = &self.favicon {
            require_non_empty(favicon, "favicon")?;
        }
        for (i, path) in self.stylesheets.iter().enumerate() {
            require_non_empty(path, &format!("stylesheets[{i}]"))?;
        }
        Ok(())
    }

    fn validate_social_links(&self) -> Result<(), ConfigError> {
        for (platform, url) in &self.social_links {
            let field = format!("social_links.{platform}");
            require_non_empty(platform, "social_links")?;
            require_non_empty(url, &field)?;
            require_http_url(url, &field)?;
        }
        Ok(())
    }

    fn validate_plugins(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, plugin) in self.plugins.iter().enumerate() {
            require_non_empty(&plugin.name, &format!("plugins[{i}].name"))?;
            if !seen.insert(plugin.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "plugins[{i}]: plugin \"{}\" is enabled more than once",
                    plugin.name
                )));
            }
        }
        Ok(())
    }

    fn validate_navigation(&self) -> Result<(), ConfigError> {
        for (g, group) in self.navigation.iter().enumerate() {
            require_non_empty(&group.label, &format!("navigation[{g}].label"))?;

            let mut targets = HashSet::new();
            for (i, item) in group.items.iter().enumerate() {
                let field = format!("navigation[{g}].items[{i}]");
                require_non_empty(item.label(), &format!("{field}.label"))?;
                match item {
                    NavItem::Slug { slug, .. } => {
                        require_non_empty(slug, &format!("{field}.slug"))?;
                        if slug.starts_with('/') {
                            return Err(ConfigError::Validation(format!(
                                "{field}.slug must not start with /"
                            )));
                        }
                    }
                    NavItem::Link { link, .. } => {
                        require_non_empty(link, &format!("{field}.link"))?;
                        if !link.starts_with('/') {
                            require_http_url(link, &format!("{field}.link"))?;
                        }
                    }
                }
                if !targets.insert(item.target()) {
                    return Err(ConfigError::Validation(format!(
                        "{field}: duplicate target \"{}\" in group \"{}\"",
                        item.target(),
                        group.label
                    )));
                }
            }
        }
        Ok(())
    }
}
