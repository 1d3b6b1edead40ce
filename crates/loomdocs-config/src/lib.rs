//! Site configuration for the Loom documentation site.
//!
//! Parses `loomdocs.toml` with serde, validates it, and exports it in the
//! shape the static-site generator consumes. Config files are auto-discovered
//! in the current directory and its parents.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! A bare `$` (including `$VAR` without braces) is kept literally.
//!
//! Expanded fields:
//! - `site_url`
//! - `base_path`
//! - every `social_links` value

mod expand;
pub mod generator;
pub mod nav;
pub mod presets;
mod site;

use std::path::{Path, PathBuf};

pub use generator::GeneratorConfig;
pub use nav::{NavChange, NavGroup, NavItem};
pub use presets::Revision;
pub use site::{Plugin, SiteConfig};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site URL.
    pub site_url: Option<String>,
    /// Override base path.
    pub base_path: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "loomdocs.toml";

/// Loaded site configuration.
#[derive(Debug)]
pub struct Config {
    /// Validated site configuration.
    pub site: SiteConfig,
    /// Path to the config file it was loaded from.
    pub config_path: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Generator JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`social_links.github`").
        field: String,
        /// Error message (e.g., "${`GITHUB_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
pub(crate) fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `loomdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after environment expansion and before
    /// validation, so overridden values are validated too.
    ///
    /// # Errors
    ///
    /// Returns error if no config file is found, parsing fails, or the
    /// result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => return Self::load_discovered(&std::env::current_dir()?, cli_settings),
        };

        Self::load_from_file(&path, cli_settings)
    }

    /// Load the nearest `loomdocs.toml` at or above `start`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` naming `start/loomdocs.toml` when no
    /// config file exists in `start` or any parent.
    pub fn load_discovered(
        start: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = discover_config(start)
            .ok_or_else(|| ConfigError::NotFound(start.join(CONFIG_FILENAME)))?;
        Self::load_from_file(&path, cli_settings)
    }

    /// Load configuration from a specific file.
    fn load_from_file(
        path: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading site configuration");

        let content = std::fs::read_to_string(path)?;
        let mut site = SiteConfig::from_toml_str(&content)?;

        expand_env_vars(&mut site)?;

        if let Some(settings) = cli_settings {
            apply_cli_settings(&mut site, settings);
        }

        site.validate()?;

        tracing::debug!(
            title = %site.title,
            groups = site.navigation.len(),
            items = site.item_count(),
            plugins = site.plugins.len(),
            "Site configuration loaded"
        );

        Ok(Self {
            site,
            config_path: path.to_path_buf(),
        })
    }
}

/// Search for config file in `start` and its parents.
#[must_use]
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "Discovered config file");
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Apply CLI settings to the configuration.
fn apply_cli_settings(site: &mut SiteConfig, settings: &CliSettings) {
    if let Some(site_url) = &settings.site_url {
        site.site_url = Some(site_url.clone());
    }
    if let Some(base_path) = &settings.base_path {
        site.base_path = Some(base_path.clone());
    }
}

/// Expand environment variable references in configuration strings.
fn expand_env_vars(site: &mut SiteConfig) -> Result<(), ConfigError> {
    if let Some(site_url) = &site.site_url {
        site.site_url = Some(expand::expand_env(site_url, "site_url")?);
    }
    if let Some(base_path) = &site.base_path {
        site.base_path = Some(expand::expand_env(base_path, "base_path")?);
    }
    for (platform, url) in &mut site.social_links {
        *url = expand::expand_env(url, &format!("social_links.{platform}"))?;
    }
    Ok(())
}
