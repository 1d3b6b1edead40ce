//! `loomdocs url` command implementation.

use clap::Args;
use loomdocs_config::SiteConfig;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the url command.
#[derive(Args)]
pub(crate) struct UrlArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Page slug to resolve (default: the page root).
    slug: Option<String>,
}

impl UrlArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.config.load()?;
        let url = resolve(&config.site, self.slug.as_deref(), output)?;
        output.data(&url)?;
        Ok(())
    }
}

/// Resolve the page root, or a page URL when `slug` is given.
///
/// A slug missing from the sidebar still resolves; the page may exist
/// without a sidebar entry.
fn resolve(site: &SiteConfig, slug: Option<&str>, output: &Output) -> Result<String, CliError> {
    let Some(slug) = slug else {
        return site.page_root().ok_or_else(missing_site_url);
    };

    if site.find_slug(slug).is_none() {
        tracing::warn!(slug, "Slug is not referenced by the sidebar");
        output.warning(&format!("Warning: \"{slug}\" is not in the sidebar"));
    }

    site.page_url(slug).ok_or_else(missing_site_url)
}

fn missing_site_url() -> CliError {
    CliError::Validation("site_url is not set; pass --site-url or set it in config".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loomdocs_config::presets;

    #[test]
    fn test_resolve_page_root() {
        let url = resolve(&presets::canonical(), None, &Output::new()).unwrap();
        assert_eq!(url, "https://loom-agents.github.io/docs");
    }

    #[test]
    fn test_resolve_page() {
        let url = resolve(&presets::canonical(), Some("reference/agent"), &Output::new()).unwrap();
        assert_eq!(url, "https://loom-agents.github.io/docs/reference/agent/");
    }

    #[test]
    fn test_resolve_unknown_slug_still_resolves() {
        let url = resolve(&presets::canonical(), Some("guides/faq"), &Output::new()).unwrap();
        assert_eq!(url, "https://loom-agents.github.io/docs/guides/faq/");
    }

    #[test]
    fn test_resolve_without_site_url() {
        let site = SiteConfig::new("Loom").with_base_path("/docs");
        let err = resolve(&site, None, &Output::new()).unwrap_err();
        assert!(err.to_string().contains("site_url"));
    }
}
