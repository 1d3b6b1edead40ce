//! `loomdocs check` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.config.load()?;
        let site = &config.site;

        output.highlight(&site.title);
        output.info(&format!("Config: {}", config.config_path.display()));
        match site.page_root() {
            Some(root) => output.info(&format!("Page root: {root}")),
            None => output.info("Page root: not set (no site_url in config)"),
        }

        if !site.stylesheets.is_empty() {
            output.info(&format!("Stylesheets: {}", site.stylesheets.join(", ")));
        }
        if site.plugins.is_empty() {
            output.info("Plugins: none");
        } else {
            let names: Vec<&str> = site.plugins.iter().map(|p| p.name.as_str()).collect();
            output.info(&format!("Plugins: {}", names.join(", ")));
        }

        output.info(&format!(
            "Navigation: {} groups, {} items",
            site.navigation.len(),
            site.item_count()
        ));
        for group in &site.navigation {
            output.detail(&format!("  {} ({})", group.label, group.items.len()));
        }

        output.success("Configuration is valid");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loomdocs_config::{CONFIG_FILENAME, presets};

    #[test]
    fn test_check_canonical_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, presets::canonical().to_toml_string().unwrap()).unwrap();

        let args = CheckArgs {
            config: ConfigArgs {
                config: Some(path),
                ..ConfigArgs::default()
            },
        };

        assert!(args.execute(&Output::new()).is_ok());
    }

    #[test]
    fn test_check_invalid_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "title = \"\"").unwrap();

        let args = CheckArgs {
            config: ConfigArgs {
                config: Some(path),
                ..ConfigArgs::default()
            },
        };

        let err = args.execute(&Output::new()).unwrap_err();
        assert!(err.to_string().contains("title"));
    }
}
