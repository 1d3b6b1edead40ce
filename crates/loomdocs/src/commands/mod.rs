//! CLI command implementations.

mod check;
mod diff;
mod export;
mod init;
mod url;

use std::path::PathBuf;

use clap::Args;
use loomdocs_config::{CliSettings, Config, ConfigError};

pub(crate) use check::CheckArgs;
pub(crate) use diff::DiffArgs;
pub(crate) use export::ExportArgs;
pub(crate) use init::InitArgs;
pub(crate) use url::UrlArgs;

/// Config file selection and overrides shared by commands that load a config.
#[derive(Args, Default)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover loomdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Deployed site origin (overrides config).
    #[arg(long, env = "LOOMDOCS_SITE_URL")]
    site_url: Option<String>,

    /// Base path the site is served under (overrides config).
    #[arg(long, env = "LOOMDOCS_BASE_PATH")]
    base_path: Option<String>,
}

impl ConfigArgs {
    /// Load and validate the configuration with CLI overrides applied.
    pub(crate) fn load(self) -> Result<Config, ConfigError> {
        let cli_settings = CliSettings {
            site_url: self.site_url,
            base_path: self.base_path,
        };
        Config::load(self.config.as_deref(), Some(&cli_settings))
    }
}
