//! `loomdocs export` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use loomdocs_config::{SiteConfig, generator};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Export format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Generator configuration as JSON.
    #[default]
    Json,
    /// Normalized `loomdocs.toml`.
    Toml,
}

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ExportArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.config.load()?;
        let rendered = render(&config.site, self.format)?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, rendered)?;
                tracing::info!(
                    path = %path.display(),
                    format = ?self.format,
                    "Exported site configuration"
                );
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.data(&rendered)?,
        }
        Ok(())
    }
}

fn render(site: &SiteConfig, format: Format) -> Result<String, CliError> {
    let mut rendered = match format {
        Format::Json => generator::to_json(site)?,
        Format::Toml => site.to_toml_string()?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loomdocs_config::{CONFIG_FILENAME, presets};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_json_round_trips() {
        let site = presets::canonical();
        let json = render(&site, Format::Json).unwrap();
        assert_eq!(generator::from_json(&json).unwrap(), site);
    }

    #[test]
    fn test_render_toml_round_trips() {
        let site = presets::canonical();
        let toml = render(&site, Format::Toml).unwrap();
        assert_eq!(SiteConfig::from_toml_str(&toml).unwrap(), site);
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &config_path,
            presets::canonical().to_toml_string().unwrap(),
        )
        .unwrap();
        let out_path = temp_dir.path().join("starlight.json");

        let args = ExportArgs {
            config: ConfigArgs {
                config: Some(config_path),
                base_path: Some("/preview".to_owned()),
                ..ConfigArgs::default()
            },
            format: Format::Json,
            output: Some(out_path.clone()),
        };
        args.execute(&Output::new()).unwrap();

        let exported = generator::from_json(&std::fs::read_to_string(out_path).unwrap()).unwrap();
        assert_eq!(exported.base_path.as_deref(), Some("/preview"));
        assert_eq!(exported.navigation, presets::canonical().navigation);
    }
}
