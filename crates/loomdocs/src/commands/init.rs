//! `loomdocs init` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use loomdocs_config::{CONFIG_FILENAME, Revision, presets};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the init command.
#[derive(Args)]
pub(crate) struct InitArgs {
    /// Configuration revision to write (4 is canonical).
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=4))]
    revision: u8,

    /// Output file.
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    output: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

impl InitArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let revision = Revision::from_number(self.revision).ok_or_else(|| {
            CliError::Validation(format!("unknown revision {}", self.revision))
        })?;

        write_revision(revision, &self.output, self.force)?;

        if revision != Revision::default() {
            output.warning(&format!(
                "Wrote {revision}, which is superseded by {}",
                Revision::default()
            ));
        }
        output.success(&format!("Created {}", self.output.display()));
        Ok(())
    }
}

fn write_revision(revision: Revision, path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::Validation(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let site = presets::revision(revision);
    site.validate()?;
    std::fs::write(path, site.to_toml_string()?)?;
    tracing::info!(path = %path.display(), %revision, "Wrote site configuration");
    Ok(())
}
