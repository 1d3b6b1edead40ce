//! `loomdocs diff` command implementation.

use std::path::PathBuf;

use clap::Args;
use loomdocs_config::{Config, NavChange, nav};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the diff command.
#[derive(Args)]
pub(crate) struct DiffArgs {
    /// Older configuration file.
    old: PathBuf,

    /// Newer configuration file.
    new: PathBuf,
}

impl DiffArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let old = Config::load(Some(&self.old), None)?;
        let new = Config::load(Some(&self.new), None)?;

        let changes = nav::diff(&old.site.navigation, &new.site.navigation);
        if changes.is_empty() {
            output.success("Sidebars are identical");
            return Ok(());
        }

        output.highlight(&format!(
            "{} -> {}",
            self.old.display(),
            self.new.display()
        ));
        for change in &changes {
            report(change, output);
        }

        let renames = changes
            .iter()
            .filter(|c| matches!(c, NavChange::GroupRenamed { .. }))
            .count();
        if renames > 0 {
            tracing::warn!(renames, "Sidebar groups were renamed; check links into them");
        }
        output.info(&format!("{} change(s)", changes.len()));
        Ok(())
    }
}

fn report(change: &NavChange, output: &Output) {
    let line = change.to_string();
    match change {
        NavChange::GroupAdded { .. } | NavChange::ItemAdded { .. } => output.success(&line),
        NavChange::GroupRemoved { .. } | NavChange::ItemRemoved { .. } => output.error(&line),
        NavChange::GroupRenamed { .. }
        | NavChange::GroupMoved { .. }
        | NavChange::ItemRelabelled { .. }
        | NavChange::ItemMoved { .. } => output.warning(&line),
    }
}
