//! `wf open <name> [--profile <name>]`

use anyhow::{Context, Result};
use clap::Args;

/// Open a registered project by name.
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Project name, literal or composite (`root/branch`).
    pub name: String,

    /// Profile name to use from the project's config.
    #[arg(long, short = 'p')]
    pub profile: Option<String>,
}

impl OpenArgs {
    pub fn run(self) -> Result<()> {
        let orchestrator = super::orchestrator()?;
        let entry = orchestrator
            .find_entry(&self.name)
            .with_context(|| format!("failed to open '{}'", self.name))?;
        orchestrator
            .load_project(
                &entry.record.path,
                entry.is_gwt,
                self.profile.as_deref(),
                Some(&entry.record.name),
            )
            .with_context(|| format!("failed to open '{}'", self.name))
    }
}
