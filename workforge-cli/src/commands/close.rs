//! `wf close <name> [--profile <name>]`

use std::env;

use anyhow::{Context, Result};
use clap::Args;

/// Close a project's tmux session.
#[derive(Args, Debug)]
pub struct CloseArgs {
    /// Project name, literal or composite (`root/branch`).
    pub name: String,

    /// Profile name to use from the project's config.
    #[arg(long, short = 'p')]
    pub profile: Option<String>,
}

impl CloseArgs {
    pub fn run(self) -> Result<()> {
        let cwd = env::current_dir().context("cannot determine current directory")?;
        let orchestrator = super::orchestrator()?;
        orchestrator
            .close_project(&cwd, &self.name, self.profile.as_deref())
            .with_context(|| format!("failed to close '{}'", self.name))
    }
}
