//! `wf init [url] [--gwt]`

use std::env;

use anyhow::{Context, Result};
use clap::Args;

/// Register the current directory, or clone a repository, as a project.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Repository URL to clone; omit to register the current directory.
    pub url: Option<String>,

    /// Register as a git worktree root.
    #[arg(long = "gwt", short = 't')]
    pub gwt: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let cwd = env::current_dir().context("cannot determine current directory")?;
        let orchestrator = super::orchestrator()?;
        orchestrator
            .init_project(&cwd, self.url.as_deref(), self.gwt)
            .context("init failed")
    }
}
