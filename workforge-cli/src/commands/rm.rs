//! `wf rm <name>`

use std::env;

use anyhow::{Context, Result};
use clap::Args;

/// Remove a worktree and run its delete hooks.
#[derive(Args, Debug)]
pub struct RmArgs {
    /// Worktree name; slashes are matched against hyphenated leaf names too.
    pub name: String,
}

impl RmArgs {
    pub fn run(self) -> Result<()> {
        let cwd = env::current_dir().context("cannot determine current directory")?;
        let orchestrator = super::orchestrator()?;
        let removed = orchestrator
            .remove_worktree(&cwd, &self.name)
            .with_context(|| format!("failed to remove worktree '{}'", self.name))?;
        println!("✓ removed worktree {}", removed.display());
        Ok(())
    }
}
