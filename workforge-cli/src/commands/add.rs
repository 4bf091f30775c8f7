//! `wf add <first> [branch] [--create-branch] [--base <branch>]`
//!
//! One argument adds a worktree for that branch beside the current checkout.
//! Two arguments name a project (or a path) and the branch to add there.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use workforge_exec::Git;

/// Add a git worktree for a branch.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Branch name, or project/worktree root when a branch is also given.
    pub first: String,

    /// Branch to add when the first argument names a project.
    pub branch: Option<String>,

    /// Create the branch from the base branch when it does not exist.
    #[arg(long = "create-branch", short = 'c')]
    pub create_branch: bool,

    /// Base branch for newly created branches.
    #[arg(long, default_value = "main")]
    pub base: String,
}

impl AddArgs {
    pub fn run(self) -> Result<()> {
        let orchestrator = super::orchestrator()?;

        let (repo, target_branch) = match &self.branch {
            Some(branch) => {
                // The first argument may name a registered project; anything
                // unknown is treated as a plain path.
                let repo = match orchestrator.find_entry(&self.first) {
                    Ok(entry) => entry.record.path,
                    Err(_) => PathBuf::from(&self.first),
                };
                (repo, branch.clone())
            }
            None => (PathBuf::from("."), self.first.clone()),
        };

        orchestrator
            .git()
            .add_worktree(&repo, &target_branch, self.create_branch, &self.base)
            .with_context(|| format!("failed to add worktree for '{target_branch}'"))
    }
}
