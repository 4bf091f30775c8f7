//! `wf load [dir] [--profile <name>]`
//!
//! Meant to be run from inside a worktree leaf: the target is a sibling
//! directory (or the parent itself when no directory is given).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

/// Load a sibling project directory and run its active profile.
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Sibling project directory (defaults to the parent directory).
    pub dir: Option<String>,

    /// Profile name to use from the project's config.
    #[arg(long, short = 'p')]
    pub profile: Option<String>,
}

impl LoadArgs {
    pub fn run(self) -> Result<()> {
        let target = match &self.dir {
            Some(dir) => Path::new("..").join(dir),
            None => PathBuf::from(".."),
        };
        let orchestrator = super::orchestrator()?;
        orchestrator
            .load_project(&target, false, self.profile.as_deref(), None)
            .with_context(|| format!("failed to load '{}'", target.display()))
    }
}
