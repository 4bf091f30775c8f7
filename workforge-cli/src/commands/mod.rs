//! Subcommand implementations.

pub mod add;
pub mod close;
pub mod init;
pub mod list;
pub mod load;
pub mod open;
pub mod rm;

use anyhow::{Context, Result};
use workforge_engine::Orchestrator;
use workforge_exec::{Logger, SystemGit, SystemShell, Tmux};

pub(crate) type SystemOrchestrator = Orchestrator<SystemGit, SystemShell, Tmux>;

/// Orchestrator wired to the real registry and the system git/shell/tmux.
pub(crate) fn orchestrator() -> Result<SystemOrchestrator> {
    let registry_path = workforge_core::paths::registry_path()
        .context("cannot locate the workforge registry")?;
    Ok(Orchestrator::new(
        registry_path,
        SystemGit,
        SystemShell,
        Tmux,
        Logger::default(),
    ))
}
