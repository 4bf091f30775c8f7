//! Error types for workforge-engine.

use std::path::PathBuf;

use thiserror::Error;
use workforge_config::ConfigError;
use workforge_core::RegistryError;
use workforge_exec::ExecError;

/// All errors that can arise from resolution and lifecycle operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("project name cannot be empty")]
    EmptyProjectName,

    #[error("project \"{name}\" not found")]
    ProjectNotFound { name: String },

    #[error("worktree \"{name}\" not found")]
    WorktreeNotFound { name: String },

    #[error("no tmux session found for \"{name}\"")]
    SessionNotFound { name: String },

    /// A worktree root registered in the registry could not be listed.
    #[error("error reading worktree root {path}: {source}")]
    WorktreeScan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
