//! Error types for workforge-exec.

use thiserror::Error;

/// Failures from external processes (git, shell, tmux).
#[derive(Debug, Error)]
pub enum ExecError {
    /// The program could not be started at all.
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An interactive command finished with a non-zero exit code.
    /// Signal-terminated processes report code -1.
    #[error("command `{command}` failed with exit code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// An output-capturing query failed; `detail` carries its stderr.
    #[error("`{command}` failed: {detail}")]
    Query { command: String, detail: String },
}
