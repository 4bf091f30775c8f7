//! Error types for workforge-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from registry and path operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error on load — the document is not well-formed JSON.
    #[error("registry at {path} has invalid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON that is not a valid registry document.
    #[error("registry schema validation failed at {path}: {detail}", detail = .violations.join("; "))]
    Schema {
        path: PathBuf,
        violations: Vec<String>,
    },

    /// JSON serialization error (save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither `$XDG_CONFIG_HOME` nor the OS user config directory resolved.
    #[error("cannot determine user config directory; set $XDG_CONFIG_HOME")]
    ConfigDirNotFound,

    /// A path argument was the empty string.
    #[error("path is empty")]
    EmptyPath,
}
