//! Error types for workforge-config.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from config loading and profile selection.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed YAML.
    #[error("invalid YAML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Well-formed YAML that is not a valid config document.
    #[error("invalid config schema in {path}: {detail}", detail = .violations.join("; "))]
    Schema {
        path: PathBuf,
        violations: Vec<String>,
    },

    /// An explicitly requested profile does not exist in the document.
    #[error("profile \"{name}\" not found")]
    ProfileNotFound { name: String },

    /// The document defines no profiles at all.
    #[error("no profiles defined in config")]
    NoProfiles,

    /// More than one profile, none requested, none named `default`.
    #[error("multiple profiles defined; specify --profile")]
    AmbiguousProfile,

    /// The config file could not be written (scaffolding).
    #[error("failed writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
