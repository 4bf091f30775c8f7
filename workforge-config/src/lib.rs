//! Per-project configuration: the `.wfconfig.yml` document.
//!
//! A config document maps profile names to [`Template`]s. Loading is an
//! explicit three-stage pipeline — read, YAML parse, typed conversion plus
//! validation — so I/O, parse, and schema failures stay distinguishable.
//!
//! Public API surface:
//! - [`schema`] — [`Template`], [`Hooks`], [`TmuxBlock`], [`HookKind`]
//! - [`resolver`] — config location, loading, profile selection, scaffolding
//! - [`error`] — [`ConfigError`]

pub mod error;
pub mod resolver;
pub mod schema;

pub use error::ConfigError;
pub use resolver::{
    config_path, load, select_profile, write_example, CONFIG_FILE_NAME, DEFAULT_PROFILE,
    EXAMPLE_CONFIG,
};
pub use schema::{Config, HookKind, Hooks, Template, TmuxBlock};
