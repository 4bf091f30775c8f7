//! Persistent project registry — a single JSON document.
//!
//! # Storage layout
//!
//! ```text
//! $XDG_CONFIG_HOME/workforge/     (or <os config dir>/workforge/)
//!   workforge.json                (project name → record, created on first touch)
//! ```
//!
//! The whole document is read, mutated in memory, and rewritten on every
//! save (temp-file-then-rename in the same directory). No inter-process
//! locking: concurrent invocations are last-writer-wins.
//!
//! # API pattern
//!
//! Every function has two forms:
//! - `fn_at(path: &Path)` — explicit registry file; used in tests with `TempDir`
//! - `fn()` — derives the path from [`paths::registry_path`], delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::RegistryError;
use crate::paths::registry_path;
use crate::types::Projects;

/// Create the registry file (and its parent directory) on first touch.
fn ensure_at(path: &Path) -> Result<(), RegistryError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs::write(path, "{}")?;
    }
    Ok(())
}

/// Load the whole registry document.
///
/// A missing file is created empty first; an empty or whitespace-only file
/// is an empty mapping. Malformed JSON is [`RegistryError::Parse`]; a
/// well-formed document that is not a valid name → record mapping is
/// [`RegistryError::Schema`] — fatal, never partially recovered.
pub fn load_at(path: &Path) -> Result<Projects, RegistryError> {
    ensure_at(path)?;
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(Projects::new());
    }

    let value: Value = serde_json::from_str(&raw).map_err(|e| RegistryError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    let projects: Projects = serde_json::from_value(value).map_err(|e| RegistryError::Schema {
        path: path.to_path_buf(),
        violations: vec![e.to_string()],
    })?;
    validate(&projects).map_err(|violations| RegistryError::Schema {
        path: path.to_path_buf(),
        violations,
    })?;
    Ok(projects)
}

fn validate(projects: &Projects) -> Result<(), Vec<String>> {
    let mut violations = Vec::new();
    for (key, record) in projects {
        if record.name.trim().is_empty() {
            violations.push(format!("entry \"{key}\": name must not be empty"));
        }
        if record.path.as_os_str().is_empty() {
            violations.push(format!("entry \"{key}\": path must not be empty"));
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Atomically save the whole registry document.
///
/// Write flow: serialize → `.tmp` sibling → `rename`. The `.tmp` file lives
/// in the same directory as the target (same filesystem — no EXDEV).
pub fn save_at(path: &Path, projects: &Projects) -> Result<(), RegistryError> {
    ensure_at(path)?;
    let json = serde_json::to_string_pretty(projects)?;
    let tmp = match path.file_name() {
        Some(name) => path.with_file_name(format!("{}.tmp", name.to_string_lossy())),
        None => path.with_extension("tmp"),
    };
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Projects, RegistryError> {
    load_at(&registry_path()?)
}

/// `save_at` convenience wrapper.
pub fn save(projects: &Projects) -> Result<(), RegistryError> {
    save_at(&registry_path()?, projects)
}
