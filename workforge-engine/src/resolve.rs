//! Worktree-aware project resolution.
//!
//! The registry stores one record per registered project. A record flagged
//! as a worktree root stands for several branch checkouts: resolution
//! expands it into one virtual entry per branch directory, named
//! `root/branch`. The expansion is recomputed on every call and never
//! persisted.

use std::fs;
use std::path::{Path, PathBuf};

use workforge_core::paths::normalize_path;
use workforge_core::registry;
use workforge_core::types::{ProjectRecord, Projects, VirtualProjectEntry};

use crate::error::EngineError;

/// A worktree leaf keeps `.git` as a file pointing at the shared repository;
/// a full checkout has a `.git` directory.
pub fn is_worktree_leaf(path: &Path) -> bool {
    fs::metadata(path.join(".git"))
        .map(|meta| !meta.is_dir())
        .unwrap_or(false)
}

/// The effective project mapping: every worktree root replaced by its
/// per-branch virtual entries.
///
/// A root whose own directory is already a worktree leaf is passed through
/// unexpanded. An unreadable root directory is fatal for the whole call.
pub fn list_expanded_at(registry_path: &Path) -> Result<Projects, EngineError> {
    let base = registry::load_at(registry_path)?;
    let mut out = Projects::new();

    for (name, record) in base {
        if !record.worktree_root || is_worktree_leaf(&record.path) {
            out.insert(name.clone(), ProjectRecord { name, ..record });
            continue;
        }

        let entries = fs::read_dir(&record.path).map_err(|e| EngineError::WorktreeScan {
            path: record.path.clone(),
            source: e,
        })?;
        for entry in entries.filter_map(|entry| entry.ok()) {
            if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            let sub = entry.file_name().to_string_lossy().into_owned();
            let sub_name = format!("{name}/{sub}");
            out.insert(
                sub_name.clone(),
                ProjectRecord {
                    name: sub_name,
                    path: record.path.join(&sub),
                    worktree_root: false,
                    tags: vec![],
                },
            );
        }
    }
    Ok(out)
}

fn entry_for(record: ProjectRecord) -> VirtualProjectEntry {
    let is_gwt = record.name.contains('/') || is_worktree_leaf(&record.path);
    VirtualProjectEntry { record, is_gwt }
}

/// All effective projects, sorted by name.
pub fn sorted_entries_at(registry_path: &Path) -> Result<Vec<VirtualProjectEntry>, EngineError> {
    let expanded = list_expanded_at(registry_path)?;
    Ok(expanded.into_values().map(entry_for).collect())
}

/// Resolve one project by literal or composite `root/branch` name.
pub fn find_entry_at(
    registry_path: &Path,
    name: &str,
) -> Result<VirtualProjectEntry, EngineError> {
    if name.trim().is_empty() {
        return Err(EngineError::EmptyProjectName);
    }

    let mut expanded = list_expanded_at(registry_path)?;
    match expanded.remove(name) {
        Some(record) => Ok(entry_for(record)),
        None => Err(EngineError::ProjectNotFound {
            name: name.to_string(),
        }),
    }
}

/// Locate the leaf directory for a worktree name beside `cwd`.
///
/// Probes `../<name>` and then `../<name with / replaced by ->`; the first
/// existing path wins.
pub fn resolve_worktree_leaf(cwd: &Path, name: &str) -> Result<PathBuf, EngineError> {
    let literal = cwd.join("..").join(name);
    if literal.exists() {
        return Ok(literal);
    }
    let hyphenated = cwd.join("..").join(name.replace('/', "-"));
    if hyphenated.exists() {
        return Ok(hyphenated);
    }
    Err(EngineError::WorktreeNotFound {
        name: name.to_string(),
    })
}

/// Register (or re-register) a project, preserving any existing tags.
///
/// A registry that fails to load starts over empty rather than blocking the
/// registration.
pub fn add_project_at(
    registry_path: &Path,
    name: &str,
    worktree_root: bool,
    project_path: Option<&Path>,
) -> Result<(), EngineError> {
    let resolved = match project_path {
        Some(path) => normalize_path(path)?,
        None => normalize_path(&std::env::current_dir()?)?,
    };

    let mut projects = registry::load_at(registry_path).unwrap_or_default();
    let tags = projects
        .get(name)
        .map(|existing| existing.tags.clone())
        .unwrap_or_default();
    projects.insert(
        name.to_string(),
        ProjectRecord {
            name: name.to_string(),
            path: resolved,
            worktree_root,
            tags,
        },
    );
    registry::save_at(registry_path, &projects)?;
    Ok(())
}
