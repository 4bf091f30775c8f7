//! Domain types for the Workforge registry.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A registered project checkout.
///
/// The worktree flag keeps its historical on-disk name `git_work_tree` so
/// registries written by earlier builds keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    /// Absolute path to the checkout (or worktree root) on disk.
    pub path: PathBuf,
    #[serde(rename = "git_work_tree", default)]
    pub worktree_root: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The whole registry document: project name → record.
///
/// Name uniqueness is enforced by the mapping key itself.
pub type Projects = BTreeMap<String, ProjectRecord>;

/// A resolved view of a project after worktree expansion.
///
/// Never persisted; recomputed on every resolution call. For an expanded
/// branch checkout the record's name is the composite `root/branch` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualProjectEntry {
    pub record: ProjectRecord,
    pub is_gwt: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_roundtrips_through_json() {
        let record = ProjectRecord {
            name: "api".to_string(),
            path: PathBuf::from("/code/api"),
            worktree_root: true,
            tags: vec!["work".to_string()],
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("git_work_tree"), "wire field name must be kept");
        let back: ProjectRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, back);
    }

    #[test]
    fn worktree_flag_and_tags_default_when_absent() {
        let record: ProjectRecord =
            serde_json::from_str(r#"{"name":"api","path":"/code/api"}"#).expect("deserialize");
        assert!(!record.worktree_root);
        assert!(record.tags.is_empty());
    }
}
