//! Name derivation for repositories and worktree leaf directories.

/// Project name for a repository URL: the last non-empty path segment minus
/// a trailing `.git`. Handles both URL (`https://host/org/repo.git`) and
/// scp-like (`git@host:org/repo.git`) forms.
pub fn repo_url_to_name(repo_url: &str) -> String {
    let trimmed = repo_url.trim();
    let base = trimmed
        .split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .unwrap_or(trimmed);
    base.strip_suffix(".git").unwrap_or(base).to_string()
}

/// Directory name for a branch checkout under a worktree root.
///
/// Path separators and runs of whitespace collapse to single hyphens; a name
/// that sanitizes to nothing becomes the literal `worktree`.
pub fn worktree_leaf_name(name: &str) -> String {
    let cleaned = name.trim().trim_matches('/');
    let sanitized = cleaned
        .replace('/', "-")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if sanitized.is_empty() {
        "worktree".to_string()
    } else {
        sanitized
    }
}
