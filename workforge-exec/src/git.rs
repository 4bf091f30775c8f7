//! Git operations: clone, branch queries, worktree management.

use std::path::Path;
use std::process::Command;

use workforge_core::names::worktree_leaf_name;

use crate::error::ExecError;

/// Git operations the lifecycle needs.
pub trait Git {
    /// `git clone <url> [destination]`, run from `cwd`.
    fn clone_repo(&self, cwd: &Path, url: &str, destination: Option<&Path>)
        -> Result<(), ExecError>;

    /// Short name of the branch currently checked out at `repo`.
    /// Errors when `repo` is not a git checkout.
    fn current_branch(&self, repo: &Path) -> Result<String, ExecError>;

    /// Add `branch` as a worktree beside `repo` (folder `../<leaf name>`).
    /// With `create_if_missing`, a branch absent from the local list is
    /// created from `base_branch` first (blank base means `main`).
    fn add_worktree(
        &self,
        repo: &Path,
        branch: &str,
        create_if_missing: bool,
        base_branch: &str,
    ) -> Result<(), ExecError>;

    /// `git worktree remove <leaf>`, run from `cwd`.
    fn remove_worktree(&self, cwd: &Path, leaf: &Path) -> Result<(), ExecError>;

    /// Short names of all local branches at `repo`.
    fn local_branches(&self, repo: &Path) -> Result<Vec<String>, ExecError>;
}

/// Shells out to the `git` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl SystemGit {
    /// Interactive git command: inherited stdio, non-zero exit is an error.
    fn status(&self, cwd: &Path, args: &[&str]) -> Result<(), ExecError> {
        let status = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| ExecError::Spawn {
                program: "git".to_string(),
                source: e,
            })?;
        if status.success() {
            return Ok(());
        }
        Err(ExecError::NonZeroExit {
            command: format!("git {}", args.join(" ")),
            code: status.code().unwrap_or(-1),
        })
    }

    /// Query git command: captured output, stderr carried in the error.
    fn capture(&self, cwd: &Path, args: &[&str]) -> Result<String, ExecError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| ExecError::Spawn {
                program: "git".to_string(),
                source: e,
            })?;
        if !output.status.success() {
            return Err(ExecError::Query {
                command: format!("git {}", args.join(" ")),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Git for SystemGit {
    fn clone_repo(
        &self,
        cwd: &Path,
        url: &str,
        destination: Option<&Path>,
    ) -> Result<(), ExecError> {
        match destination {
            Some(dest) => {
                let dest = dest.to_string_lossy();
                self.status(cwd, &["clone", url, &dest])
            }
            None => self.status(cwd, &["clone", url]),
        }
    }

    fn current_branch(&self, repo: &Path) -> Result<String, ExecError> {
        self.capture(repo, &["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn add_worktree(
        &self,
        repo: &Path,
        branch: &str,
        create_if_missing: bool,
        base_branch: &str,
    ) -> Result<(), ExecError> {
        let cleaned = branch.trim().trim_matches('/');
        let branch_ref = if cleaned.is_empty() { branch } else { cleaned };
        let folder = format!("../{}", worktree_leaf_name(branch_ref));

        if !create_if_missing {
            return self.status(repo, &["worktree", "add", &folder, branch_ref]);
        }

        let exists = self
            .local_branches(repo)?
            .iter()
            .any(|name| name == branch_ref);
        if exists {
            return self.status(repo, &["worktree", "add", &folder, branch_ref]);
        }

        let base = base_branch.trim();
        let base = if base.is_empty() { "main" } else { base };
        self.status(repo, &["worktree", "add", &folder, "-b", branch_ref, base])
    }

    fn remove_worktree(&self, cwd: &Path, leaf: &Path) -> Result<(), ExecError> {
        let leaf = leaf.to_string_lossy();
        self.status(cwd, &["worktree", "remove", &leaf])
    }

    fn local_branches(&self, repo: &Path) -> Result<Vec<String>, ExecError> {
        let raw = self.capture(repo, &["branch", "--list", "--format=%(refname:short)"])?;
        Ok(raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `git init` plus one empty commit, with an inline identity so the test
    /// does not depend on the invoking user's git config.
    fn seed_repo(repo: &Path) {
        std::fs::create_dir(repo).expect("mkdir repo");
        SystemGit.status(repo, &["init", "-q"]).expect("git init");
        SystemGit
            .status(
                repo,
                &[
                    "-c",
                    "user.name=workforge",
                    "-c",
                    "user.email=workforge@localhost",
                    "commit",
                    "--allow-empty",
                    "-q",
                    "-m",
                    "seed",
                ],
            )
            .expect("seed commit");
    }

    #[test]
    fn current_branch_outside_a_checkout_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(SystemGit.current_branch(dir.path()).is_err());
    }

    #[test]
    fn add_worktree_creates_a_missing_branch_from_the_base() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = dir.path().join("repo");
        seed_repo(&repo);
        let base = SystemGit.current_branch(&repo).expect("current branch");

        SystemGit
            .add_worktree(&repo, "feat/x", true, &base)
            .expect("add worktree");

        let leaf = dir.path().join("feat-x");
        assert!(leaf.is_dir(), "leaf checkout beside the repo");
        assert!(leaf.join(".git").is_file(), "worktree marker is a file");
        assert!(SystemGit
            .local_branches(&repo)
            .expect("branches")
            .contains(&"feat/x".to_string()));
    }

    #[test]
    fn add_worktree_without_create_fails_for_an_unknown_branch() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = dir.path().join("repo");
        seed_repo(&repo);

        let err = SystemGit
            .add_worktree(&repo, "ghost", false, "main")
            .unwrap_err();
        assert!(matches!(err, ExecError::NonZeroExit { .. }), "got: {err}");
        assert!(!dir.path().join("ghost").exists());
    }
}
