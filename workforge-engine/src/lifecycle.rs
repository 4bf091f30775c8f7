//! Lifecycle orchestration: init, load, close, remove-worktree.
//!
//! Each operation is one atomic top-level call: the first failing step
//! aborts the rest, and nothing is retried or resumed. The working
//! directory for an operation is threaded through explicitly — config
//! loading, hook execution, and branch lookup all receive it — rather than
//! mutating process state. Likewise the logger: `load` builds a
//! per-operation context from the active profile's `log_level` instead of
//! touching a global.

use std::fs;
use std::path::{Path, PathBuf};

use workforge_config::{self as config, HookKind, Template};
use workforge_core::names::{repo_url_to_name, worktree_leaf_name};
use workforge_core::paths::normalize_path;
use workforge_core::types::VirtualProjectEntry;
use workforge_exec::git::Git;
use workforge_exec::logger::{LogLevel, Logger};
use workforge_exec::shell::Shell;
use workforge_exec::tmux::Multiplexer;

use crate::error::EngineError;
use crate::resolve;

/// Sequences hooks, sessions, and the external git/shell/tmux collaborators
/// around a project's lifecycle.
pub struct Orchestrator<G, S, M> {
    registry_path: PathBuf,
    git: G,
    shell: S,
    mux: M,
    logger: Logger,
}

impl<G: Git, S: Shell, M: Multiplexer> Orchestrator<G, S, M> {
    pub fn new(registry_path: PathBuf, git: G, shell: S, mux: M, logger: Logger) -> Self {
        Self {
            registry_path,
            git,
            shell,
            mux,
            logger,
        }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    /// Resolve one project by literal or composite `root/branch` name.
    pub fn find_entry(&self, name: &str) -> Result<VirtualProjectEntry, EngineError> {
        resolve::find_entry_at(&self.registry_path, name)
    }

    /// All effective projects, sorted by name.
    pub fn entries(&self) -> Result<Vec<VirtualProjectEntry>, EngineError> {
        resolve::sorted_entries_at(&self.registry_path)
    }

    /// Register a project: the current directory, or a fresh clone of `url`.
    pub fn init_project(
        &self,
        cwd: &Path,
        url: Option<&str>,
        worktree_root: bool,
    ) -> Result<(), EngineError> {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => self.init_from_url(cwd, url, worktree_root),
            None => self.init_local(cwd, worktree_root),
        }
    }

    fn init_local(&self, cwd: &Path, worktree_root: bool) -> Result<(), EngineError> {
        let cwd = normalize_path(cwd)?;
        let name = dir_basename(&cwd);
        config::write_example(&cwd)?;
        resolve::add_project_at(&self.registry_path, &name, worktree_root, Some(&cwd))
    }

    fn init_from_url(&self, cwd: &Path, url: &str, worktree_root: bool) -> Result<(), EngineError> {
        let repo_name = repo_url_to_name(url);
        let mut clone_dir = repo_name.clone();

        if fs::read_dir(cwd)?.next().is_some() {
            if worktree_root {
                self.logger.warn("directory not empty, aborting");
                return Ok(());
            }
            if cwd.join(config::CONFIG_FILE_NAME).exists() {
                self.logger.warn("this is already a Workforge directory");
                return Ok(());
            }
        }

        self.git.clone_repo(cwd, url, Some(Path::new(&clone_dir)))?;

        let project_path = if worktree_root {
            let branch = self.git.current_branch(&cwd.join(&clone_dir))?;
            let leaf = worktree_leaf_name(&branch);
            if leaf != clone_dir {
                fs::rename(cwd.join(&clone_dir), cwd.join(&leaf))?;
                clone_dir = leaf;
            }

            // Branch leaves share the root's config; promote the clone's
            // copy when it ships one, scaffold otherwise.
            let shipped = cwd.join(&clone_dir).join(config::CONFIG_FILE_NAME);
            if shipped.exists() {
                fs::copy(&shipped, cwd.join(config::CONFIG_FILE_NAME))?;
            } else {
                config::write_example(cwd)?;
            }
            cwd.to_path_buf()
        } else {
            let clone_path = cwd.join(&clone_dir);
            config::write_example(&clone_path)?;
            clone_path
        };

        resolve::add_project_at(
            &self.registry_path,
            &repo_name,
            worktree_root,
            Some(&project_path),
        )
    }

    /// Load a project: run its hooks and either a foreground command or a
    /// tmux session, as the active profile dictates.
    pub fn load_project(
        &self,
        project_path: &Path,
        is_gwt: bool,
        profile: Option<&str>,
        project_name: Option<&str>,
    ) -> Result<(), EngineError> {
        let root = normalize_path(project_path)?;

        let cfg = config::load(&root, is_gwt)?;
        let profile_name = config::select_profile(&cfg, profile)?;
        let template = template_of(&cfg, &profile_name)?;

        let log = Logger::new(LogLevel::parse(template.log_level.as_deref()));
        let name = display_name(&root, project_name);

        self.run_hooks(&log, HookKind::OnLoad, template, &root)?;

        let Some(tmux) = &template.tmux else {
            self.run_hooks(&log, HookKind::OnShellRunIn, template, &root)?;
            if let Some(foreground) = template
                .foreground
                .as_deref()
                .map(str::trim)
                .filter(|command| !command.is_empty())
            {
                self.shell.run(foreground, &root)?;
            }
            return self.run_hooks(&log, HookKind::OnShellRunOut, template, &root);
        };

        let session_base = match tmux.session_name.as_deref().filter(|s| !s.is_empty()) {
            Some(explicit) => explicit.to_string(),
            None if is_gwt => parent_basename(&root),
            None => dir_basename(&root),
        };
        let session_name = match self.git.current_branch(&root) {
            Ok(branch) if !branch.is_empty() => format!("{session_base}/{branch}"),
            Ok(_) => session_base,
            Err(_) => {
                log.debug(&format!("unable to resolve current branch for {name}"));
                session_base
            }
        };

        let windows = tmux
            .windows
            .clone()
            .unwrap_or_else(|| vec!["$SHELL".to_string()]);

        self.run_hooks(&log, HookKind::OnShellRunIn, template, &root)?;
        self.mux.new_session(&session_name, tmux.attach, &windows)?;
        self.run_hooks(&log, HookKind::OnShellRunOut, template, &root)
    }

    /// Close a project's live session, running its `on_close` hooks first.
    ///
    /// The session is looked up under the raw project name, before any
    /// config is touched.
    pub fn close_project(
        &self,
        cwd: &Path,
        name: &str,
        profile: Option<&str>,
    ) -> Result<(), EngineError> {
        let entry = self.find_entry(name)?;
        let session_name = name;
        if !self.mux.has_session(session_name) {
            return Err(EngineError::SessionNotFound {
                name: name.to_string(),
            });
        }

        let cfg = config::load(&entry.record.path, entry.is_gwt)?;
        let profile_name = config::select_profile(&cfg, profile)?;
        let template = template_of(&cfg, &profile_name)?;

        self.run_hooks(&self.logger, HookKind::OnClose, template, cwd)?;
        self.mux.kill_session(session_name)?;
        self.logger.ok(&format!("closed project {name}"));
        Ok(())
    }

    /// Remove a worktree leaf beside `cwd`, running its `on_delete` hooks
    /// first. Returns the removed path.
    pub fn remove_worktree(&self, cwd: &Path, name: &str) -> Result<PathBuf, EngineError> {
        let leaf = resolve::resolve_worktree_leaf(cwd, name)?;

        let cfg = config::load(&leaf, true)?;
        let profile_name = config::select_profile(&cfg, None)?;
        let template = template_of(&cfg, &profile_name)?;

        self.run_hooks(&self.logger, HookKind::OnDelete, template, cwd)?;
        self.git.remove_worktree(cwd, &leaf)?;
        Ok(leaf)
    }

    fn run_hooks(
        &self,
        log: &Logger,
        kind: HookKind,
        template: &Template,
        cwd: &Path,
    ) -> Result<(), EngineError> {
        for (index, command) in template.hook_commands(kind).iter().enumerate() {
            log.debug(&format!("running {kind} command #{}: {command}", index + 1));
            self.shell.run(command, cwd)?;
        }
        Ok(())
    }
}

fn template_of<'a>(
    cfg: &'a config::Config,
    profile_name: &str,
) -> Result<&'a Template, EngineError> {
    cfg.get(profile_name)
        .ok_or_else(|| EngineError::Config(config::ConfigError::ProfileNotFound {
            name: profile_name.to_string(),
        }))
}

fn display_name(project_path: &Path, explicit: Option<&str>) -> String {
    match explicit.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => dir_basename(project_path),
    }
}

fn dir_basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parent_basename(path: &Path) -> String {
    path.parent().map(dir_basename).unwrap_or_default()
}
