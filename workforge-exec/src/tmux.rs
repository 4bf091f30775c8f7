//! Terminal-multiplexer sessions.

use std::process::Command;

use crate::error::ExecError;

/// Named persistent terminal sessions with one command per window.
pub trait Multiplexer {
    /// Create a detached session named `name` with one window per command
    /// (the first command reuses the session's initial window), then attach
    /// when asked. An empty window list creates no session at all.
    fn new_session(&self, name: &str, attach: bool, windows: &[String]) -> Result<(), ExecError>;

    /// Whether a live session with this exact name exists. Never errors.
    fn has_session(&self, name: &str) -> bool;

    fn kill_session(&self, name: &str) -> Result<(), ExecError>;
}

/// Shells out to the `tmux` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tmux;

impl Tmux {
    fn status(&self, args: &[&str]) -> Result<(), ExecError> {
        let status = Command::new("tmux")
            .args(args)
            .status()
            .map_err(|e| ExecError::Spawn {
                program: "tmux".to_string(),
                source: e,
            })?;
        if status.success() {
            return Ok(());
        }
        Err(ExecError::NonZeroExit {
            command: format!("tmux {}", args.join(" ")),
            code: status.code().unwrap_or(-1),
        })
    }
}

impl Multiplexer for Tmux {
    fn new_session(&self, name: &str, attach: bool, windows: &[String]) -> Result<(), ExecError> {
        let Some((first, rest)) = windows.split_first() else {
            return Ok(());
        };

        self.status(&["new-session", "-s", name, "-d"])?;
        self.status(&["send-keys", "-t", name, first, "C-m"])?;

        for window in rest {
            self.status(&["new-window", "-t", name])?;
            self.status(&["send-keys", "-t", name, window, "C-m"])?;
        }

        if attach {
            self.status(&["attach", "-t", name])?;
        }
        Ok(())
    }

    fn has_session(&self, name: &str) -> bool {
        Command::new("tmux")
            .args(["has-session", "-t", name])
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn kill_session(&self, name: &str) -> Result<(), ExecError> {
        self.status(&["kill-session", "-t", name])
    }
}
