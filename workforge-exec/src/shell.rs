//! Shell command execution with inherited stdio.

use std::path::Path;
use std::process::Command;

use crate::error::ExecError;

/// Runs one shell command to completion.
pub trait Shell {
    /// Run `command` through the user's shell in `cwd`, inheriting the
    /// terminal and environment. Non-zero exit is an error carrying the code.
    fn run(&self, command: &str, cwd: &Path) -> Result<(), ExecError>;
}

/// Spawns `$SHELL` (fallback `/bin/sh`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

/// bash/zsh/fish get a login shell; anything else a plain `-c`.
fn shell_flag(shell: &str) -> &'static str {
    let name = shell.rsplit('/').next().unwrap_or(shell);
    match name {
        "bash" | "zsh" | "fish" => "-lc",
        _ => "-c",
    }
}

impl Shell for SystemShell {
    fn run(&self, command: &str, cwd: &Path) -> Result<(), ExecError> {
        let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
        let status = Command::new(&shell)
            .arg(shell_flag(&shell))
            .arg(command)
            .current_dir(cwd)
            .status()
            .map_err(|e| ExecError::Spawn {
                program: shell.clone(),
                source: e,
            })?;
        if status.success() {
            return Ok(());
        }
        Err(ExecError::NonZeroExit {
            command: command.to_string(),
            code: status.code().unwrap_or(-1),
        })
    }
}
