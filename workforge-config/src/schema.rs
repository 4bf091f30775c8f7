//! Typed config document: profile name → template.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle points a profile may attach shell commands to.
///
/// `OnCreate` is accepted by the schema but no lifecycle operation fires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    OnCreate,
    OnLoad,
    OnClose,
    OnDelete,
    OnShellRunIn,
    OnShellRunOut,
}

impl HookKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HookKind::OnCreate => "on_create",
            HookKind::OnLoad => "on_load",
            HookKind::OnClose => "on_close",
            HookKind::OnDelete => "on_delete",
            HookKind::OnShellRunIn => "on_shell_run_in",
            HookKind::OnShellRunOut => "on_shell_run_out",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered shell command lists per lifecycle point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hooks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_create: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_load: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_close: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_shell_run_in: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_shell_run_out: Option<Vec<String>>,
}

impl Hooks {
    /// Commands registered for `kind`, empty when unset.
    pub fn commands(&self, kind: HookKind) -> &[String] {
        let slot = match kind {
            HookKind::OnCreate => &self.on_create,
            HookKind::OnLoad => &self.on_load,
            HookKind::OnClose => &self.on_close,
            HookKind::OnDelete => &self.on_delete,
            HookKind::OnShellRunIn => &self.on_shell_run_in,
            HookKind::OnShellRunOut => &self.on_shell_run_out,
        };
        slot.as_deref().unwrap_or(&[])
    }
}

/// Terminal-multiplexer session settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TmuxBlock {
    #[serde(default)]
    pub attach: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<Vec<String>>,
}

/// One named profile within a config document.
///
/// Unknown top-level fields land in `extra` — preserved, never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<Hooks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmux: Option<TmuxBlock>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Template {
    /// Commands for `kind`, empty when the template has no hooks block.
    pub fn hook_commands(&self, kind: HookKind) -> &[String] {
        self.hooks
            .as_ref()
            .map(|hooks| hooks.commands(kind))
            .unwrap_or(&[])
    }
}

/// The whole document: profile name → template.
pub type Config = BTreeMap<String, Template>;

/// Validation pass over an already-typed document.
///
/// Returns every violation, not just the first.
pub fn validate(config: &Config) -> Result<(), Vec<String>> {
    let mut violations = Vec::new();
    for name in config.keys() {
        if name.trim().is_empty() {
            violations.push("profile name must not be empty".to_string());
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
