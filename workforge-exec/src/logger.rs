//! Leveled colored terminal output.
//!
//! A [`Logger`] is an immutable per-operation context: the orchestrator
//! builds one from the active profile's `log_level` and passes it down,
//! rather than mutating any global state.

use colored::Colorize;

/// Verbosity, ordered: `Silent < Error < Warn < Info < Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// Case-insensitive; unknown or missing names normalize to `Info`.
    pub fn parse(name: Option<&str>) -> Self {
        match name.map(|s| s.trim().to_ascii_uppercase()).as_deref() {
            Some("SILENT") => LogLevel::Silent,
            Some("ERROR") => LogLevel::Error,
            Some("WARN") => LogLevel::Warn,
            Some("DEBUG") => LogLevel::Debug,
            _ => LogLevel::Info,
        }
    }
}

/// Per-operation logging context.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    fn enabled(&self, level: LogLevel) -> bool {
        self.level >= level
    }

    pub fn info(&self, message: &str) {
        if self.enabled(LogLevel::Info) {
            println!("{} {message}", "[INFO]".blue());
        }
    }

    pub fn ok(&self, message: &str) {
        if self.enabled(LogLevel::Info) {
            println!("{} {message}", "[OK]".green());
        }
    }

    pub fn warn(&self, message: &str) {
        if self.enabled(LogLevel::Warn) {
            eprintln!("{} {message}", "[WARN]".yellow());
        }
    }

    pub fn error(&self, message: &str) {
        if self.enabled(LogLevel::Error) {
            eprintln!("{} {message}", "[ERROR]".red());
        }
    }

    pub fn debug(&self, message: &str) {
        if self.enabled(LogLevel::Debug) {
            println!("{} {message}", "[DEBUG]".magenta());
        }
    }
}
