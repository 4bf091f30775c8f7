//! Workforge — project checkout and session lifecycle CLI.
//!
//! # Usage
//!
//! ```text
//! wf init [url] [--gwt]
//! wf load [dir] [--profile <name>]
//! wf list|ls
//! wf open <name> [--profile <name>]
//! wf close <name> [--profile <name>]
//! wf add <first> [branch] [--create-branch] [--base <branch>]
//! wf rm <name>
//! ```

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use workforge_exec::Logger;

use commands::{
    add::AddArgs, close::CloseArgs, init::InitArgs, load::LoadArgs, open::OpenArgs, rm::RmArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "wf",
    version,
    about = "Manage project checkouts, git worktrees, and tmux sessions",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register the current directory, or clone a repository, as a project.
    Init(InitArgs),

    /// Load a sibling project directory and run its active profile.
    Load(LoadArgs),

    /// List all projects, with worktree roots expanded per branch.
    #[command(alias = "ls")]
    List,

    /// Open a registered project by name.
    Open(OpenArgs),

    /// Close a project's tmux session.
    Close(CloseArgs),

    /// Add a git worktree for a branch.
    Add(AddArgs),

    /// Remove a worktree and run its delete hooks.
    Rm(RmArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Load(args) => args.run(),
        Commands::List => commands::list::run(),
        Commands::Open(args) => args.run(),
        Commands::Close(args) => args.run(),
        Commands::Add(args) => args.run(),
        Commands::Rm(args) => args.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            Logger::default().error(&format!("{error:#}"));
            ExitCode::FAILURE
        }
    }
}
