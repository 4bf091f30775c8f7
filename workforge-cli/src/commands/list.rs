//! `wf list` / `wf ls`

use anyhow::{Context, Result};

pub fn run() -> Result<()> {
    let orchestrator = super::orchestrator()?;
    let entries = orchestrator.entries().context("failed to list projects")?;
    for entry in entries {
        println!("{}", entry.record.name);
    }
    Ok(())
}
