//! Implementation of `sprig --list-agents`.

use crate::agents::REGISTRY;
use crate::error::{Result, SprigError};

/// Print the static agent registry without running the pipeline.
pub fn cmd_list_agents(json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&REGISTRY)
            .map_err(|e| SprigError::UserError(format!("failed to serialize registry: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    println!("Available agents:");
    for agent in &REGISTRY {
        println!("  {:<8} - {}", agent.name, agent.description);
    }
    Ok(())
}
