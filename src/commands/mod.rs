//! Command implementations for sprig.
//!
//! This module provides the dispatcher that routes parsed CLI flags to
//! their implementations: `--list-agents` prints the static registry,
//! anything else runs the generation pipeline.

mod agents;
mod generate;

use crate::cli::Cli;
use crate::error::{Result, SprigError};

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    if cli.list_agents {
        return agents::cmd_list_agents(cli.json);
    }

    let Some(request) = cli.request else {
        return Err(SprigError::UserError(
            "no request given; try `sprig \"build me a todo web app\"` or --list-agents"
                .to_string(),
        ));
    };

    generate::cmd_generate(&request, cli.dry_run, cli.root, cli.json)
}
