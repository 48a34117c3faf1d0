//! CLI argument parsing for sprig.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the argument surface; actual implementations
//! are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Sprig: keyword-routed project scaffold generator.
///
/// Takes a natural-language request ("build me a todo web app"), classifies
/// it into one of five project categories, and renders that category's
/// templates into a uniquely named project directory:
/// - web:    Flask app with HTML templates and CSS
/// - api:    FastAPI REST service with models
/// - data:   pandas analysis / CSV processing scripts
/// - cli:    argparse command-line tools
/// - script: plain automation scripts
#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Natural-language request describing the project to generate.
    pub request: Option<String>,

    /// Show the manifest without writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// List the registered specialist agents and exit.
    #[arg(long)]
    pub list_agents: bool,

    /// Output root directory (overrides output_root from sprig.yaml).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Print the run report as JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
