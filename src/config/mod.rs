//! Configuration for sprig.
//!
//! Config lives in an optional `sprig.yaml` in the working directory; every
//! field has a default so the file is never required. Values are read once
//! at startup and never mutated afterwards.

mod model;
mod operations;

pub use model::Config;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "sprig.yaml";
