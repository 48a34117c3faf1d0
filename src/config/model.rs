//! The Config struct and its serde defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for a sprig invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory that category directories (web_apps/, apis/, ...) are
    /// created under.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Maximum length of a generated project slug.
    #[serde(default = "default_slug_max_len")]
    pub slug_max_len: usize,

    /// Upper bound for the collision-suffix counter (`slug_2` .. `slug_N`).
    #[serde(default = "default_max_probe")]
    pub max_probe: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_root: default_output_root(),
            slug_max_len: default_slug_max_len(),
            max_probe: default_max_probe(),
        }
    }
}

pub(crate) fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}

pub(crate) fn default_slug_max_len() -> usize {
    60
}

pub(crate) fn default_max_probe() -> u32 {
    1000
}
