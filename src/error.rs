//! Error types for the sprig CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Every failure names the pipeline stage it occurred in, and filesystem
//! faults carry the list of paths already written so a partially materialized
//! project is never silently left behind.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sprig operations.
#[derive(Error, Debug)]
pub enum SprigError {
    /// User provided invalid arguments, config, or the output root is unusable.
    #[error("{0}")]
    UserError(String),

    /// A template referenced a placeholder the variable mapping never supplied.
    ///
    /// This is a schema mismatch between a bundle and its agent's inference
    /// rule, not a user-input problem.
    #[error("bundle '{bundle}' references placeholder '${{{placeholder}}}' which was not supplied")]
    MissingVariable { bundle: String, placeholder: String },

    /// No agent is registered for a classified category.
    ///
    /// Every category must have exactly one registered agent, so this
    /// indicates an internal wiring bug rather than a recoverable condition.
    #[error("no agent registered for category '{0}' (internal registry fault)")]
    UnknownCategory(String),

    /// An I/O fault while writing the generated project to disk.
    ///
    /// `written` lists every path successfully written before the fault so
    /// the caller can clean up or resume.
    #[error("failed to write '{path}': {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        written: Vec<PathBuf>,
    },
}

impl SprigError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SprigError::UserError(_) => exit_codes::USER_ERROR,
            SprigError::MissingVariable { .. } => exit_codes::RENDER_FAILURE,
            SprigError::UnknownCategory(_) => exit_codes::INTERNAL_FAILURE,
            SprigError::Filesystem { .. } => exit_codes::WRITE_FAILURE,
        }
    }

    /// The pipeline stage this error belongs to, for reporting.
    pub fn stage(&self) -> &'static str {
        match self {
            SprigError::UserError(_) => "setup",
            SprigError::MissingVariable { .. } => "rendering",
            SprigError::UnknownCategory(_) => "dispatch",
            SprigError::Filesystem { .. } => "writing",
        }
    }

    /// Paths successfully written before a filesystem fault (empty otherwise).
    pub fn written_paths(&self) -> &[PathBuf] {
        match self {
            SprigError::Filesystem { written, .. } => written,
            _ => &[],
        }
    }
}

/// Result type alias for sprig operations.
pub type Result<T> = std::result::Result<T, SprigError>;
