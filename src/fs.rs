//! Filesystem helpers for materializing generated projects.
//!
//! The only capability the pipeline needs is "write file at path P with
//! content C, creating parent directories as needed" — plus a containment
//! check so no rendered file can land outside its project directory.

use crate::error::{Result, SprigError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Reject relative paths that could escape the project directory.
///
/// Template file paths are static bundle data, so a violation here is a
/// bundle-authoring bug. Checked in dry-run too, so both modes agree on
/// what a run would produce.
pub fn validate_relative_path(relative: &Path) -> Result<()> {
    if relative.as_os_str().is_empty() {
        return Err(SprigError::UserError(
            "template file path is empty".to_string(),
        ));
    }
    for component in relative.components() {
        match component {
            Component::Normal(_) => {}
            _ => {
                return Err(SprigError::UserError(format!(
                    "template file path escapes the project directory: '{}'",
                    relative.display()
                )));
            }
        }
    }
    Ok(())
}

/// Write one project file under `output_dir`, creating parent directories
/// as needed. Returns the absolute path written.
///
/// I/O failures come back as raw `io::Error` so the caller can attach the
/// written-so-far context the error report requires.
pub fn write_project_file(
    output_dir: &Path,
    relative: &Path,
    content: &str,
) -> std::io::Result<PathBuf> {
    let full = output_dir.join(relative);

    if let Some(parent) = full.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&full)?;
    file.write_all(content.as_bytes())?;

    Ok(full)
}
