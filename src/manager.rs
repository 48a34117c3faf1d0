//! Pipeline orchestration for sprig.
//!
//! One invocation moves through Received → Classified → Dispatched →
//! Rendering → Written. Classification never fails; dispatch is a static
//! registry lookup; rendering happens entirely in memory; writing is the
//! only stage with side effects, and dry-run halts at its boundary with the
//! exact manifest a real run would produce.

use crate::agents::{self, ProjectFile};
use crate::classifier::{Category, classify};
use crate::config::Config;
use crate::error::{Result, SprigError};
use crate::{fs, naming};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One manifest entry: a project-relative path and its size in bytes.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub path: PathBuf,
    pub bytes: u64,
}

/// The result of one invocation, also the `--json` output shape.
///
/// Discarded when the invocation ends; the output directory tree on disk is
/// the only durable state.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub ts: DateTime<Utc>,
    pub request: String,
    pub category: Category,
    pub agent: &'static str,
    pub score: u32,
    /// All five categories with their scores, best first.
    pub ranked: Vec<(Category, u32)>,
    pub bundle: &'static str,
    pub dry_run: bool,
    /// Absent in dry-run mode: no path is allocated, nothing is written.
    pub output_dir: Option<PathBuf>,
    /// Ordered (path, byte size) entries; identical between a dry run and
    /// the real run it previews.
    pub manifest: Vec<ManifestEntry>,
    /// Advisory schema-drift warnings; never fatal.
    pub warnings: Vec<String>,
}

/// Handle one request end to end.
///
/// In dry-run mode the returned manifest lists exactly the relative paths
/// and sizes a real run would write, with zero filesystem mutation.
pub fn handle(request: &str, config: &Config, dry_run: bool) -> Result<RunReport> {
    // Received → Classified: total, never fails.
    let classification = classify(request);

    // Classified → Dispatched: static registry lookup.
    let agent = agents::lookup(classification.category)?;

    // Dispatched → Rendering: the whole project is produced in memory
    // before any path is allocated or any byte hits the disk.
    let project = agent.render_project(request)?;

    let manifest: Vec<ManifestEntry> = project
        .files
        .iter()
        .map(|file| ManifestEntry {
            path: file.path.clone(),
            bytes: file.content.len() as u64,
        })
        .collect();

    let warnings: Vec<String> = project
        .unused
        .iter()
        .map(|name| {
            format!(
                "bundle '{}' declares placeholder '{}' but no template references it",
                project.bundle, name
            )
        })
        .collect();

    // Rendering → Written: dry-run halts at this boundary.
    let output_dir = if dry_run {
        None
    } else {
        let dir = naming::allocate_output_path(
            &config.output_root,
            classification.category,
            request,
            config.slug_max_len,
            config.max_probe,
        )?;
        write_project(&dir, &project.files)?;
        Some(dir)
    };

    Ok(RunReport {
        ts: Utc::now(),
        request: request.to_string(),
        category: classification.category,
        agent: agent.name,
        score: classification.score,
        ranked: classification.ranked,
        bundle: project.bundle,
        dry_run,
        output_dir,
        manifest,
        warnings,
    })
}

/// Write every rendered file under the freshly allocated project directory.
///
/// On the first fault, the error carries every path already written; no
/// partial success is ever reported as a clean run.
fn write_project(output_dir: &Path, files: &[ProjectFile]) -> Result<()> {
    std::fs::create_dir_all(output_dir).map_err(|source| SprigError::Filesystem {
        path: output_dir.to_path_buf(),
        source,
        written: Vec::new(),
    })?;

    let mut written: Vec<PathBuf> = Vec::new();
    for file in files {
        match fs::write_project_file(output_dir, &file.path, &file.content) {
            Ok(_) => written.push(file.path.clone()),
            Err(source) => {
                return Err(SprigError::Filesystem {
                    path: output_dir.join(&file.path),
                    source,
                    written,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(root: &Path) -> Config {
        Config {
            output_root: root.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn api_request_materializes_a_project() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        let report = handle("create a REST API for users", &config, false).unwrap();

        assert_eq!(report.category, Category::Api);
        assert!(report.score > 0);
        let dir = report.output_dir.as_ref().unwrap();
        assert_eq!(*dir, temp.path().join("apis/rest_api_user"));

        let app = std::fs::read_to_string(dir.join("app.py")).unwrap();
        assert!(app.contains("@app.get(\"/users\")"));
        let models = std::fs::read_to_string(dir.join("models.py")).unwrap();
        assert!(models.contains("class User(UserBase):"));
    }

    #[test]
    fn repeated_requests_never_collide() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        let first = handle("create a REST API for users", &config, false).unwrap();
        let first_dir = first.output_dir.unwrap();
        let before: Vec<u8> = std::fs::read(first_dir.join("app.py")).unwrap();

        let second = handle("create a REST API for users", &config, false).unwrap();
        let second_dir = second.output_dir.unwrap();

        assert_eq!(second_dir, temp.path().join("apis/rest_api_user_2"));
        assert_ne!(first_dir, second_dir);
        // The first run's files are untouched by the second.
        assert_eq!(std::fs::read(first_dir.join("app.py")).unwrap(), before);
    }

    #[test]
    fn dry_run_writes_nothing_and_previews_everything() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        let dry = handle("build me a todo web app", &config, true).unwrap();
        assert!(dry.dry_run);
        assert!(dry.output_dir.is_none());
        assert!(!dry.manifest.is_empty());
        // No category directory was created.
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);

        let real = handle("build me a todo web app", &config, false).unwrap();
        assert_eq!(dry.manifest.len(), real.manifest.len());
        for (d, r) in dry.manifest.iter().zip(real.manifest.iter()) {
            assert_eq!(d.path, r.path);
            assert_eq!(d.bytes, r.bytes);
        }
        // Byte sizes in the manifest match what landed on disk.
        let dir = real.output_dir.unwrap();
        for entry in &real.manifest {
            let meta = std::fs::metadata(dir.join(&entry.path)).unwrap();
            assert_eq!(meta.len(), entry.bytes);
        }
    }

    #[test]
    fn keyword_free_request_still_produces_a_project() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        let report = handle("blah blah blah", &config, false).unwrap();
        assert_eq!(report.category, Category::Script);
        assert_eq!(report.score, 0);
        let dir = report.output_dir.unwrap();
        assert!(dir.join("main.py").exists());
    }

    #[test]
    fn manifest_paths_are_relative_and_ordered() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        let report = handle("build me a todo web app", &config, true).unwrap();
        let paths: Vec<String> = report
            .manifest
            .iter()
            .map(|e| e.path.display().to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "app.py",
                "templates/index.html",
                "static/style.css",
                "requirements.txt"
            ]
        );
    }

    #[test]
    #[cfg(unix)]
    fn write_fault_reports_paths_written_before_it() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        // Pre-create the target project directory read-only so the first
        // file write fails after allocation.
        let dir = temp.path().join("web_apps");
        std::fs::create_dir_all(&dir).unwrap();
        let mut perms = std::fs::metadata(&dir).unwrap().permissions();
        perms.set_mode(0o555);
        std::fs::set_permissions(&dir, perms).unwrap();

        let err = handle("build me a todo web app", &config, false).unwrap_err();
        assert_eq!(err.stage(), "writing");
        assert_eq!(err.exit_code(), crate::exit_codes::WRITE_FAILURE);

        // Restore permissions so TempDir can clean up.
        let mut perms = std::fs::metadata(&dir).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&dir, perms).unwrap();
    }
}
