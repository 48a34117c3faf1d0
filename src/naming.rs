//! Output folder naming: slug generation and collision-free allocation.
//!
//! The filesystem directory listing is the only state this module reads;
//! there is no persisted run history. Allocation probes `slug`, `slug_2`,
//! `slug_3`, ... against what currently exists, so behavior after manual
//! deletion is "first free slot".

use crate::classifier::Category;
use crate::error::{Result, SprigError};
use crate::inference::text;
use std::path::{Path, PathBuf};

/// Fallback slug for requests that yield no significant words.
const FALLBACK_SLUG: &str = "project";

/// Convert text to a filesystem-safe slug.
///
/// Lower-case, non-alphanumeric runs collapsed to a single underscore,
/// leading/trailing underscores trimmed, capped at `max_len` characters.
pub fn slugify(text: &str, max_len: usize) -> String {
    let mut result = String::new();
    let mut last_was_sep = true; // Start true to avoid a leading separator

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            result.push('_');
            last_was_sep = true;
        }
    }

    // Output is pure ASCII, so byte truncation is safe.
    if result.len() > max_len {
        result.truncate(max_len);
    }
    while result.ends_with('_') {
        result.pop();
    }

    result
}

/// Derive the project slug from request text: up to three significant words,
/// each naively singularized, joined by underscores.
///
/// "create a REST API for users" becomes `rest_api_user`.
pub fn project_slug(request: &str, max_len: usize) -> String {
    let words: Vec<String> = text::significant_words(request)
        .into_iter()
        .take(3)
        .map(|w| text::singularize(&w))
        .collect();

    if words.is_empty() {
        return FALLBACK_SLUG.to_string();
    }
    let slug = slugify(&words.join("_"), max_len);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Allocate a unique output directory for a request.
///
/// Candidate is `<root>/<category_dir>/<slug>`; on collision the suffix
/// counter probes `_2`, `_3`, ... until an unused path is found or
/// `max_probe` is reached. The returned path does not exist at the moment
/// of allocation; the caller must create it promptly. Single-invocation use
/// only — concurrent callers racing on the same slug need their own
/// serialization around allocate-then-create.
pub fn allocate_output_path(
    root: &Path,
    category: Category,
    request: &str,
    slug_max_len: usize,
    max_probe: u32,
) -> Result<PathBuf> {
    let slug = project_slug(request, slug_max_len);
    let parent = root.join(category.dir_name());

    let base = parent.join(&slug);
    if !base.exists() {
        return Ok(base);
    }

    for counter in 2..=max_probe {
        let candidate = parent.join(format!("{slug}_{counter}"));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(SprigError::UserError(format!(
        "too many duplicate projects (suffix counter reached {}) for '{}' under '{}'",
        max_probe,
        slug,
        parent.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Build me a Todo app", 60), "build_me_a_todo_app");
        assert_eq!(slugify("hello, world!", 60), "hello_world");
        assert_eq!(slugify("  spaces  ", 60), "spaces");
        assert_eq!(slugify("already_snake", 60), "already_snake");
        assert_eq!(slugify("!!!", 60), "");
    }

    #[test]
    fn test_slugify_caps_length() {
        let slug = slugify("a".repeat(100).as_str(), 10);
        assert_eq!(slug.len(), 10);
        // Truncation never leaves a trailing separator.
        let slug = slugify("aaaa bbbb", 5);
        assert_eq!(slug, "aaaa");
    }

    #[test]
    fn test_project_slug_singularizes_words() {
        assert_eq!(project_slug("create a REST API for users", 60), "rest_api_user");
        assert_eq!(project_slug("build me a todo web app", 60), "todo_web");
    }

    #[test]
    fn test_project_slug_falls_back() {
        assert_eq!(project_slug("", 60), "project");
        assert_eq!(project_slug("make me an app", 60), "project");
    }

    #[test]
    fn allocation_returns_base_when_free() {
        let temp = TempDir::new().unwrap();
        let path =
            allocate_output_path(temp.path(), Category::Api, "rest api for users", 60, 1000)
                .unwrap();
        assert_eq!(path, temp.path().join("apis/rest_api_user"));
        assert!(!path.exists());
    }

    #[test]
    fn allocation_probes_increasing_suffixes() {
        let temp = TempDir::new().unwrap();
        let parent = temp.path().join("apis");
        std::fs::create_dir_all(parent.join("rest_api_user")).unwrap();
        std::fs::create_dir_all(parent.join("rest_api_user_2")).unwrap();
        std::fs::create_dir_all(parent.join("rest_api_user_3")).unwrap();

        let path =
            allocate_output_path(temp.path(), Category::Api, "rest api for users", 60, 1000)
                .unwrap();
        assert_eq!(path, parent.join("rest_api_user_4"));
    }

    #[test]
    fn allocation_reuses_first_free_slot_after_deletion() {
        let temp = TempDir::new().unwrap();
        let parent = temp.path().join("scripts");
        std::fs::create_dir_all(parent.join("backup")).unwrap();
        std::fs::create_dir_all(parent.join("backup_3")).unwrap();

        // _2 was never created (or was deleted); it is the first free slot.
        let path = allocate_output_path(temp.path(), Category::Script, "backup", 60, 1000).unwrap();
        assert_eq!(path, parent.join("backup_2"));
    }

    #[test]
    fn allocation_fails_when_probe_budget_exhausted() {
        let temp = TempDir::new().unwrap();
        let parent = temp.path().join("scripts");
        std::fs::create_dir_all(parent.join("backup")).unwrap();
        std::fs::create_dir_all(parent.join("backup_2")).unwrap();
        std::fs::create_dir_all(parent.join("backup_3")).unwrap();

        let err = allocate_output_path(temp.path(), Category::Script, "backup", 60, 3).unwrap_err();
        assert!(err.to_string().contains("too many duplicate projects"));
    }

    #[test]
    fn allocated_path_never_exists() {
        let temp = TempDir::new().unwrap();
        for _ in 0..5 {
            let path =
                allocate_output_path(temp.path(), Category::Web, "todo web app", 60, 1000).unwrap();
            assert!(!path.exists());
            std::fs::create_dir_all(&path).unwrap();
        }
    }
}
