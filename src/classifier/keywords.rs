//! Keyword tables for the classifier.
//!
//! Each category owns a fixed (keyword, weight) table. Tables are plain
//! static slices: construction cost is zero, iteration order is fixed, and
//! nothing mutates them after process start.

use super::Category;
use regex::Regex;
use std::sync::OnceLock;

/// Keywords that match any word starting with the stem
/// (e.g. "automat" matches "automate", "automation").
pub(super) const PREFIX_STEMS: &[&str] = &["automat", "visuali"];

const WEB_KEYWORDS: &[(&str, u32)] = &[
    ("web", 3),
    ("website", 3),
    ("html", 3),
    ("flask", 4),
    ("frontend", 3),
    ("page", 2),
    ("dashboard", 3),
    ("template", 1),
    ("css", 2),
    ("static", 1),
    ("form", 1),
    ("ui", 2),
    ("webapp", 4),
    ("jinja", 2),
    ("bootstrap", 2),
];

const API_KEYWORDS: &[(&str, u32)] = &[
    ("api", 4),
    ("rest", 4),
    ("endpoint", 3),
    ("fastapi", 4),
    ("crud", 3),
    ("json", 2),
    ("resource", 2),
    ("route", 2),
    ("http", 2),
    ("microservice", 3),
    ("backend", 2),
    ("server", 1),
    ("post", 1),
    ("get", 1),
];

const DATA_KEYWORDS: &[(&str, u32)] = &[
    ("data", 3),
    ("csv", 4),
    ("pandas", 4),
    ("analysis", 3),
    ("visuali", 3),
    ("chart", 3),
    ("plot", 3),
    ("dataset", 3),
    ("dataframe", 4),
    ("excel", 3),
    ("statistics", 3),
    ("graph", 2),
    ("report", 2),
    ("matplotlib", 4),
];

const CLI_KEYWORDS: &[(&str, u32)] = &[
    ("cli", 4),
    ("command", 3),
    ("argparse", 4),
    ("click", 4),
    ("terminal", 3),
    ("flag", 2),
    ("argument", 2),
    ("subcommand", 3),
    ("option", 1),
    // "command-line" in the raw request; normalization turns the hyphen
    // into a space before matching.
    ("command line", 4),
    ("interactive", 1),
];

const SCRIPT_KEYWORDS: &[(&str, u32)] = &[
    ("script", 3),
    ("automat", 3),
    ("file", 2),
    ("rename", 2),
    ("backup", 3),
    ("batch", 2),
    ("cron", 3),
    ("schedule", 3),
    ("process", 2),
    ("convert", 2),
    ("download", 2),
    ("utility", 2),
    ("helper", 2),
    ("clean", 1),
    ("monitor", 2),
];

/// The (keyword, weight) table for a category.
pub(super) fn keyword_table(category: Category) -> &'static [(&'static str, u32)] {
    match category {
        Category::Web => WEB_KEYWORDS,
        Category::Api => API_KEYWORDS,
        Category::Data => DATA_KEYWORDS,
        Category::Cli => CLI_KEYWORDS,
        Category::Script => SCRIPT_KEYWORDS,
    }
}

/// Explicit technology mentions that force a category before keyword scoring.
/// If the user says "use fastapi", that wins regardless of other keywords.
const EXPLICIT_TECH: &[(&str, Category)] = &[
    (r"\bfast\s*api\b", Category::Api),
    (r"\bflask\b", Category::Web),
    (r"\bdjango\b", Category::Web),
    (r"\bexpress\b", Category::Api),
    (r"\bargparse\b", Category::Cli),
    (r"\bclick\b", Category::Cli),
    (r"\bpandas\b", Category::Data),
    (r"\bmatplotlib\b", Category::Data),
];

fn explicit_tech_patterns() -> &'static Vec<(Regex, Category)> {
    static PATTERNS: OnceLock<Vec<(Regex, Category)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        EXPLICIT_TECH
            .iter()
            .map(|(pattern, category)| {
                // Patterns are compile-time constants; a failure here is a
                // programming error caught by the test suite.
                (Regex::new(pattern).expect("invalid explicit-tech pattern"), *category)
            })
            .collect()
    })
}

/// Return the forced category if the request names a technology explicitly.
pub(super) fn explicit_tech(text: &str) -> Option<Category> {
    let lower = text.to_lowercase();
    explicit_tech_patterns()
        .iter()
        .find(|(pattern, _)| pattern.is_match(&lower))
        .map(|(_, category)| *category)
}
