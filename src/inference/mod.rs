//! Variable inference for sprig.
//!
//! Derives the concrete variable mapping a category's templates need from
//! the raw request text. The rules are category-specific but share one hard
//! contract: inference never fails, every derivable field has a
//! deterministic fallback, and the returned mapping is a superset of every
//! placeholder schema declared by the category's bundles.

pub(crate) mod text;

use crate::classifier::{Category, keyword_terms};
use std::collections::BTreeMap;

/// Mapping from placeholder name to substitution value.
pub type VarMap = BTreeMap<String, String>;

/// Action-verb stems mapped to the CLI command name they imply.
/// Stems match word starts, so "renaming" and "renamed" both yield "rename".
const VERB_STEMS: &[(&str, &str)] = &[
    ("renam", "rename"),
    ("convert", "convert"),
    ("download", "download"),
    ("upload", "upload"),
    ("backup", "backup"),
    ("sync", "sync"),
    ("merg", "merge"),
    ("split", "split"),
    ("count", "count"),
    ("search", "search"),
    ("find", "find"),
    ("fetch", "fetch"),
    ("clean", "clean"),
    ("scan", "scan"),
    ("watch", "watch"),
    ("check", "check"),
    ("format", "format"),
    ("compress", "compress"),
    ("extract", "extract"),
    ("organiz", "organize"),
    ("resiz", "resize"),
    ("pars", "parse"),
    ("copy", "copy"),
    ("mov", "move"),
    ("delet", "delete"),
    ("list", "list"),
];

/// Derive the variable mapping for a category from the request text.
///
/// The keys produced per category are fixed; values fall back to category
/// defaults when the text yields nothing usable.
pub fn infer(request: &str, category: Category) -> VarMap {
    match category {
        Category::Web => infer_web(request),
        Category::Api => infer_api(request),
        Category::Data => infer_data(request),
        Category::Cli => infer_cli(request),
        Category::Script => infer_script(request),
    }
}

fn infer_web(request: &str) -> VarMap {
    let mut vars = VarMap::new();
    vars.insert(
        "app_title".into(),
        app_title(request, Category::Web, "Web App"),
    );
    vars.insert(
        "description".into(),
        description(request, "A simple web application"),
    );
    // Cosmetic defaults; not derived from the request text.
    vars.insert("primary_color".into(), "#2563eb".into());
    vars.insert("accent_color".into(), "#f59e0b".into());
    vars
}

fn infer_api(request: &str) -> VarMap {
    let noun = resource_noun(request, Category::Api).unwrap_or_else(|| "items".into());
    let singular = text::singularize(&noun);
    let resource = if text::looks_plural(&noun) {
        noun
    } else {
        text::pluralize(&noun)
    };

    let mut vars = VarMap::new();
    vars.insert(
        "app_title".into(),
        app_title(request, Category::Api, "REST API"),
    );
    vars.insert("description".into(), description(request, "A REST API"));
    vars.insert("model".into(), text::capitalize(&singular));
    vars.insert("route_path".into(), format!("/{}", resource));
    vars.insert("resource".into(), resource);
    vars
}

fn infer_data(request: &str) -> VarMap {
    let mut vars = VarMap::new();
    vars.insert(
        "chart_title".into(),
        app_title(request, Category::Data, "Data Analysis"),
    );
    vars.insert(
        "description".into(),
        description(request, "Data analysis"),
    );
    vars.insert("input_csv".into(), "data/input.csv".into());
    vars
}

fn infer_cli(request: &str) -> VarMap {
    let title = app_title(request, Category::Cli, "CLI Tool");
    let tool_name = title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_");

    let mut vars = VarMap::new();
    vars.insert("description".into(), description(request, "A command-line tool"));
    vars.insert("command".into(), command_verb(request));
    vars.insert("tool_name".into(), tool_name);
    vars
}

fn infer_script(request: &str) -> VarMap {
    let mut vars = VarMap::new();
    vars.insert(
        "description".into(),
        description(request, "Utility script"),
    );
    vars.insert("interval_secs".into(), "60".into());
    vars
}

/// Human-readable application name: up to three significant words with the
/// category's own keywords stripped, title-cased. Falls back to a fixed
/// per-category default when nothing survives.
fn app_title(request: &str, category: Category, fallback: &str) -> String {
    let words: Vec<String> = without_category_keywords(request, category)
        .into_iter()
        .take(3)
        .collect();
    if words.is_empty() {
        fallback.to_string()
    } else {
        text::title_case(&words)
    }
}

/// Short description: the request with a leading "make a"-style prefix
/// stripped and the first letter capitalized.
fn description(request: &str, fallback: &str) -> String {
    const PREFIXES: &[&str] = &[
        "build me a ",
        "build me an ",
        "build a ",
        "build an ",
        "create me a ",
        "create a ",
        "create an ",
        "make me a ",
        "make a ",
        "make an ",
        "write a ",
        "write an ",
        "generate a ",
        "generate an ",
    ];
    let mut body = request.trim().to_lowercase();
    for prefix in PREFIXES {
        if let Some(rest) = body.strip_prefix(prefix) {
            body = rest.to_string();
            break;
        }
    }
    let body = body.trim();
    if body.is_empty() {
        fallback.to_string()
    } else {
        text::capitalize(body)
    }
}

/// Pick the most plausible domain noun for resource/model derivation.
///
/// Heuristic (documented in DESIGN.md): among significant words with the
/// category's keywords removed, gerunds are skipped, the first plural-looking
/// word wins, and otherwise the last remaining word is taken. Returns `None`
/// for contentless requests; the caller substitutes a generic fallback.
fn resource_noun(request: &str, category: Category) -> Option<String> {
    let candidates: Vec<String> = without_category_keywords(request, category)
        .into_iter()
        .filter(|w| !text::is_gerund(w))
        .collect();

    candidates
        .iter()
        .find(|w| text::looks_plural(w))
        .or_else(|| candidates.last())
        .cloned()
}

/// Default command name for CLI templates: the first action verb found in
/// the text, with a generic fallback of "run".
fn command_verb(request: &str) -> String {
    for word in text::normalize(request).split_whitespace() {
        for (stem, command) in VERB_STEMS {
            if word.starts_with(stem) {
                return (*command).to_string();
            }
        }
    }
    "run".to_string()
}

/// Significant words with the given category's keyword terms removed.
fn without_category_keywords(request: &str, category: Category) -> Vec<String> {
    let terms: Vec<&str> = keyword_terms(category).collect();
    text::significant_words(request)
        .into_iter()
        .filter(|w| !terms.contains(&w.as_str()))
        .collect()
}
