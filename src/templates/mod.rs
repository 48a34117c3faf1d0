//! Template store and rendering engine for sprig.
//!
//! Bundles are static data: named groups of (relative path, template body)
//! files belonging to one category, with an explicitly declared placeholder
//! schema. Declaring the schema up front means a mismatch between a bundle
//! and its agent's inference rule surfaces before any file is rendered,
//! never after partial output.
//!
//! The engine is pure `${identifier}` substitution. No conditionals, no
//! loops, no nested evaluation, no reserved names — a substitution
//! mechanism, not a templating language.

mod api;
mod cli_tool;
mod data;
mod script;
mod web;

use crate::classifier::Category;
use crate::error::{Result, SprigError};
use crate::inference::VarMap;
use std::collections::BTreeSet;

pub(crate) use data::{CSV_PROCESSOR, DATA_VISUALIZER, PANDAS_ANALYSIS};
pub(crate) use script::{BASIC_SCRIPT, FILE_PROCESSOR, SCHEDULER};

/// One file of a bundle: where it lands relative to the project root, and
/// the placeholder-bearing body that produces it.
#[derive(Debug)]
pub struct TemplateFile {
    pub path: &'static str,
    pub body: &'static str,
}

/// A named group of template files rendered together as one project.
#[derive(Debug)]
pub struct Bundle {
    pub name: &'static str,
    pub category: Category,
    pub files: &'static [TemplateFile],
    /// The placeholder schema this bundle requires. Kept as an explicit
    /// declared set rather than discovered by scanning at render time.
    pub required: &'static [&'static str],
}

impl Bundle {
    /// Verify the mapping covers every declared placeholder.
    ///
    /// Called before rendering the first file so a schema mismatch never
    /// produces partial output.
    pub fn check_schema(&self, vars: &VarMap) -> Result<()> {
        for name in self.required {
            if !vars.contains_key(*name) {
                return Err(SprigError::MissingVariable {
                    bundle: self.name.to_string(),
                    placeholder: (*name).to_string(),
                });
            }
        }
        Ok(())
    }

    /// Narrow a mapping down to the declared schema.
    pub fn narrow(&self, vars: &VarMap) -> VarMap {
        vars.iter()
            .filter(|(name, _)| self.required.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Every placeholder name referenced by any file in this bundle.
    pub fn referenced(&self) -> BTreeSet<String> {
        self.files
            .iter()
            .flat_map(|file| placeholders(file.body))
            .collect()
    }

    /// Declared placeholders that a render never referenced.
    ///
    /// Advisory only: signals drift between the declared schema and the
    /// template bodies, never aborts a run.
    pub fn unreferenced(&self, used: &BTreeSet<String>) -> Vec<String> {
        self.required
            .iter()
            .filter(|name| !used.contains(**name))
            .map(|name| (*name).to_string())
            .collect()
    }
}

static WEB_BUNDLES: [&Bundle; 1] = [&web::FLASK_APP];
static API_BUNDLES: [&Bundle; 1] = [&api::FASTAPI_SERVICE];
static DATA_BUNDLES: [&Bundle; 3] = [
    &data::PANDAS_ANALYSIS,
    &data::CSV_PROCESSOR,
    &data::DATA_VISUALIZER,
];
static CLI_BUNDLES: [&Bundle; 1] = [&cli_tool::ARGPARSE_TOOL];
static SCRIPT_BUNDLES: [&Bundle; 3] = [
    &script::BASIC_SCRIPT,
    &script::FILE_PROCESSOR,
    &script::SCHEDULER,
];

/// The bundles owned by a category. Selection among them is the agent's job.
pub fn bundles_for(category: Category) -> &'static [&'static Bundle] {
    match category {
        Category::Web => &WEB_BUNDLES,
        Category::Api => &API_BUNDLES,
        Category::Data => &DATA_BUNDLES,
        Category::Cli => &CLI_BUNDLES,
        Category::Script => &SCRIPT_BUNDLES,
    }
}

/// Result of rendering one template body: the output text plus the set of
/// placeholder names the body actually referenced.
#[derive(Debug)]
pub struct Rendered {
    pub text: String,
    pub used: BTreeSet<String>,
}

/// Render a template body against a variable mapping.
///
/// Pure function: no I/O, no globals, no randomness. `${name}` is replaced
/// by the mapped value; a reference to an unmapped name is a fatal
/// [`SprigError::MissingVariable`] naming the bundle and placeholder.
/// A `${...}` sequence that is not a well-formed identifier is passed
/// through literally.
pub fn render(bundle: &str, body: &str, vars: &VarMap) -> Result<Rendered> {
    let mut out = String::with_capacity(body.len());
    let mut used = BTreeSet::new();
    let mut rest = body;

    while let Some(pos) = rest.find("${") {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 2..];
        match after.find('}') {
            Some(close) if is_identifier(&after[..close]) => {
                let name = &after[..close];
                match vars.get(name) {
                    Some(value) => {
                        out.push_str(value);
                        used.insert(name.to_string());
                    }
                    None => {
                        return Err(SprigError::MissingVariable {
                            bundle: bundle.to_string(),
                            placeholder: name.to_string(),
                        });
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                // Not a placeholder; emit the delimiter literally and move on.
                out.push_str("${");
                rest = after;
            }
        }
    }
    out.push_str(rest);

    Ok(Rendered { text: out, used })
}

/// Every well-formed placeholder name referenced by a template body.
pub fn placeholders(body: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut rest = body;
    while let Some(pos) = rest.find("${") {
        let after = &rest[pos + 2..];
        match after.find('}') {
            Some(close) if is_identifier(&after[..close]) => {
                names.insert(after[..close].to_string());
                rest = &after[close + 1..];
            }
            _ => rest = after,
        }
    }
    names
}

/// Placeholder names are ASCII identifiers: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
