//! Specialist agents: one per category.
//!
//! The registry is a fixed static table, read-only after process start.
//! Each agent owns its category's template bundles, selects one from the
//! request text, and runs inference → schema check → render, producing the
//! whole project in memory before anything touches the disk.


use crate::classifier::Category;
use crate::error::{Result, SprigError};
use crate::fs::validate_relative_path;
use crate::inference::{infer, text};
use crate::templates::{self, Bundle, bundles_for};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One entry of the static agent registry.
#[derive(Debug, Serialize)]
pub struct AgentSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
}

/// The fixed Category → Agent registry. Exactly one agent per category.
pub static REGISTRY: [AgentSpec; 5] = [
    AgentSpec {
        name: "web",
        description: "Generates Flask web applications with HTML templates and CSS",
        category: Category::Web,
    },
    AgentSpec {
        name: "api",
        description: "Generates REST APIs with FastAPI and Pydantic models",
        category: Category::Api,
    },
    AgentSpec {
        name: "data",
        description: "Generates data analysis scripts with pandas and matplotlib",
        category: Category::Data,
    },
    AgentSpec {
        name: "cli",
        description: "Generates command-line tools using argparse",
        category: Category::Cli,
    },
    AgentSpec {
        name: "script",
        description: "Generates automation and file-processing scripts",
        category: Category::Script,
    },
];

/// Look up the agent for a category.
///
/// Every category has exactly one registered agent, so a miss here is an
/// internal wiring bug — surfaced as a fatal error, never swallowed.
pub fn lookup(category: Category) -> Result<&'static AgentSpec> {
    REGISTRY
        .iter()
        .find(|agent| agent.category == category)
        .ok_or_else(|| SprigError::UnknownCategory(category.name().to_string()))
}

/// One rendered file of a project, still in memory.
#[derive(Debug)]
pub struct ProjectFile {
    pub path: PathBuf,
    pub content: String,
}

/// A fully rendered project, ready to preview or write.
#[derive(Debug)]
pub struct RenderedProject {
    pub bundle: &'static str,
    pub files: Vec<ProjectFile>,
    /// Placeholders the bundle declares but no template references.
    /// Advisory only; signals schema drift, never aborts a run.
    pub unused: Vec<String>,
}

impl AgentSpec {
    /// Choose which of this agent's bundles fits the request.
    pub fn select_bundle(&self, request: &str) -> &'static Bundle {
        match self.category {
            Category::Data => select_data_bundle(request),
            Category::Script => select_script_bundle(request),
            // Single-bundle categories.
            _ => bundles_for(self.category)[0],
        }
    }

    /// Render the selected bundle entirely in memory.
    ///
    /// Schema coverage is verified before the first file renders, so a
    /// mismatch between bundle and inference rule never produces partial
    /// output. Relative paths are validated here too, so dry-run and real
    /// runs agree on what a request would produce.
    pub fn render_project(&self, request: &str) -> Result<RenderedProject> {
        let bundle = self.select_bundle(request);
        let vars = infer(request, self.category);
        bundle.check_schema(&vars)?;
        let narrowed = bundle.narrow(&vars);

        // Also catch references outside the declared schema up front, so a
        // drifted template can never render half a project before failing.
        for name in bundle.referenced() {
            if !narrowed.contains_key(&name) {
                return Err(SprigError::MissingVariable {
                    bundle: bundle.name.to_string(),
                    placeholder: name,
                });
            }
        }

        let mut files = Vec::with_capacity(bundle.files.len());
        let mut used = BTreeSet::new();
        for file in bundle.files {
            validate_relative_path(Path::new(file.path))?;
            let rendered = templates::render(bundle.name, file.body, &narrowed)?;
            used.extend(rendered.used);
            files.push(ProjectFile {
                path: PathBuf::from(file.path),
                content: rendered.text,
            });
        }

        let unused = bundle.unreferenced(&used);

        Ok(RenderedProject {
            bundle: bundle.name,
            files,
            unused,
        })
    }
}

/// Keyword-driven bundle selection for the data agent. First rule wins.
fn select_data_bundle(request: &str) -> &'static Bundle {
    let lower = text::normalize(request);
    if ["visuali", "chart", "plot", "graph"]
        .iter()
        .any(|w| lower.contains(w))
    {
        return &templates::DATA_VISUALIZER;
    }
    if ["csv", "process", "clean", "transform"]
        .iter()
        .any(|w| lower.contains(w))
    {
        return &templates::CSV_PROCESSOR;
    }
    &templates::PANDAS_ANALYSIS
}

/// Keyword-driven bundle selection for the script agent. First rule wins.
fn select_script_bundle(request: &str) -> &'static Bundle {
    let lower = text::normalize(request);
    if ["file", "rename", "move", "copy", "process", "convert"]
        .iter()
        .any(|w| lower.contains(w))
    {
        return &templates::FILE_PROCESSOR;
    }
    if ["schedule", "cron", "interval", "periodic", "monitor"]
        .iter()
        .any(|w| lower.contains(w))
    {
        return &templates::SCHEDULER;
    }
    &templates::BASIC_SCRIPT
}
