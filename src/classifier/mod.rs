//! Request classifier for sprig.
//!
//! Scores a free-text request against five fixed keyword sets and returns
//! the best-matching category. Classification never fails: a request that
//! matches nothing still resolves deterministically through the tie-break
//! ordering, so the pipeline always has somewhere to dispatch.

mod keywords;
#[cfg(test)]
mod tests;

use crate::inference::text::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score assigned when the request explicitly names a technology
/// (e.g. "use fastapi"), making the override obvious in the ranked list.
pub const OVERRIDE_SCORE: u32 = 100;

/// The five fixed project categories.
///
/// The set is closed: dispatch is a `match`, not open-ended virtual dispatch,
/// and every category has exactly one registered agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Web,
    Api,
    Data,
    Cli,
    Script,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Web,
        Category::Api,
        Category::Data,
        Category::Cli,
        Category::Script,
    ];

    /// Short lower-case name used in output and serialization.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Api => "api",
            Category::Data => "data",
            Category::Cli => "cli",
            Category::Script => "script",
        }
    }

    /// Directory under the output root that holds this category's projects.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Web => "web_apps",
            Category::Api => "apis",
            Category::Data => "data_scripts",
            Category::Cli => "cli_tools",
            Category::Script => "scripts",
        }
    }

    /// Tie-break rank: lower wins when scores are equal.
    ///
    /// Ordered generic-before-specific (script, cli, data, api, web) so a
    /// keyword-free request lands on the plainest scaffold. This ordering is
    /// part of the classifier contract; changing it changes which category
    /// wins every tied or zero-score request.
    pub fn tie_rank(&self) -> u8 {
        match self {
            Category::Script => 0,
            Category::Cli => 1,
            Category::Data => 2,
            Category::Api => 3,
            Category::Web => 4,
        }
    }

}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying one request.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// The winning category.
    pub category: Category,
    /// The winner's score (0 for a keyword-free request).
    pub score: u32,
    /// All five categories with their scores, best first. Ties are ordered
    /// by `tie_rank`, so the list itself is deterministic.
    pub ranked: Vec<(Category, u32)>,
}

/// Classify a request into the best-matching category.
///
/// If the request explicitly names a technology (e.g. "use fastapi"), that
/// category wins outright with [`OVERRIDE_SCORE`]. Otherwise every category
/// keyword found in the normalized text adds its weight to that category's
/// score, and the strict maximum wins; ties (including the all-zero case)
/// resolve through [`Category::tie_rank`].
pub fn classify(text: &str) -> Classification {
    // Explicit tech override: checked before keyword scoring.
    if let Some(category) = keywords::explicit_tech(text) {
        let mut scores: Vec<(Category, u32)> =
            Category::ALL.iter().map(|&c| (c, 0)).collect();
        for entry in scores.iter_mut() {
            if entry.0 == category {
                entry.1 = OVERRIDE_SCORE;
            }
        }
        return rank(scores);
    }

    let normalized = normalize(text);
    let words: Vec<&str> = normalized.split_whitespace().collect();

    let scores: Vec<(Category, u32)> = Category::ALL
        .iter()
        .map(|&category| {
            let score = keywords::keyword_table(category)
                .iter()
                .filter(|(kw, _)| keyword_matches(kw, &words, &normalized))
                .map(|(_, weight)| weight)
                .sum();
            (category, score)
        })
        .collect();

    rank(scores)
}

/// Order scores best-first and pick the winner.
fn rank(mut scores: Vec<(Category, u32)>) -> Classification {
    scores.sort_by_key(|&(category, score)| (std::cmp::Reverse(score), category.tie_rank()));
    let (category, score) = scores[0];
    Classification {
        category,
        score,
        ranked: scores,
    }
}

/// The bare keyword terms for a category (weights dropped), used by
/// variable inference to strip request-type words from derived names.
pub(crate) fn keyword_terms(category: Category) -> impl Iterator<Item = &'static str> {
    keywords::keyword_table(category).iter().map(|(kw, _)| *kw)
}

/// Match one keyword against the normalized request.
///
/// - multi-word phrases ("command line") match as a whole-phrase substring
/// - prefix stems ("automat", "visuali") match any word starting with them
/// - everything else matches whole words only
fn keyword_matches(keyword: &str, words: &[&str], normalized: &str) -> bool {
    if keyword.contains(' ') {
        let padded = format!(" {} ", normalized);
        return padded.contains(&format!(" {} ", keyword));
    }
    if keywords::PREFIX_STEMS.contains(&keyword) {
        return words.iter().any(|w| w.starts_with(keyword));
    }
    words.contains(&keyword)
}
