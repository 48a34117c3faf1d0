//! Tests for the request classifier.

use super::*;

#[test]
fn web_request_classifies_as_web() {
    let result = classify("build me a website with a dashboard");
    assert_eq!(result.category, Category::Web);
    let api_score = score_of(&result, Category::Api);
    assert!(result.score > api_score);
}

#[test]
fn api_request_classifies_as_api() {
    let result = classify("create a REST API for users with CRUD endpoints");
    assert_eq!(result.category, Category::Api);
    assert!(result.score > 0);
}

#[test]
fn cli_request_classifies_as_cli() {
    let result = classify("build a CLI tool with subcommands for managing notes");
    assert_eq!(result.category, Category::Cli);
}

#[test]
fn data_request_classifies_as_data() {
    let result = classify("analyze this CSV dataset and produce charts");
    assert_eq!(result.category, Category::Data);
}

#[test]
fn script_request_classifies_as_script() {
    let result = classify("write a backup script that runs on a schedule");
    assert_eq!(result.category, Category::Script);
}

#[test]
fn keyword_free_request_falls_back_to_default() {
    // Script has the lowest tie rank, so it wins the all-zero tie.
    let result = classify("blah blah blah");
    assert_eq!(result.category, Category::Script);
    assert_eq!(result.score, 0);
}

#[test]
fn empty_request_never_fails() {
    let result = classify("");
    assert_eq!(result.category, Category::Script);
    assert_eq!(result.ranked.len(), 5);
}

#[test]
fn tie_break_is_stable_across_runs() {
    for _ in 0..10 {
        let result = classify("do something completely unrelated");
        assert_eq!(result.category, Category::Script);
    }
}

#[test]
fn ranked_list_covers_all_categories_best_first() {
    let result = classify("build a flask dashboard page");
    assert_eq!(result.ranked.len(), 5);
    for pair in result.ranked.windows(2) {
        assert!(pair[0].1 >= pair[1].1, "ranked list must be sorted");
    }
    assert_eq!(result.ranked[0].0, result.category);
    assert_eq!(result.ranked[0].1, result.score);
}

#[test]
fn explicit_tech_overrides_keyword_scoring() {
    // "django" forces web even though the rest of the text leans api.
    let result = classify("use django to serve a json api backend");
    assert_eq!(result.category, Category::Web);
    assert_eq!(result.score, OVERRIDE_SCORE);
}

#[test]
fn explicit_fastapi_with_space_is_detected() {
    let result = classify("I want a Fast API service");
    assert_eq!(result.category, Category::Api);
    assert_eq!(result.score, OVERRIDE_SCORE);
}

#[test]
fn normalization_ignores_case_and_punctuation() {
    let a = classify("Build: a WEB dashboard!!!");
    let b = classify("build a web dashboard");
    assert_eq!(a.category, b.category);
    assert_eq!(a.score, b.score);
}

#[test]
fn prefix_stem_matches_word_starts() {
    let result = classify("automate the nightly cleanup");
    assert_eq!(result.category, Category::Script);
    assert!(result.score >= 3);
}

#[test]
fn hyphenated_command_line_matches_phrase_keyword() {
    let result = classify("a command-line utility");
    assert_eq!(result.category, Category::Cli);
    // "command" (3) + "command line" (4) both match, like the whole-word pass.
    assert!(score_of(&result, Category::Cli) >= 7);
}

#[test]
fn keyword_must_match_whole_words() {
    // "scripted" must not match the "script" keyword.
    let result = classify("scripted sequence");
    assert_eq!(score_of(&result, Category::Script), 0);
}

#[test]
fn classification_is_deterministic() {
    let a = classify("create a REST API for users");
    let b = classify("create a REST API for users");
    assert_eq!(a.category, b.category);
    assert_eq!(a.ranked, b.ranked);
}

fn score_of(result: &Classification, category: Category) -> u32 {
    result
        .ranked
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, s)| *s)
        .expect("ranked list must contain every category")
}
