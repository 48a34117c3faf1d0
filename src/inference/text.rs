//! Low-level text heuristics: normalization, filler stripping, and the naive
//! singular/plural rules used to derive resource and model names.
//!
//! These are deliberately approximate. The hard contract is that every
//! function is total and deterministic; the linguistics are best-effort.

/// Words carrying no naming information: request verbs, articles, and the
/// generic nouns people wrap requests in ("app", "tool", "program").
const FILLER: &[&str] = &[
    "build", "me", "a", "an", "the", "create", "make", "generate", "write",
    "for", "to", "with", "using", "that", "and", "app", "application", "tool",
    "script", "program", "please", "can", "you", "i", "want", "need", "some",
    "new", "my",
];

/// Lower-case the text and collapse every non-alphanumeric run to a single
/// space. The classifier and all naming heuristics match against this form.
pub(crate) fn normalize(text: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            current.push(c.to_ascii_lowercase());
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words.join(" ")
}

/// Normalized words with filler removed. The remainder is what naming
/// heuristics work from; may be empty for contentless requests.
pub(crate) fn significant_words(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|w| !FILLER.contains(w))
        .map(str::to_string)
        .collect()
}

/// Capitalize the first letter of each word and join with spaces.
pub(crate) fn title_case(words: &[String]) -> String {
    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-case the first character of a word.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Naive English singularization.
///
/// Handles the regular patterns only: "users" -> "user", "stories" -> "story",
/// "boxes" -> "box". Words ending in "ss"/"us" and longer "-is" nouns
/// (analysis, basis) pass through unchanged.
pub(crate) fn singularize(word: &str) -> String {
    if word.len() <= 3 || word.ends_with("ss") || word.ends_with("us") {
        return word.to_string();
    }
    if word.len() >= 5 && word.ends_with("is") {
        return word.to_string();
    }
    if word.len() > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    for suffix in ["xes", "ches", "shes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with('s') {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Naive English pluralization, the inverse of [`singularize`] on its
/// regular cases: "user" -> "users", "story" -> "stories", "box" -> "boxes".
pub(crate) fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if let Some(stem) = word.strip_suffix('y')
        && !stem.is_empty()
        && !ends_with_vowel(stem)
    {
        return format!("{}ies", stem);
    }
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{}es", word);
    }
    format!("{}s", word)
}

/// Whether a word reads as an English plural worth treating as a resource
/// collection ("users", "notes"). Excludes "-ss"/"-us"/"-is" endings.
pub(crate) fn looks_plural(word: &str) -> bool {
    word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
}

/// Whether a word is a gerund ("managing", "tracking") and therefore a poor
/// resource-noun candidate.
pub(crate) fn is_gerund(word: &str) -> bool {
    word.len() > 4 && word.ends_with("ing")
}

fn ends_with_vowel(word: &str) -> bool {
    matches!(word.chars().last(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Build: a WEB dashboard!!!"), "build a web dashboard");
        assert_eq!(normalize("command-line"), "command line");
        assert_eq!(normalize("  "), "");
    }

    #[test]
    fn significant_words_drops_filler() {
        assert_eq!(
            significant_words("build me a todo web app"),
            vec!["todo".to_string(), "web".to_string()]
        );
        assert!(significant_words("please make me an app").is_empty());
    }

    #[test]
    fn title_case_joins_capitalized_words() {
        let words = vec!["todo".to_string(), "list".to_string()];
        assert_eq!(title_case(&words), "Todo List");
        assert_eq!(title_case(&[]), "");
    }

    #[test]
    fn singularize_regular_forms() {
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("stories"), "story");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("branches"), "branch");
        assert_eq!(singularize("notes"), "note");
    }

    #[test]
    fn singularize_leaves_irregular_endings_alone() {
        assert_eq!(singularize("analysis"), "analysis");
        assert_eq!(singularize("class"), "class");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("data"), "data");
        assert_eq!(singularize("api"), "api");
    }

    #[test]
    fn pluralize_regular_forms() {
        assert_eq!(pluralize("user"), "users");
        assert_eq!(pluralize("story"), "stories");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("branch"), "branches");
        assert_eq!(pluralize("day"), "days");
    }

    #[test]
    fn looks_plural_excludes_false_friends() {
        assert!(looks_plural("users"));
        assert!(looks_plural("notes"));
        assert!(!looks_plural("class"));
        assert!(!looks_plural("status"));
        assert!(!looks_plural("analysis"));
        assert!(!looks_plural("gas"));
    }

    #[test]
    fn gerunds_are_detected() {
        assert!(is_gerund("managing"));
        assert!(is_gerund("tracking"));
        assert!(!is_gerund("ring"));
        assert!(!is_gerund("users"));
    }
}
