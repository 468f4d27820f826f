//! Token sets used for the skills and description overlap scores.

use std::collections::BTreeSet;

/// Filler words dropped from keyword sets.
pub const STOP_WORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Keywords must be longer than this many characters.
const MIN_KEYWORD_LEN: usize = 2;

/// Splits a comma-separated skill list into a lower-cased, trimmed, deduplicated set.
/// Empty entries (`"Rust,,Go"`, trailing commas) are dropped.
pub fn parse_skills(raw: &str) -> BTreeSet<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fuzzy skill comparison: either token contains the other.
/// `"react"` matches `"reactjs"`, `"node"` matches `"node.js"`.
pub fn skills_overlap(candidate_skill: &str, vacancy_skill: &str) -> bool {
    candidate_skill.contains(vacancy_skill) || vacancy_skill.contains(candidate_skill)
}

/// Extracts the keyword set of a free-text description.
///
/// Lower-cases, splits on runs of non-word characters (word = ASCII letter,
/// digit or underscore), then drops short tokens and stop words.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|token| token.len() > MIN_KEYWORD_LEN && !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
