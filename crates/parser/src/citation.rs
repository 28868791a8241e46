use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref CITATION_REGEX: Regex =
        Regex::new(r"\[([0-9]+)\]").expect("Failed to compile citation regex");
    static ref ENTRY_REGEX: Regex =
        Regex::new(r"(?m)^\[([0-9]+)\]").expect("Failed to compile bibliography entry regex");
    static ref LINK_REGEX: Regex =
        Regex::new(r"\[.*?\]\((\./.*?)\)").expect("Failed to compile relative link regex");
}

// Numbers too large for u64 are not meaningful citation indices.
fn numbers<'a>(regex: &'a Regex, text: &'a str) -> impl Iterator<Item = u64> + 'a {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<u64>().ok())
}

/// Distinct citation numbers in `text`, ascending.
pub fn unique_citations(text: &str) -> BTreeSet<u64> {
    numbers(&CITATION_REGEX, text).collect()
}

/// Numbers of bibliography entries: `[N]` at the very start of a line.
pub fn bibliography_entries(body: &str) -> BTreeSet<u64> {
    numbers(&ENTRY_REGEX, body).collect()
}

/// Targets of markdown links whose path starts with `./`.
pub fn relative_links(text: &str) -> Vec<&str> {
    LINK_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
