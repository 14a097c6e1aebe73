//! Token extraction and substitution
//!
//! A pattern specification interleaves literal text with `%{...}` tokens.
//! Extraction is global, left-to-right and non-greedy: each `%{` pairs with
//! the nearest following `}`, and the scan resumes immediately after that
//! closing brace. Substitution walks the same occurrences in a single pass,
//! replacing each one through a token-text -> fragment map.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Token occurrence scan. Group 1 is the inner token text, which may be
/// empty (`%{}` extracts as the empty string and is rejected later).
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"%\{(.*?)\}").unwrap());

/// Collect the inner text of every `%{...}` occurrence, in order.
pub fn extract_tokens(spec: &str) -> Vec<String> {
    TOKEN
        .captures_iter(spec)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Replace every `%{token}` occurrence with its fragment from the map.
///
/// The caller must have a fragment for every token text that occurs in
/// `spec`; `compile` guarantees this by classifying the extracted tokens
/// before substituting.
pub fn substitute_tokens(spec: &str, fragments: &HashMap<String, String>) -> String {
    TOKEN
        .replace_all(spec, |caps: &Captures| fragments[&caps[1]].clone())
        .into_owned()
}
