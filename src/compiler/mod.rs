//! Specification compiler
//!
//! Translates a raw pattern specification into an anchored regular
//! expression in three stages:
//!
//! 1. extract every `%{...}` token, in order ([`extract`])
//! 2. classify each distinct token text and build a token -> fragment map,
//!    then substitute all occurrences in a single pass ([`classify`],
//!    [`extract::substitute_tokens`])
//! 3. wrap the result in `^`/`$` anchors and hand it to the regex engine
//!
//! Compilation either yields a [`CompiledPattern`] or fails with a
//! [`SpecError`] before any input line is looked at. There is no partial
//! success: an unclassifiable token aborts the whole run rather than being
//! passed through as literal text.

pub mod classify;
pub mod extract;

use std::collections::HashMap;
use std::fmt;

use regex::Regex;

const ANCHOR_START: &str = "^";
const ANCHOR_END: &str = "$";

/// Errors that can occur while compiling a specification
#[derive(Debug, Clone, PartialEq)]
pub enum SpecError {
    /// The specification contains no `%{...}` tokens at all.
    NoTokens,
    /// An empty token `%{}` was found.
    EmptyToken,
    /// A token matched none of the three grammar productions.
    UnknownToken(String),
    /// The digits after `S` in a spacing token are empty or do not fit a
    /// non-negative integer.
    InvalidSpaceCount(String),
    /// The substituted pattern was rejected by the regex engine (literal
    /// specification text is regex source and can be malformed).
    InvalidPattern(String),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::NoTokens => {
                write!(f, "Specification must contain at least one capture token")
            }
            SpecError::EmptyToken => write!(f, "Empty token %{{}} in specification"),
            SpecError::UnknownToken(token) => {
                write!(f, "Unrecognized token '%{{{}}}' in specification", token)
            }
            SpecError::InvalidSpaceCount(token) => {
                write!(f, "Space count in '%{{{}}}' is not a non-negative integer", token)
            }
            SpecError::InvalidPattern(msg) => write!(f, "Invalid regex pattern: {}", msg),
        }
    }
}

impl std::error::Error for SpecError {}

/// A specification compiled down to an anchored regular expression.
///
/// Matching is whole-line: the pattern is wrapped in `^`/`$`, so a line
/// either fully matches or is rejected; substring hits never count.
#[derive(Debug)]
pub struct CompiledPattern {
    raw: String,
    pattern: String,
    regex: Regex,
}

impl CompiledPattern {
    /// Compile a raw specification string.
    ///
    /// # Arguments
    /// * `spec` - the specification text, literal text mixed with
    ///   `%{#}` / `%{#G}` / `%{#S#}` tokens
    ///
    /// # Returns
    /// The compiled pattern, or the first specification error encountered.
    pub fn compile(spec: &str) -> Result<Self, SpecError> {
        let tokens = extract::extract_tokens(spec);
        if tokens.is_empty() {
            return Err(SpecError::NoTokens);
        }

        let mut fragments: HashMap<String, String> = HashMap::new();
        for token in &tokens {
            if !fragments.contains_key(token) {
                let class = classify::classify(token)?;
                fragments.insert(token.clone(), class.fragment());
            }
        }

        let substituted = extract::substitute_tokens(spec, &fragments);
        if substituted == spec {
            return Err(SpecError::NoTokens);
        }

        let pattern = format!("{}{}{}", ANCHOR_START, substituted, ANCHOR_END);
        let regex =
            Regex::new(&pattern).map_err(|e| SpecError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            raw: spec.to_string(),
            pattern,
            regex,
        })
    }

    /// Test whether a line fully matches the compiled pattern.
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// The final anchored regex source.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The untouched raw specification.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}
