//! Token grammar
//!
//! Three token productions are recognized, tried in declaration order:
//!
//! ```text
//! %{#}    capture token   digits only             -> ([\w\s]+)
//! %{#G}   greedy token    digits + marker G       -> (.*?)
//! %{#S#}  spacing token   digits? + S + count     -> \b\w+\b (\s\b\w+\b){count}
//! ```
//!
//! Classification scans for the marker letter, never by token length: the
//! identifier digits may be multi-digit, and a spacing token's identifier
//! prefix may be empty (`%{S2}`). Anything else is malformed.

use once_cell::sync::Lazy;
use regex::Regex;

use super::SpecError;

/// Eager word/space capturing group for capture tokens.
const CAPTURE_FRAGMENT: &str = r"([\w\s]+)";
/// Lazy any-character capturing group for greedy tokens.
const GREEDY_FRAGMENT: &str = r"(.*?)";
/// First word-boundary-delimited word of a spacing expansion.
const SPACING_WORD: &str = r"\b\w+\b";
/// Each additional whitespace-separated word of a spacing expansion.
const SPACING_GAP: &str = r"\s\b\w+\b";

static CAPTURE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static GREEDY_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+G$").unwrap());
static SPACING_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d*S(?P<count>\d*)$").unwrap());

/// The grammar production a token text belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenClass {
    /// `%{#}` — unbounded run of word/space characters.
    Capture,
    /// `%{#G}` — any characters, matched lazily so surrounding literal
    /// text in the specification constrains the match.
    Greedy,
    /// `%{#S#}` — one word followed by exactly `words` more
    /// whitespace-separated words.
    Spacing { words: u32 },
}

impl TokenClass {
    /// Render the regex fragment this class substitutes for its token.
    pub fn fragment(&self) -> String {
        match self {
            TokenClass::Capture => CAPTURE_FRAGMENT.to_string(),
            TokenClass::Greedy => GREEDY_FRAGMENT.to_string(),
            TokenClass::Spacing { words } => {
                let mut fragment = String::from(SPACING_WORD);
                for _ in 0..*words {
                    fragment.push_str(SPACING_GAP);
                }
                fragment
            }
        }
    }
}

/// Classify a token text into its grammar production.
///
/// Empty tokens, tokens matching no production, and spacing tokens whose
/// count is empty or does not fit a `u32` are all rejected; a token is
/// never passed through as literal text.
pub fn classify(token: &str) -> Result<TokenClass, SpecError> {
    if token.is_empty() {
        return Err(SpecError::EmptyToken);
    }
    if CAPTURE_TOKEN.is_match(token) {
        return Ok(TokenClass::Capture);
    }
    if GREEDY_TOKEN.is_match(token) {
        return Ok(TokenClass::Greedy);
    }
    if let Some(caps) = SPACING_TOKEN.captures(token) {
        let words = caps["count"]
            .parse::<u32>()
            .map_err(|_| SpecError::InvalidSpaceCount(token.to_string()))?;
        return Ok(TokenClass::Spacing { words });
    }
    Err(SpecError::UnknownToken(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_token() {
        assert_eq!(classify("1"), Ok(TokenClass::Capture));
        assert_eq!(classify("0"), Ok(TokenClass::Capture));
        assert_eq!(classify("23"), Ok(TokenClass::Capture));
    }

    #[test]
    fn test_greedy_token() {
        assert_eq!(classify("1G"), Ok(TokenClass::Greedy));
        assert_eq!(classify("42G"), Ok(TokenClass::Greedy));
    }

    #[test]
    fn test_spacing_token() {
        assert_eq!(classify("1S3"), Ok(TokenClass::Spacing { words: 3 }));
        assert_eq!(classify("1S0"), Ok(TokenClass::Spacing { words: 0 }));
        assert_eq!(classify("10S12"), Ok(TokenClass::Spacing { words: 12 }));
    }

    #[test]
    fn test_spacing_token_empty_identifier() {
        assert_eq!(classify("S2"), Ok(TokenClass::Spacing { words: 2 }));
    }

    #[test]
    fn test_empty_token_rejected() {
        assert_eq!(classify(""), Err(SpecError::EmptyToken));
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert_eq!(classify("1X"), Err(SpecError::UnknownToken("1X".to_string())));
        assert_eq!(classify("G1"), Err(SpecError::UnknownToken("G1".to_string())));
        assert_eq!(classify("abc"), Err(SpecError::UnknownToken("abc".to_string())));
        assert_eq!(classify("1G2"), Err(SpecError::UnknownToken("1G2".to_string())));
        assert_eq!(classify("-1"), Err(SpecError::UnknownToken("-1".to_string())));
    }

    #[test]
    fn test_spacing_count_missing() {
        assert_eq!(
            classify("1S"),
            Err(SpecError::InvalidSpaceCount("1S".to_string()))
        );
    }

    #[test]
    fn test_spacing_count_overflow() {
        assert_eq!(
            classify("1S4294967296"),
            Err(SpecError::InvalidSpaceCount("1S4294967296".to_string()))
        );
    }

    #[test]
    fn test_capture_fragment() {
        assert_eq!(TokenClass::Capture.fragment(), r"([\w\s]+)");
    }

    #[test]
    fn test_greedy_fragment() {
        assert_eq!(TokenClass::Greedy.fragment(), r"(.*?)");
    }

    #[test]
    fn test_spacing_fragments() {
        assert_eq!(TokenClass::Spacing { words: 0 }.fragment(), r"\b\w+\b");
        assert_eq!(
            TokenClass::Spacing { words: 2 }.fragment(),
            r"\b\w+\b\s\b\w+\b\s\b\w+\b"
        );
    }
}
