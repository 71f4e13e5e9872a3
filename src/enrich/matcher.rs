//! Matching interface for structured-reference detection

/// Decides whether a data-store key is referenced by a piece of query text
///
/// Implementations receive the text pre-normalized by the caller (raw for
/// numeric train keys, lower-cased for FAQ topics).
pub trait Matcher: Send + Sync {
    /// True when `key` counts as referenced by `text`
    fn is_match(&self, text: &str, key: &str) -> bool;
}

/// Naive substring containment
///
/// Can false-positive when a key appears inside an unrelated word, or when
/// one train number is a substring of another. Swapping in a tokenized or
/// fuzzy [`Matcher`] requires no change to the enrichment flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn is_match(&self, text: &str, key: &str) -> bool {
        !key.is_empty() && text.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_matcher_finds_embedded_key() {
        let matcher = SubstringMatcher;
        assert!(matcher.is_match("status of train 12345 today", "12345"));
        assert!(!matcher.is_match("status of train 123 today", "12345"));
    }

    #[test]
    fn substring_matcher_is_case_sensitive() {
        let matcher = SubstringMatcher;
        assert!(!matcher.is_match("LUGGAGE_ALLOWANCE rules", "luggage_allowance"));
        assert!(matcher.is_match("luggage_allowance rules", "luggage_allowance"));
    }

    #[test]
    fn empty_key_never_matches() {
        let matcher = SubstringMatcher;
        assert!(!matcher.is_match("anything", ""));
    }
}
