//! Identifier Sanitization
//!
//! Turns codenames and display names into PascalCase identifiers matching
//! `^[A-Za-z][A-Za-z0-9]*$`. Used for class names and property identifiers.
//!
//! Rules:
//! - Any run of characters outside `[A-Za-z0-9]` separates words
//! - Every word starts with a capital letter; digits are kept as-is, so
//!   trailing numeric words attach to the previous word (`numbers 1 2` → `Numbers12`)
//! - When the text splits into several words, SCREAMING words are lowered
//!   (`EVERYTHING_IS_UPPERCASE` → `EverythingIsUppercase`)
//! - A single-word text is never lowered, so acronyms survive on their own
//!   (`FAQ` → `FAQ`, but `FAQ section` → `FaqSection`). Lowering a lone word
//!   would break idempotence: `a b` → `AB` must sanitize back to `AB`
//! - A result that is empty or does not start with a letter is rejected,
//!   never truncated
//!
//! A sanitized identifier is a single word, so sanitizing it again returns it unchanged.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{ModelError, Result};

static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("separator pattern is valid"));

// =============================================================================
// Identifier
// =============================================================================

/// A valid PascalCase identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap a literal already known to satisfy the grammar
    pub(crate) fn from_static(text: &'static str) -> Self {
        debug_assert!(is_valid_identifier(text));
        Identifier(text.to_string())
    }

    /// Append an alphanumeric suffix, e.g. `Article` + `Typed`
    pub(crate) fn with_suffix(&self, suffix: &'static str) -> Self {
        debug_assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
        Identifier(format!("{}{}", self.0, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Sanitization
// =============================================================================

/// Sanitize arbitrary text into a PascalCase identifier.
///
/// Fails with [`ModelError::InvalidIdentifier`] when nothing usable remains.
pub fn sanitize(text: &str) -> Result<Identifier> {
    let words: Vec<&str> = WORD_SEPARATOR
        .split(text)
        .filter(|word| !word.is_empty())
        .collect();

    let lower_screaming = words.len() > 1;
    let mut identifier = String::with_capacity(text.len());
    for word in &words {
        identifier.push_str(&case_word(word, lower_screaming));
    }

    match identifier.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => Ok(Identifier(identifier)),
        _ => Err(ModelError::InvalidIdentifier {
            text: text.to_string(),
        }),
    }
}

/// Capitalize a word, optionally lowering an all-caps word first
fn case_word(word: &str, lower_screaming: bool) -> String {
    let screaming = word.chars().any(|c| c.is_ascii_uppercase())
        && !word.chars().any(|c| c.is_ascii_lowercase());

    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result = first.to_ascii_uppercase().to_string();
            if screaming && lower_screaming {
                result.extend(chars.map(|c| c.to_ascii_lowercase()));
            } else {
                result.extend(chars);
            }
            result
        }
    }
}

/// True when `text` already satisfies the identifier grammar
pub fn is_valid_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(text: &str) -> String {
        sanitize(text).unwrap().into_string()
    }

    #[test]
    fn test_worked_examples() {
        assert_eq!(ok("Simple name"), "SimpleName");
        assert_eq!(
            ok("Name with special chars & multiple    spaces."),
            "NameWithSpecialCharsMultipleSpaces"
        );
        assert_eq!(ok("EVERYTHING_IS_ -UPPERCASE"), "EverythingIsUppercase");
        assert_eq!(ok("date___time_field"), "DateTimeField");
        assert_eq!(ok("ends with numbers 1 2 3"), "EndsWithNumbers123");
    }

    #[test]
    fn test_rejected_inputs() {
        for text in ["", "  ", "-", "$^123", "123abc", "__"] {
            assert!(
                matches!(sanitize(text), Err(ModelError::InvalidIdentifier { .. })),
                "expected '{}' to be rejected",
                text
            );
        }
    }

    #[test]
    fn test_single_words_keep_their_casing() {
        assert_eq!(ok("article"), "Article");
        assert_eq!(ok("SimpleName"), "SimpleName");
        assert_eq!(ok("FAQ"), "FAQ");
        assert_eq!(ok("FAQ section"), "FaqSection");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "Simple name",
            "EVERYTHING_IS_ -UPPERCASE",
            "ends with numbers 1 2 3",
            "a b c",
            "related_articles_Article",
            "x 1 y",
            "Café crème",
        ];
        for input in inputs {
            let once = ok(input);
            assert_eq!(ok(&once), once, "not idempotent for '{}'", input);
            assert!(is_valid_identifier(&once));
        }
    }

    #[test]
    fn test_with_suffix_stays_valid() {
        let typed = sanitize("FAQ").unwrap().with_suffix("Typed");
        assert_eq!(typed, "FAQTyped");
        assert_eq!(ok(typed.as_str()), "FAQTyped");
    }

    #[test]
    fn test_non_ascii_is_a_separator() {
        assert_eq!(ok("Café crème"), "CafCrMe");
    }
}
