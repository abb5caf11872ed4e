//! Matcher façade — one compiled statement paired with a substitution
//! template.
//!
//! A [`Matcher`] is built once from a statement template and reused for any
//! number of match attempts. Captured substrings are re-tagged with the kind
//! declared in the template, never re-inferred from the text.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};

use super::grammar::{self, TypeTag};
use super::pattern::{self, CompiledPattern};

/// A captured placeholder value, tagged with its declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capture {
    pub tag: TypeTag,
    pub text: String,
}

/// Placeholder name → typed capture.
///
/// Keys are exactly the placeholder name set of the statement the text
/// matched; iteration order is sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchResult {
    captures: BTreeMap<String, Capture>,
}

impl MatchResult {
    pub fn get(&self, name: &str) -> Option<&Capture> {
        self.captures.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.captures.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Capture)> {
        self.captures.iter().map(|(name, cap)| (name.as_str(), cap))
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }
}

/// A statement template compiled to a recognizer, plus the substitution
/// template its captures will eventually be written into.
///
/// Purely functional: nothing here mutates after construction.
#[derive(Debug, Clone)]
pub struct Matcher {
    statement: String,
    template: String,
    pattern: CompiledPattern,
}

impl Matcher {
    /// Compile `statement` and pair it with a substitution `template`.
    pub fn new(statement: &str, template: &str) -> Result<Self> {
        let segments = grammar::segment(statement)?;
        let pattern = pattern::compile(&segments)?;
        Ok(Self {
            statement: statement.to_string(),
            template: template.to_string(),
            pattern,
        })
    }

    /// The statement template this matcher was compiled from.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// The substitution template paired at construction.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The compiled recognizer, exposed for inspection.
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// True iff the whole of `text` matches the statement.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Extract typed captures from `text`, keyed by placeholder name.
    ///
    /// Fails with [`Error::MatchFailure`] when the pattern does not match.
    pub fn matches(&self, text: &str) -> Result<MatchResult> {
        let caps = self
            .pattern
            .regex()
            .captures(text)
            .ok_or_else(|| Error::MatchFailure {
                text: text.to_string(),
                statement: self.statement.clone(),
            })?;

        let mut captures = BTreeMap::new();
        for (name, tag) in self.pattern.bindings() {
            if let Some(found) = caps.name(name) {
                captures.insert(
                    name.clone(),
                    Capture {
                        tag: tag.clone(),
                        text: found.as_str().to_string(),
                    },
                );
            }
        }
        Ok(MatchResult { captures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(tag: TypeTag, text: &str) -> Capture {
        Capture {
            tag,
            text: text.to_string(),
        }
    }

    #[test]
    fn numeric_capture_without_commas() {
        let matcher = Matcher::new(
            "I have (numeric apple_count) apples.",
            "(:Person { apples: {{apple_count}} })",
        )
        .unwrap();
        let result = matcher.matches("I have 10 apples.").unwrap();
        assert_eq!(
            result.get("apple_count"),
            Some(&capture(TypeTag::Numeric, "10"))
        );
    }

    #[test]
    fn numeric_capture_keeps_commas_raw() {
        let matcher = Matcher::new("I have (numeric apple_count) apples.", "").unwrap();
        let result = matcher.matches("I have 1,000 apples.").unwrap();
        assert_eq!(
            result.get("apple_count"),
            Some(&capture(TypeTag::Numeric, "1,000"))
        );
    }

    #[test]
    fn string_capture_keeps_quotes() {
        let matcher = Matcher::new("I have a dog named (string dog_name).", "").unwrap();
        let result = matcher.matches("I have a dog named \"Fido\".").unwrap();
        assert_eq!(
            result.get("dog_name"),
            Some(&capture(TypeTag::String, "\"Fido\""))
        );
    }

    #[test]
    fn mixed_captures_are_typed_by_declaration() {
        let matcher =
            Matcher::new("(Person a) gave (Person b) $(numeric amt).", "").unwrap();
        let result = matcher.matches("Matt gave Hélène $2,000.").unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(
            result.get("a"),
            Some(&capture(TypeTag::Node("Person".to_string()), "Matt"))
        );
        assert_eq!(
            result.get("b"),
            Some(&capture(TypeTag::Node("Person".to_string()), "Hélène"))
        );
        assert_eq!(result.get("amt"), Some(&capture(TypeTag::Numeric, "2,000")));
    }

    #[test]
    fn result_keys_are_exactly_the_placeholder_names() {
        let matcher =
            Matcher::new("(Person a) gave (Person b) $(numeric amt).", "").unwrap();
        let result = matcher.matches("Matt gave Hélène $2,000.").unwrap();
        let names: Vec<&str> = result.names().collect();
        assert_eq!(names, vec!["a", "amt", "b"]);
    }

    #[test]
    fn non_matching_text_is_a_match_failure() {
        let matcher = Matcher::new("I have (numeric n) apples.", "").unwrap();
        assert!(!matcher.is_match("I have no apples."));
        let err = matcher.matches("I have no apples.").unwrap_err();
        assert_eq!(
            err,
            Error::MatchFailure {
                text: "I have no apples.".to_string(),
                statement: "I have (numeric n) apples.".to_string(),
            }
        );
    }

    #[test]
    fn accessors_expose_the_construction_inputs() {
        let matcher = Matcher::new(
            "I have (numeric n) apples.",
            "(:Person { apples: {{n}} })",
        )
        .unwrap();
        assert_eq!(matcher.statement(), "I have (numeric n) apples.");
        assert_eq!(matcher.template(), "(:Person { apples: {{n}} })");
        assert!(matcher.pattern().as_str().starts_with('^'));
    }

    mod properties {
        use proptest::prelude::*;

        use super::Matcher;

        proptest! {
            // is_match and matches must never disagree.
            #[test]
            fn is_match_agrees_with_matches(text in "[ -~]{0,80}") {
                let matcher = Matcher::new("I have (numeric n) apples.", "").unwrap();
                prop_assert_eq!(matcher.is_match(&text), matcher.matches(&text).is_ok());
            }

            #[test]
            fn matching_numbers_always_capture(digits in "[0-9]{1,9}") {
                let matcher = Matcher::new("I have (numeric n) apples.", "").unwrap();
                let text = format!("I have {digits} apples.");
                let result = matcher.matches(&text).unwrap();
                prop_assert_eq!(&result.get("n").unwrap().text, &digits);
            }
        }
    }
}
