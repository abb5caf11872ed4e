//! Statement segmentation — splitting a template into literal and
//! placeholder runs.
//!
//! Placeholders are written `(KIND name)` where `KIND` is `numeric`,
//! `string`, or any other identifier, which is read as a node label:
//!
//! ```text
//! I have (numeric apple_count) apples.
//! (Person a) gave (Person b) $(numeric amt).
//! ```
//!
//! Everything between placeholders is literal text and must match itself
//! exactly at recognition time.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

/// Declared kind of a placeholder, carried through to match results.
///
/// The tag is fixed at compile time; captured text is never re-classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// Digits with optional comma grouping and decimal part.
    Numeric,
    /// A double-quoted run of characters, quotes included.
    String,
    /// A node reference carrying the placeholder's label.
    Node(String),
}

/// One run of a statement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Verbatim text between placeholders.
    Literal(String),
    /// A typed, named capture slot.
    Placeholder { name: String, kind: TypeTag },
}

/// A kind word followed by a placeholder name, in parentheses. Both are
/// identifiers, so node-literal text like `(Employer, UMass Boston)` never
/// reads as a placeholder.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([[:alpha:]][[:word:]]*)\s+([[:alpha:]][[:word:]]*)\)").unwrap()
});

/// Split a statement template into ordered segments.
///
/// Literal runs are preserved verbatim; the trailing-period allowance is
/// applied later, at pattern-compile time. Fails with
/// [`Error::DuplicatePlaceholder`] when two placeholders share a name.
pub fn segment(statement: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut cursor = 0;

    for caps in PLACEHOLDER.captures_iter(statement) {
        let whole = caps.get(0).unwrap();
        if whole.start() > cursor {
            segments.push(Segment::Literal(statement[cursor..whole.start()].to_string()));
        }

        let kind_word = caps.get(1).unwrap().as_str();
        let name = caps.get(2).unwrap().as_str();
        if !seen.insert(name) {
            return Err(Error::DuplicatePlaceholder {
                statement: statement.to_string(),
                name: name.to_string(),
            });
        }

        let kind = match kind_word {
            "numeric" => TypeTag::Numeric,
            "string" => TypeTag::String,
            label => TypeTag::Node(label.to_string()),
        };
        segments.push(Segment::Placeholder {
            name: name.to_string(),
            kind,
        });
        cursor = whole.end();
    }

    if cursor < statement.len() {
        segments.push(Segment::Literal(statement[cursor..].to_string()));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_literals_around_placeholders() {
        let segments = segment("I have (numeric apple_count) apples.").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("I have ".to_string()),
                Segment::Placeholder {
                    name: "apple_count".to_string(),
                    kind: TypeTag::Numeric,
                },
                Segment::Literal(" apples.".to_string()),
            ]
        );
    }

    #[test]
    fn kind_words_map_to_tags() {
        let segments =
            segment("(numeric n) (string s) (Person p)").unwrap();
        let kinds: Vec<&TypeTag> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder { kind, .. } => Some(kind),
                Segment::Literal(_) => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                &TypeTag::Numeric,
                &TypeTag::String,
                &TypeTag::Node("Person".to_string()),
            ]
        );
    }

    #[test]
    fn template_without_placeholders_is_one_literal() {
        let segments = segment("Matt works at UMass Boston.").unwrap();
        assert_eq!(
            segments,
            vec![Segment::Literal("Matt works at UMass Boston.".to_string())]
        );
    }

    #[test]
    fn adjacent_placeholders_need_no_literal_between() {
        let segments = segment("(Person a)(Person b)").unwrap();
        assert_eq!(segments.len(), 2);
        assert!(segments
            .iter()
            .all(|s| matches!(s, Segment::Placeholder { .. })));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = segment("(Person a) met (Person a).").unwrap_err();
        assert_eq!(
            err,
            Error::DuplicatePlaceholder {
                statement: "(Person a) met (Person a).".to_string(),
                name: "a".to_string(),
            }
        );
    }

    #[test]
    fn node_literal_text_is_not_a_placeholder() {
        // A comma, a brace, or a single word keeps parenthesized text literal.
        for statement in [
            "(Employer, UMass Boston)",
            "(Person { name: \"Matt\" })",
            "(Matt)",
        ] {
            let segments = segment(statement).unwrap();
            assert_eq!(segments, vec![Segment::Literal(statement.to_string())]);
        }
    }

    #[test]
    fn empty_template_yields_no_segments() {
        assert_eq!(segment("").unwrap(), vec![]);
    }
}
