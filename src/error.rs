//! Crate-wide error taxonomy.
//!
//! Every variant carries the offending source text verbatim plus enough
//! context to say what shape was expected. Nothing here is retried or
//! recovered internally; the one lenient path in the crate is
//! [`default_tag`](crate::node::default_tag), which substitutes a raw string
//! instead of surfacing [`Error::UnrecognizedValueType`].

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A statement template used the same placeholder name twice.
    #[error(
        "placeholder `{name}` appears more than once in statement `{statement}`; \
         every placeholder needs a distinct name"
    )]
    DuplicatePlaceholder { statement: String, name: String },

    /// Node-literal text matched none of the three surface forms.
    #[error(
        "node literal `{text}` is not formatted correctly; expected either \
         (Matt), with a default label configured, or \
         (Employer, UMass Boston), with a default attribute configured"
    )]
    MalformedNodeLiteral { text: String },

    /// Full form was attempted but the label or the attribute block is bad.
    #[error(
        "full-form node literal `{text}` has an invalid {part}: got `{found}`; \
         expected e.g. (Person {{ name: \"Matt\", age: 31 }})"
    )]
    MalformedFullForm {
        text: String,
        part: FullFormPart,
        found: String,
    },

    /// A token was none of the recognized value shapes.
    #[error(
        "could not tell what type of value `{token}` is{}; \
         strings, integers, and floats (decimals) are detected",
        nested_note(.tried_node)
    )]
    UnrecognizedValueType { token: String, tried_node: bool },

    /// Input text did not match a compiled statement.
    #[error("text `{text}` does not match statement `{statement}`")]
    MatchFailure { text: String, statement: String },

    /// A discourse config document failed to deserialize.
    #[error("discourse config is not valid: {message}")]
    MalformedDiscourse { message: String },
}

/// Which half of a full-form node literal failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullFormPart {
    Label,
    AttributeBlock,
}

impl fmt::Display for FullFormPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FullFormPart::Label => write!(f, "label"),
            FullFormPart::AttributeBlock => write!(f, "attribute block"),
        }
    }
}

fn nested_note(tried_node: &bool) -> &'static str {
    if *tried_node {
        " (it did not parse as a nested node literal either)"
    } else {
        ""
    }
}
