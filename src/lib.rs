//! Match plain-language statements and render graph node literals as Cypher.
//!
//! The crate has two halves:
//!
//! - [`statement`]: compile a template like `"I have (numeric apple_count)
//!   apples."` into an anchored recognizer with one typed, named capture per
//!   placeholder, then test free text against it and extract values.
//! - [`node`]: resolve informal node-literal text — `(Matt)`,
//!   `(Employer, UMass Boston)`, or `(Person { name: "Matt", age: 31 })` —
//!   into a [`NodeLiteral`] and render it as a Cypher fragment.
//!
//! Defaults for label-free and attribute-name-free forms come from a
//! [`Context`]; [`Discourse`] is the shipped implementation.
//!
//! ```
//! use graphprose::{Discourse, Matcher, NodeLiteral};
//!
//! let matcher = Matcher::new(
//!     "(Person a) works at (Employer b).",
//!     "{{{a}}}-[:WORKS_AT]->{{{b}}}",
//! )?;
//! let result = matcher.matches("Matt works at UMass Boston.")?;
//!
//! let ctx = Discourse::new("Person", "name");
//! let person = NodeLiteral::from_capture(&result.get("a").unwrap().text, "Person", &ctx)?;
//! assert_eq!(person.to_cypher(), "(person_matt:Person { name: Matt })");
//! # Ok::<(), graphprose::Error>(())
//! ```

pub mod context;
pub mod error;
pub mod node;
pub mod statement;

pub use context::{Context, Discourse};
pub use error::{Error, FullFormPart, Result};
pub use node::{default_tag, tag, tag_in_context, NodeLiteral, TaggedValue};
pub use statement::{Capture, CompiledPattern, MatchResult, Matcher, Segment, TypeTag};
