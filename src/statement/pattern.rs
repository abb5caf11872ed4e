//! Recognizer compilation — from a segment sequence to one anchored regex.
//!
//! Literal segments are escaped and match themselves exactly; each
//! placeholder becomes a named capture group whose body depends on its
//! declared kind. The whole pattern is anchored at both ends, so a statement
//! must consume the entire input line, and segments compile strictly in
//! template order — literal text anchors every placeholder's boundaries, so
//! no grouping search is needed.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

use super::grammar::{Segment, TypeTag};

/// Capture bounds. Repetition is bounded by name rather than left open so a
/// hostile template cannot smuggle unbounded quantifiers into the compiled
/// pattern.
const MAX_NUMERIC_RUN: usize = 32;
const MAX_DECIMAL_RUN: usize = 16;
const MAX_STRING_RUN: usize = 512;
const MAX_NODE_RUN: usize = 128;

/// An anchored recognizer plus the ordered placeholder type table.
///
/// Immutable once built; reusable across unlimited match attempts and safe
/// to share across threads for read-only matching.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    bindings: Vec<(String, TypeTag)>,
}

impl CompiledPattern {
    /// The underlying recognizer.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Source text of the compiled pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Placeholder name → declared kind, in template order.
    pub fn bindings(&self) -> &[(String, TypeTag)] {
        &self.bindings
    }

    /// True iff the whole of `text` matches.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Compile segments into a single anchored pattern with one named capture
/// group per placeholder.
///
/// Placeholder names must be identifiers, as produced by
/// [`segment`](super::grammar::segment); duplicate names are rejected here
/// as well so hand-built segment sequences get the same guarantee.
pub fn compile(segments: &[Segment]) -> Result<CompiledPattern> {
    let mut bindings: Vec<(String, TypeTag)> = Vec::new();
    let mut pattern = String::from("^");

    for (index, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(text) => {
                let trailing_period = index + 1 == segments.len() && text.ends_with('.');
                if trailing_period {
                    // The sentence-terminating period is optional in input.
                    pattern.push_str(&regex::escape(&text[..text.len() - 1]));
                    pattern.push_str(r"\.?");
                } else {
                    pattern.push_str(&regex::escape(text));
                }
            }
            Segment::Placeholder { name, kind } => {
                if bindings.iter().any(|(bound, _)| bound == name) {
                    return Err(Error::DuplicatePlaceholder {
                        statement: statement_text(segments),
                        name: name.clone(),
                    });
                }
                pattern.push_str(&format!("(?P<{name}>{})", capture_body(kind)));
                bindings.push((name.clone(), kind.clone()));
            }
        }
    }
    pattern.push('$');

    // Bounded Unicode capture bodies (e.g. two `\p{L}` node groups) can push
    // the compiled program past regex's default 10 MiB size limit even though
    // repetition is bounded; raise the ceiling so these well-formed patterns
    // compile. The accepted language is unchanged — the limit only gates
    // whether compilation succeeds, not what the pattern matches.
    const COMPILE_SIZE_LIMIT: usize = 64 * 1024 * 1024;
    let regex = RegexBuilder::new(&pattern)
        .size_limit(COMPILE_SIZE_LIMIT)
        .build()
        .expect("escaped literals and bounded capture bodies always compile");
    Ok(CompiledPattern { regex, bindings })
}

fn capture_body(kind: &TypeTag) -> String {
    match kind {
        // Raw digits with comma grouping; commas are preserved in the
        // capture, parsing is the value tagger's job.
        TypeTag::Numeric => format!(
            r"[0-9,]{{1,{MAX_NUMERIC_RUN}}}(?:\.[0-9]{{1,{MAX_DECIMAL_RUN}}})?"
        ),
        // Quotes are part of the capture.
        TypeTag::String => format!(r#""[^"]{{0,{MAX_STRING_RUN}}}""#),
        // Unicode letters, digits, spaces, and periods: multi-word proper
        // names, initials, accented characters. Lazy, so a capture at the
        // end of a sentence leaves the optional trailing period out.
        TypeTag::Node(_) => format!(r"[\p{{L}}\p{{N}} .]{{1,{MAX_NODE_RUN}}}?"),
    }
}

/// Reassemble the template text for diagnostics.
fn statement_text(segments: &[Segment]) -> String {
    let mut text = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(literal) => text.push_str(literal),
            Segment::Placeholder { name, kind } => {
                let kind_word = match kind {
                    TypeTag::Numeric => "numeric",
                    TypeTag::String => "string",
                    TypeTag::Node(label) => label.as_str(),
                };
                text.push('(');
                text.push_str(kind_word);
                text.push(' ');
                text.push_str(name);
                text.push(')');
            }
        }
    }
    text
}
