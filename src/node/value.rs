//! Value tagging — classifying raw tokens into typed values.
//!
//! Rules run in a fixed order, first match wins: quoted string, integer,
//! float, then (only when a context is available and the depth limit
//! allows) a nested node literal. [`default_tag`] is the lenient variant the
//! label-free surface forms use: anything unclassifiable comes back
//! unchanged as a raw string.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::context::Context;
use crate::error::{Error, Result};

use super::form;
use super::literal::NodeLiteral;

/// How many node-literal-as-attribute-value levels may nest. One: a node's
/// attribute may be a node, whose attributes may not.
pub(crate) const MAX_NESTING_DEPTH: usize = 1;

/// A classified attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaggedValue {
    Str(String),
    Int(i64),
    Float(f64),
    NodeRef(NodeLiteral),
}

static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^"(.+)"$"#).unwrap());
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9,]+$").unwrap());
static FLOAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9,]+\.[0-9]+$").unwrap());

/// Classify `token` without attempting a nested node parse.
pub fn tag(token: &str) -> Result<TaggedValue> {
    tag_at_depth(token, None, 0)
}

/// Classify `token`, additionally trying unrecognized tokens as a nested
/// node literal resolved against `ctx`.
pub fn tag_in_context(token: &str, ctx: &dyn Context) -> Result<TaggedValue> {
    tag_at_depth(token, Some(ctx), 0)
}

/// Classify leniently: tokens `tag` would reject come back unchanged as raw
/// strings. This is the one place a classification failure is swallowed.
pub fn default_tag(token: &str) -> TaggedValue {
    tag(token).unwrap_or_else(|_| TaggedValue::Str(token.to_string()))
}

/// `depth` is the nesting level of the node whose attribute this token is;
/// the nested-node rule only fires while `depth < MAX_NESTING_DEPTH`.
pub(crate) fn tag_at_depth(
    token: &str,
    ctx: Option<&dyn Context>,
    depth: usize,
) -> Result<TaggedValue> {
    if let Some(caps) = QUOTED.captures(token) {
        return Ok(TaggedValue::Str(caps[1].to_string()));
    }
    if INTEGER.is_match(token) {
        let parsed = token.replace(',', "").parse::<i64>().map_err(|_| {
            Error::UnrecognizedValueType {
                token: token.to_string(),
                tried_node: false,
            }
        })?;
        return Ok(TaggedValue::Int(parsed));
    }
    if FLOAT.is_match(token) {
        let parsed = token.replace(',', "").parse::<f64>().map_err(|_| {
            Error::UnrecognizedValueType {
                token: token.to_string(),
                tried_node: false,
            }
        })?;
        return Ok(TaggedValue::Float(parsed));
    }
    if depth < MAX_NESTING_DEPTH {
        if let Some(ctx) = ctx {
            let wrapped = form::ensure_wrapped(token);
            return match form::resolve_at_depth(&wrapped, ctx, depth + 1) {
                Ok(node) => Ok(TaggedValue::NodeRef(node)),
                Err(_) => Err(Error::UnrecognizedValueType {
                    token: token.to_string(),
                    tried_node: true,
                }),
            };
        }
    }
    Err(Error::UnrecognizedValueType {
        token: token.to_string(),
        tried_node: false,
    })
}

impl TaggedValue {
    /// Render for Cypher output. Template mode re-quotes strings so the
    /// value can be embedded into a substitution template.
    pub(crate) fn render(&self, template_mode: bool) -> String {
        match self {
            TaggedValue::Str(s) if template_mode => format!("\"{s}\""),
            TaggedValue::Str(s) => s.clone(),
            TaggedValue::Int(n) => n.to_string(),
            TaggedValue::Float(x) => x.to_string(),
            TaggedValue::NodeRef(node) => node.render_cypher(template_mode),
        }
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}
