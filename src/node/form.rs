//! Node-literal surface forms — ordered recognition of the three syntaxes.
//!
//! Resolution tries each form in a fixed priority order and stops at the
//! first that fits:
//!
//! 1. Short form, `(Johnny B. Goode)` — one bare value, no label, no
//!    attribute name.
//! 2. Default-attribute form, `(Employer, UMass Boston)` — explicit label,
//!    no attribute name.
//! 3. Full form, `(Person { name: "Matt", age: 31 })` — explicit label and
//!    named, typed attributes.
//!
//! The order is kept as an explicit rule list rather than one alternation
//! regex so each rule can be audited and tested on its own. Labels and
//! attribute names left unset by the first two forms are filled from the
//! [`Context`] afterwards.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::Context;
use crate::error::{Error, FullFormPart, Result};

use super::literal::NodeLiteral;
use super::value::{self, TaggedValue};

/// `(Johnny B. Goode)` — one bare value.
static SHORT_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([\p{L}\p{N} .]+)\)$").unwrap());

/// `(Employer, UMass Boston)` — label, comma-space, bare value.
static DEFAULT_ATTR_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((\p{L}+), ([\p{L}\p{N} .]+)\)$").unwrap());

/// Any parenthesized run; the full-form label and brace block inside are
/// validated separately so their failures can be reported apart.
static INNER_CONTENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\((.*)\)$").unwrap());
static LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{L}+$").unwrap());
static BRACE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{(.*)\}$").unwrap());

/// (label, attributes) before context defaults are applied. Mirrors what
/// each surface form can actually say; `None` slots are filled later.
struct NodeInfo {
    label: Option<String>,
    attributes: Vec<(Option<String>, TaggedValue)>,
}

/// Resolve node-literal text against `ctx`.
pub fn resolve(text: &str, ctx: &dyn Context) -> Result<NodeLiteral> {
    resolve_at_depth(text, ctx, 0)
}

/// Resolve a bare fragment (e.g. a matched Node-typed capture) whose label
/// is already known. The fragment is wrapped in parentheses when it isn't,
/// and the given label fills the short form's missing one; the other forms
/// keep their own explicit label.
pub fn resolve_fragment(fragment: &str, label: &str, ctx: &dyn Context) -> Result<NodeLiteral> {
    let wrapped = ensure_wrapped(fragment);
    let mut info = recognize(&wrapped, ctx, 0)?;
    info.label = info.label.or_else(|| Some(label.to_string()));
    finish(info, ctx)
}

/// `depth` is this node's nesting level: 0 for a top-level literal, 1 for a
/// node appearing as an attribute value.
pub(crate) fn resolve_at_depth(text: &str, ctx: &dyn Context, depth: usize) -> Result<NodeLiteral> {
    let info = recognize(text, ctx, depth)?;
    finish(info, ctx)
}

/// Wrap a fragment in parentheses unless it already has them.
pub(crate) fn ensure_wrapped(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len() + 2);
    if !fragment.starts_with('(') {
        text.push('(');
    }
    text.push_str(fragment);
    if !fragment.ends_with(')') {
        text.push(')');
    }
    text
}

fn recognize(text: &str, ctx: &dyn Context, depth: usize) -> Result<NodeInfo> {
    if let Some(caps) = SHORT_FORM.captures(text) {
        return Ok(NodeInfo {
            label: None,
            attributes: vec![(None, value::default_tag(&caps[1]))],
        });
    }
    if let Some(caps) = DEFAULT_ATTR_FORM.captures(text) {
        return Ok(NodeInfo {
            label: Some(caps[1].to_string()),
            attributes: vec![(None, value::default_tag(&caps[2]))],
        });
    }
    if let Some(caps) = INNER_CONTENT.captures(text) {
        let inner = caps.get(1).unwrap().as_str();
        // Only a brace block marks an attempted full form; anything else in
        // parentheses is simply not a node literal.
        if inner.contains('{') {
            return full_form(text, inner, ctx, depth);
        }
    }
    Err(Error::MalformedNodeLiteral {
        text: text.to_string(),
    })
}

fn full_form(text: &str, inner: &str, ctx: &dyn Context, depth: usize) -> Result<NodeInfo> {
    let (label_part, attrs_part) = inner.split_once(' ').unwrap_or((inner, ""));
    if !LABEL.is_match(label_part) {
        return Err(Error::MalformedFullForm {
            text: text.to_string(),
            part: FullFormPart::Label,
            found: label_part.to_string(),
        });
    }
    let Some(block) = BRACE_BLOCK.captures(attrs_part) else {
        return Err(Error::MalformedFullForm {
            text: text.to_string(),
            part: FullFormPart::AttributeBlock,
            found: attrs_part.to_string(),
        });
    };

    let body = block.get(1).unwrap().as_str();
    let mut attributes = Vec::new();
    if !body.trim().is_empty() {
        for pair in body.split(',') {
            let Some((name, value_text)) = pair.split_once(':') else {
                return Err(Error::MalformedFullForm {
                    text: text.to_string(),
                    part: FullFormPart::AttributeBlock,
                    found: pair.to_string(),
                });
            };
            let value = value::tag_at_depth(value_text.trim(), Some(ctx), depth)?;
            attributes.push((Some(name.trim().to_string()), value));
        }
    }
    Ok(NodeInfo {
        label: Some(label_part.to_string()),
        attributes,
    })
}

/// Apply context defaults and build the literal. Duplicate attribute names
/// overwrite in place: last assignment wins, first position kept.
fn finish(info: NodeInfo, ctx: &dyn Context) -> Result<NodeLiteral> {
    let label = info
        .label
        .unwrap_or_else(|| ctx.default_node_label().to_string());

    let mut attributes: Vec<(String, TaggedValue)> = Vec::new();
    for (name, value) in info.attributes {
        let name = name.unwrap_or_else(|| ctx.default_attr_name_for_label(&label).to_string());
        match attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => attributes.push((name, value)),
        }
    }
    Ok(NodeLiteral::new(Some(label), attributes))
}
