//! Node literals — label, ordered attributes, derived nickname, Cypher
//! rendering.

use serde::Serialize;

use crate::context::Context;
use crate::error::Result;

use super::form;
use super::slug::slugify;
use super::value::TaggedValue;

/// A resolved graph-node literal.
///
/// Immutable once constructed, except for an explicit nickname override.
/// Attribute order is the order of first assignment in the source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeLiteral {
    label: Option<String>,
    attributes: Vec<(String, TaggedValue)>,
    nickname: String,
}

impl NodeLiteral {
    /// The nickname is derived here, once; it only changes through
    /// [`set_nickname`](Self::set_nickname).
    pub(crate) fn new(label: Option<String>, attributes: Vec<(String, TaggedValue)>) -> Self {
        let nickname = derived_nickname(label.as_deref(), &attributes);
        Self {
            label,
            attributes,
            nickname,
        }
    }

    /// Resolve one of the three surface forms against `ctx`.
    pub fn from_text(text: &str, ctx: &dyn Context) -> Result<Self> {
        form::resolve(text, ctx)
    }

    /// Resolve a bare matched fragment whose label came from a Node-typed
    /// placeholder.
    pub fn from_capture(fragment: &str, label: &str, ctx: &dyn Context) -> Result<Self> {
        form::resolve_fragment(fragment, label, ctx)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn attributes(&self) -> &[(String, TaggedValue)] {
        &self.attributes
    }

    /// Look up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&TaggedValue> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value)
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Replace the derived nickname. Equality compares the override.
    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    /// Render as a Cypher node literal:
    /// `(person_matt:Person { name: Matt, age: 31 })`.
    ///
    /// String values render bare; use [`to_cypher_template`](Self::to_cypher_template)
    /// when the output embeds into a substitution template.
    pub fn to_cypher(&self) -> String {
        self.render_cypher(false)
    }

    /// Like [`to_cypher`](Self::to_cypher), with string values re-wrapped in
    /// double quotes.
    pub fn to_cypher_template(&self) -> String {
        self.render_cypher(true)
    }

    /// The back-reference form, `(person_matt)`, for reusing a node
    /// elsewhere in a query template.
    pub fn nickname_node(&self) -> String {
        format!("({})", self.nickname)
    }

    pub(crate) fn render_cypher(&self, template_mode: bool) -> String {
        let mut head = self.nickname.clone();
        if let Some(label) = &self.label {
            head.push(':');
            head.push_str(label);
        }
        if self.attributes.is_empty() {
            return format!("({head})");
        }
        let attrs = self
            .attributes
            .iter()
            .map(|(name, value)| format!("{name}: {}", value.render(template_mode)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("({head} {{ {attrs} }})")
    }
}

fn derived_nickname(label: Option<&str>, attributes: &[(String, TaggedValue)]) -> String {
    let first_value = attributes
        .first()
        .map(|(_, value)| value.to_string())
        .unwrap_or_default();
    slugify(&format!("{}-{first_value}", label.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Discourse;

    fn ctx() -> Discourse {
        Discourse::new("Person", "name")
    }

    #[test]
    fn cypher_rendering_spaces_and_separators() {
        let node = NodeLiteral::from_text("(Person { name: \"Matt\", age: 31 })", &ctx()).unwrap();
        assert_eq!(
            node.to_cypher(),
            "(person_matt:Person { name: Matt, age: 31 })"
        );
    }

    #[test]
    fn template_rendering_requotes_strings() {
        let node = NodeLiteral::from_text("(Person { name: \"Matt\", age: 31 })", &ctx()).unwrap();
        assert_eq!(
            node.to_cypher_template(),
            "(person_matt:Person { name: \"Matt\", age: 31 })"
        );
    }

    #[test]
    fn attributeless_node_renders_without_a_block() {
        let node = NodeLiteral::from_text("(Person {})", &ctx()).unwrap();
        assert_eq!(node.to_cypher(), "(person:Person)");
    }

    #[test]
    fn nickname_node_is_the_back_reference() {
        let node = NodeLiteral::from_text("(Matt)", &ctx()).unwrap();
        assert_eq!(node.nickname_node(), "(person_matt)");
    }

    #[test]
    fn nickname_override_sticks_and_affects_equality() {
        let a = NodeLiteral::from_text("(Matt)", &ctx()).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set_nickname("matt");
        assert_eq!(b.nickname(), "matt");
        assert_eq!(b.nickname_node(), "(matt)");
        assert_ne!(a, b);
    }

    #[test]
    fn equality_requires_label_attributes_and_nickname() {
        let ctx = ctx();
        let a = NodeLiteral::from_text("(Matt)", &ctx).unwrap();
        let b = NodeLiteral::from_text("(Matt)", &ctx).unwrap();
        assert_eq!(a, b);

        let other_label = NodeLiteral::from_text("(Pet, Matt)", &ctx).unwrap();
        assert_ne!(a, other_label);

        let other_value = NodeLiteral::from_text("(Matthew)", &ctx).unwrap();
        assert_ne!(a, other_value);
    }

    #[test]
    fn accented_first_values_slug_to_ascii() {
        let node = NodeLiteral::from_text("(Hélène)", &ctx()).unwrap();
        assert_eq!(node.nickname(), "person_helene");
    }

    #[test]
    fn from_capture_builds_from_matched_text() {
        let node = NodeLiteral::from_capture("Johnny B. Goode", "Person", &ctx()).unwrap();
        assert_eq!(node.label(), Some("Person"));
        assert_eq!(node.nickname(), "person_johnny_b_goode");
        assert_eq!(
            node.to_cypher(),
            "(person_johnny_b_goode:Person { name: Johnny B. Goode })"
        );
    }
}
