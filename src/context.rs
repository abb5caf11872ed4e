//! Default-supplying context consumed during node resolution.
//!
//! The Short and Default-Attribute surface forms leave the label and/or the
//! attribute name unset; a [`Context`] fills the blanks. [`Discourse`] is the
//! shipped implementation, built programmatically or deserialized from a
//! small YAML document.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Supplies fallback labels and attribute names during node resolution.
pub trait Context {
    /// Label applied to node literals that carry none.
    fn default_node_label(&self) -> &str;

    /// Attribute name applied to values that carry none, per label.
    fn default_attr_name_for_label(&self, label: &str) -> &str;
}

/// A configurable [`Context`].
///
/// YAML shape:
///
/// ```yaml
/// default_label: Person
/// default_attribute: name
/// attribute_names:
///   Employer: company
/// ```
///
/// Labels absent from `attribute_names` fall back to `default_attribute`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Discourse {
    default_label: String,
    default_attribute: String,
    #[serde(default)]
    attribute_names: BTreeMap<String, String>,
}

impl Discourse {
    pub fn new(default_label: impl Into<String>, default_attribute: impl Into<String>) -> Self {
        Self {
            default_label: default_label.into(),
            default_attribute: default_attribute.into(),
            attribute_names: BTreeMap::new(),
        }
    }

    /// Register a per-label attribute name.
    pub fn with_attr_name(
        mut self,
        label: impl Into<String>,
        attr_name: impl Into<String>,
    ) -> Self {
        self.attribute_names.insert(label.into(), attr_name.into());
        self
    }

    /// Deserialize a discourse from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yml::from_str(source).map_err(|e| Error::MalformedDiscourse {
            message: e.to_string(),
        })
    }
}

impl Context for Discourse {
    fn default_node_label(&self) -> &str {
        &self.default_label
    }

    fn default_attr_name_for_label(&self, label: &str) -> &str {
        self.attribute_names
            .get(label)
            .map(String::as_str)
            .unwrap_or(&self.default_attribute)
    }
}
