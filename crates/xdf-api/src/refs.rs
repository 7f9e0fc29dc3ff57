//! Derived author index shapes.

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;

/// Ids of all elements one author is responsible for, grouped by collection.
///
/// Each sequence keeps source document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRefs {
    pub schema_refs: Vec<String>,
    pub field_refs: Vec<String>,
    pub group_refs: Vec<String>,
    pub rule_refs: Vec<String>,
}

impl ElementRefs {
    pub fn refs(&self, kind: ElementKind) -> &[String] {
        match kind {
            ElementKind::Schema => &self.schema_refs,
            ElementKind::Field => &self.field_refs,
            ElementKind::Group => &self.group_refs,
            ElementKind::Rule => &self.rule_refs,
        }
    }

    pub fn push(&mut self, kind: ElementKind, id: impl Into<String>) {
        let refs = match kind {
            ElementKind::Schema => &mut self.schema_refs,
            ElementKind::Field => &mut self.field_refs,
            ElementKind::Group => &mut self.group_refs,
            ElementKind::Rule => &mut self.rule_refs,
        };
        refs.push(id.into());
    }

    /// Number of referenced elements across all four collections
    pub fn total(&self) -> usize {
        self.schema_refs.len() + self.field_refs.len() + self.group_refs.len() + self.rule_refs.len()
    }
}

/// Statistics shown when no search is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// `(author, total reference count)`, highest count first
    pub top_authors: Vec<(String, usize)>,
}
