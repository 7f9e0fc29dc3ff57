//! Common view over the four element collections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which collection an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Schema,
    Field,
    Group,
    Rule,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Schema,
        ElementKind::Field,
        ElementKind::Group,
        ElementKind::Rule,
    ];

    /// Top-level key of the collection in the exported document
    pub fn collection_name(self) -> &'static str {
        match self {
            ElementKind::Schema => "schemas",
            ElementKind::Field => "fields",
            ElementKind::Group => "groups",
            ElementKind::Rule => "rules",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}

/// Attributes shared by schemas, fields, groups and rules.
///
/// Search matches on `id` and `name`; author indexing uses `author`.
pub trait Element {
    const KIND: ElementKind;

    fn id(&self) -> &str;

    /// The exported `identifier`, falling back to `id` when absent.
    ///
    /// Shown on pages; lookups and routes always use `id`.
    fn identifier(&self) -> &str;

    fn name(&self) -> &str;

    fn version(&self) -> &str;

    /// The responsible author ("fachlicher Ersteller").
    ///
    /// Empty strings are reported as `None`, so callers never index them.
    fn author(&self) -> Option<&str>;
}

/// One element seen while scanning a [`crate::Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementEntry<'a> {
    pub kind: ElementKind,
    /// The mapping key the element was stored under
    pub key: &'a str,
    pub id: &'a str,
    pub author: Option<&'a str>,
}

pub(crate) fn non_empty(author: &Option<String>) -> Option<&str> {
    author.as_deref().filter(|a| !a.is_empty())
}
