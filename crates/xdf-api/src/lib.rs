//! Shared data model for XDatenfelder exports.
//!
//! The types here mirror the JSON document produced by an XDatenfelder
//! export: four keyed collections (schemas, fields, groups, rules) plus the
//! derived author cross-reference and dashboard shapes that the database
//! hands to frontends.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod element;
pub mod records;
pub mod refs;

pub use element::{Element, ElementEntry, ElementKind};
pub use records::{
    CodeListReference, Field, FieldGroup, FieldKind, Genericode, Labels, Metadata, Rule, Schema,
};
pub use refs::{DashboardData, ElementRefs};

/// The raw document: one insertion-ordered mapping per entity collection.
///
/// Keys are the element ids. Ordering follows the source document, which is
/// what search results and author cross-references are built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub schemas: IndexMap<String, Schema>,
    pub fields: IndexMap<String, Field>,
    pub groups: IndexMap<String, FieldGroup>,
    pub rules: IndexMap<String, Rule>,
}

impl Dataset {
    /// Iterate every element of the document in scan order:
    /// schemas, then fields, then groups, then rules.
    pub fn elements(&self) -> impl Iterator<Item = ElementEntry<'_>> + '_ {
        entries(&self.schemas)
            .chain(entries(&self.fields))
            .chain(entries(&self.groups))
            .chain(entries(&self.rules))
    }

    /// Total number of elements across all four collections
    pub fn len(&self) -> usize {
        self.schemas.len() + self.fields.len() + self.groups.len() + self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn entries<T: Element>(collection: &IndexMap<String, T>) -> impl Iterator<Item = ElementEntry<'_>> {
    collection.iter().map(|(key, element)| ElementEntry {
        kind: T::KIND,
        key,
        id: element.id(),
        author: element.author(),
    })
}
