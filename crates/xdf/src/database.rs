//! The loaded dataset together with its derived indexes.

use tracing::{debug, info};
use xdf_api::{DashboardData, Dataset, ElementRefs, Field, FieldGroup, Rule, Schema};

use crate::error::{LoadError, Result};
use crate::index::{collect_author_refs, compute_dashboard_data, AuthorIndex};
use crate::search::{search_authors, search_collection, SearchResult};

/// Immutable, indexed view over one XDatenfelder export.
///
/// # Example
///
/// ```rust
/// use xdf::Database;
///
/// let db = Database::from_json_str(r#"{
///     "schemas": { "S1": { "id": "S1", "name": "Schema One", "fachlicherErsteller": "Alice" } },
///     "fields":  { "F1": { "id": "F1", "name": "Field One", "feldart": "label", "fachlicherErsteller": "Alice" } },
///     "groups":  {},
///     "rules":   {}
/// }"#).unwrap();
///
/// assert!(db.search("").is_none());
/// assert_eq!(db.search("S1").unwrap().schemas.len(), 1);
/// assert_eq!(db.dashboard_data().top_authors, vec![("Alice".to_string(), 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    data: Dataset,
    author_refs: AuthorIndex,
    dashboard: DashboardData,
}

impl Database {
    /// Index a parsed document.
    ///
    /// Fails with [`LoadError::IdMismatch`] when an element is stored under a
    /// key that differs from its own id.
    pub fn new(data: Dataset) -> Result<Self> {
        if let Some(entry) = data.elements().find(|entry| entry.key != entry.id) {
            return Err(LoadError::IdMismatch {
                collection: entry.kind,
                key: entry.key.to_string(),
                id: entry.id.to_string(),
            });
        }

        let author_refs = collect_author_refs(&data);
        let dashboard = compute_dashboard_data(&author_refs);

        info!(
            schemas = data.schemas.len(),
            fields = data.fields.len(),
            groups = data.groups.len(),
            rules = data.rules.len(),
            authors = author_refs.len(),
            "Indexed dataset"
        );

        Ok(Self {
            data,
            author_refs,
            dashboard,
        })
    }

    /// Search all collections for `term`.
    ///
    /// Returns `None` for an empty term, meaning no search is active.
    pub fn search(&self, term: &str) -> Option<SearchResult<'_>> {
        if term.is_empty() {
            return None;
        }

        let result = SearchResult {
            schemas: search_collection(&self.data.schemas, term),
            fields: search_collection(&self.data.fields, term),
            groups: search_collection(&self.data.groups, term),
            rules: search_collection(&self.data.rules, term),
            authors: search_authors(&self.author_refs, term),
        };
        debug!(term, matches = result.len(), "Search finished");

        Some(result)
    }

    pub fn get_schema(&self, id: &str) -> Option<&Schema> {
        self.data.schemas.get(id)
    }

    pub fn get_field(&self, id: &str) -> Option<&Field> {
        self.data.fields.get(id)
    }

    pub fn get_group(&self, id: &str) -> Option<&FieldGroup> {
        self.data.groups.get(id)
    }

    pub fn get_rule(&self, id: &str) -> Option<&Rule> {
        self.data.rules.get(id)
    }

    /// Cross-reference record of one author
    pub fn author_refs(&self, author: &str) -> Option<&ElementRefs> {
        self.author_refs.get(author)
    }

    /// All authors in first-encounter order
    pub fn authors(&self) -> impl Iterator<Item = (&str, &ElementRefs)> + '_ {
        self.author_refs
            .iter()
            .map(|(author, refs)| (author.as_str(), refs))
    }

    /// Top-author ranking, computed once at construction
    pub fn dashboard_data(&self) -> &DashboardData {
        &self.dashboard
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }
}
