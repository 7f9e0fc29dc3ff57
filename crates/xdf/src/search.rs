//! Substring search across the element collections and the author index.

use indexmap::IndexMap;
use serde::Serialize;
use xdf_api::{Element, ElementRefs, Field, FieldGroup, Rule, Schema};

use crate::index::AuthorIndex;

/// Matches for one search term, borrowed from the [`crate::Database`].
///
/// Every sequence keeps the order of the underlying collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    pub schemas: Vec<&'a Schema>,
    pub fields: Vec<&'a Field>,
    pub groups: Vec<&'a FieldGroup>,
    pub rules: Vec<&'a Rule>,
    pub authors: Vec<(&'a str, &'a ElementRefs)>,
}

impl SearchResult<'_> {
    /// Number of matches across all five sequences
    pub fn len(&self) -> usize {
        self.schemas.len() + self.fields.len() + self.groups.len() + self.rules.len() + self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Elements whose id or name contains `term`.
///
/// Case-sensitive; `term` is matched literally.
pub fn search_collection<'a, T: Element>(
    collection: &'a IndexMap<String, T>,
    term: &str,
) -> Vec<&'a T> {
    collection
        .values()
        .filter(|element| element.id().contains(term) || element.name().contains(term))
        .collect()
}

/// Authors whose name contains `term`.
pub fn search_authors<'a>(authors: &'a AuthorIndex, term: &str) -> Vec<(&'a str, &'a ElementRefs)> {
    authors
        .iter()
        .filter(|(author, _)| author.contains(term))
        .map(|(author, refs)| (author.as_str(), refs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use xdf_api::ElementKind;

    fn rules() -> IndexMap<String, Rule> {
        serde_json::from_str(
            r#"{
                "R300": { "id": "R300", "name": "pflichtangabe klein" },
                "R100": { "id": "R100", "name": "Pflichtangabe Name" },
                "R200": { "id": "R200", "name": "Mindestlänge" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_matches_id_or_name() {
        let rules = rules();

        let by_id: Vec<_> = search_collection(&rules, "R2").into_iter().map(|r| r.id.as_str()).collect();
        assert_eq!(by_id, vec!["R200"]);

        let by_name: Vec<_> = search_collection(&rules, "länge").into_iter().map(|r| r.id.as_str()).collect();
        assert_eq!(by_name, vec!["R200"]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let rules = rules();

        let ids: Vec<_> = search_collection(&rules, "Pflicht").into_iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["R100"]);
    }

    #[test]
    fn test_results_keep_collection_order() {
        let rules = rules();

        let ids: Vec<_> = search_collection(&rules, "R").into_iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["R300", "R100", "R200"]);
    }

    #[test]
    fn test_author_filter_matches_name_substring() {
        let mut authors = AuthorIndex::new();
        authors.entry("Alice".to_string()).or_default().push(ElementKind::Schema, "S1");
        authors.entry("Malik".to_string()).or_default().push(ElementKind::Rule, "R1");

        let found = search_authors(&authors, "li");
        let names: Vec<_> = found.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Alice", "Malik"]);

        assert!(search_authors(&authors, "alice").is_empty());
    }
}
