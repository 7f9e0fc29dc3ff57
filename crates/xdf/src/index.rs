//! Indexes derived from a [`Dataset`] at construction time.

use indexmap::IndexMap;
use std::cmp::Reverse;
use xdf_api::{DashboardData, Dataset, ElementRefs};

/// Number of authors listed on the dashboard
pub const TOP_AUTHOR_LIMIT: usize = 5;

/// Author name to the ids of everything that author is responsible for.
///
/// Authors appear in order of first encounter.
pub type AuthorIndex = IndexMap<String, ElementRefs>;

/// Fold every authored element into its author's [`ElementRefs`].
///
/// Scans schemas, fields, groups and rules in that order, so each per-author
/// sequence follows document order. Elements without an author are skipped.
pub fn collect_author_refs(dataset: &Dataset) -> AuthorIndex {
    dataset
        .elements()
        .filter_map(|entry| entry.author.map(|author| (author, entry)))
        .fold(AuthorIndex::new(), |mut index, (author, entry)| {
            index
                .entry(author.to_string())
                .or_default()
                .push(entry.kind, entry.id);
            index
        })
}

/// Rank authors by total reference count.
///
/// Equal counts are ordered by author name so the ranking does not depend on
/// document order.
pub fn compute_dashboard_data(author_refs: &AuthorIndex) -> DashboardData {
    let mut counts: Vec<(String, usize)> = author_refs
        .iter()
        .map(|(author, refs)| (author.clone(), refs.total()))
        .collect();

    counts.sort_by(|(author_a, count_a), (author_b, count_b)| {
        Reverse(count_a)
            .cmp(&Reverse(count_b))
            .then_with(|| author_a.cmp(author_b))
    });
    counts.truncate(TOP_AUTHOR_LIMIT);

    DashboardData {
        top_authors: counts,
    }
}
