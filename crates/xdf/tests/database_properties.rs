//! Property-based tests for the database indexes and search.

use indexmap::IndexMap;
use proptest::prelude::*;
use xdf::api::{Dataset, Element, ElementKind, Field, FieldGroup, FieldKind, Labels, Metadata, Rule, Schema};
use xdf::Database;

/// (id suffix, name, author) triples; ids are made unique per collection
fn element_strategy() -> impl Strategy<Value = Vec<(String, Option<String>)>> {
    prop::collection::vec(
        (
            "[A-Za-z ]{0,12}",
            prop::option::of(prop_oneof![
                Just("Alice".to_string()),
                Just("Bob".to_string()),
                Just("Carol".to_string()),
                Just("Dan".to_string()),
                Just("Eve".to_string()),
                Just("Frank".to_string()),
                Just(String::new()),
            ]),
        ),
        0..12,
    )
}

fn keyed<T>(prefix: &str, items: Vec<(String, Option<String>)>, build: impl Fn(String, String, Option<String>) -> T) -> IndexMap<String, T> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, (name, author))| {
            let id = format!("{prefix}{i}");
            (id.clone(), build(id, name, author))
        })
        .collect()
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    (element_strategy(), element_strategy(), element_strategy(), element_strategy()).prop_map(
        |(schemas, fields, groups, rules)| Dataset {
            schemas: keyed("S", schemas, |id, name, author| Schema {
                id,
                identifier: None,
                name,
                version: "1.0".to_string(),
                author,
                metadata: Metadata::default(),
                labels: Labels::default(),
                rules: vec![],
            }),
            fields: keyed("F", fields, |id, name, author| Field {
                id,
                identifier: None,
                name,
                version: "1.0".to_string(),
                author,
                metadata: Metadata::default(),
                labels: Labels::default(),
                rules: vec![],
                kind: FieldKind::Label { content: None },
            }),
            groups: keyed("G", groups, |id, name, author| FieldGroup {
                id,
                identifier: None,
                name,
                version: "1.0".to_string(),
                author,
                metadata: Metadata::default(),
                labels: Labels::default(),
                rules: vec![],
            }),
            rules: keyed("R", rules, |id, name, author| Rule {
                id,
                identifier: None,
                name,
                version: "1.0".to_string(),
                author,
                metadata: Metadata::default(),
                script: String::new(),
            }),
        },
    )
}

fn term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 ]{1,3}",
        Just("S1".to_string()),
        Just("F".to_string()),
        Just("li".to_string()),
        Just("a".to_string()),
    ]
}

fn matches<T: Element>(element: &T, term: &str) -> bool {
    element.id().contains(term) || element.name().contains(term)
}

fn expected<'a, T: Element>(collection: &'a IndexMap<String, T>, term: &str) -> Vec<&'a T> {
    collection.values().filter(|e| matches(*e, term)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_keys_match_stored_ids(data in dataset_strategy()) {
        let db = Database::new(data).unwrap();
        for entry in db.dataset().elements() {
            prop_assert_eq!(entry.key, entry.id);
        }
    }

    #[test]
    fn test_each_authored_element_referenced_exactly_once(data in dataset_strategy()) {
        let db = Database::new(data).unwrap();

        for entry in db.dataset().elements() {
            let hits: usize = db
                .authors()
                .flat_map(|(author, refs)| {
                    ElementKind::ALL
                        .into_iter()
                        .map(move |kind| (author, kind, refs.refs(kind).iter().filter(|id| *id == entry.id).count()))
                })
                .filter(|(_, _, count)| *count > 0)
                .map(|(author, kind, count)| {
                    assert_eq!(Some(author), entry.author, "{} listed under wrong author", entry.id);
                    assert_eq!(kind, entry.kind, "{} listed in wrong sequence", entry.id);
                    count
                })
                .sum();

            let expected_hits = usize::from(entry.author.is_some());
            prop_assert_eq!(hits, expected_hits, "element {}", entry.id);
        }
    }

    #[test]
    fn test_empty_term_is_never_a_search(data in dataset_strategy()) {
        let db = Database::new(data).unwrap();
        prop_assert!(db.search("").is_none());
    }

    #[test]
    fn test_search_matches_iff_id_or_name_contains_term(data in dataset_strategy(), term in term_strategy()) {
        let db = Database::new(data).unwrap();
        let result = db.search(&term).unwrap();
        let data = db.dataset();

        prop_assert_eq!(&result.schemas, &expected(&data.schemas, &term));
        prop_assert_eq!(&result.fields, &expected(&data.fields, &term));
        prop_assert_eq!(&result.groups, &expected(&data.groups, &term));
        prop_assert_eq!(&result.rules, &expected(&data.rules, &term));

        let authors: Vec<_> = db.authors().filter(|(name, _)| name.contains(term.as_str())).collect();
        prop_assert_eq!(&result.authors, &authors);
    }

    #[test]
    fn test_search_is_idempotent(data in dataset_strategy(), term in term_strategy()) {
        let db = Database::new(data).unwrap();
        prop_assert_eq!(db.search(&term), db.search(&term));
    }

    #[test]
    fn test_dashboard_is_sorted_and_counts_match(data in dataset_strategy()) {
        let db = Database::new(data).unwrap();
        let top = &db.dashboard_data().top_authors;

        prop_assert!(top.len() <= 5);
        prop_assert!(top.len() <= db.authors().count());
        for pair in top.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
            if pair[0].1 == pair[1].1 {
                prop_assert!(pair[0].0 < pair[1].0);
            }
        }
        for (author, count) in top {
            prop_assert_eq!(*count, db.author_refs(author).unwrap().total());
        }
        // nobody left out has a higher count than the last listed author
        if let Some((_, lowest)) = top.last() {
            for (author, refs) in db.authors() {
                if !top.iter().any(|(listed, _)| listed == author) {
                    prop_assert!(refs.total() <= *lowest);
                }
            }
        }
    }

    #[test]
    fn test_lookups_return_stored_record(data in dataset_strategy()) {
        let db = Database::new(data.clone()).unwrap();

        for (id, field) in &data.fields {
            prop_assert_eq!(db.get_field(id), Some(field));
        }
        for (id, rule) in &data.rules {
            prop_assert_eq!(db.get_rule(id), Some(rule));
        }
        prop_assert!(db.get_field("missing").is_none());
        prop_assert!(db.get_rule("missing").is_none());
    }
}
