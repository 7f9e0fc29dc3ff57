use super::text::version_label;
use crate::route::Route;
use crate::state::{State, Tab};
use crate::stylesheet::{field_kind_style, StyleId};
use crate::ui_element::UIElement;
use xdf::{Database, SearchResult};
use xdf_api::{Element, ElementRefs};

/// Search page: dashboard while no term is entered, tabbed results otherwise
pub fn overview_page(db: &Database, state: &State, display_limit: usize) -> Vec<UIElement> {
    let mut out = vec![
        UIElement::styled("XDatenfelder Explorer", StyleId::TitleMain),
        UIElement::row(vec![
            UIElement::styled("Suche:", StyleId::Muted),
            UIElement::text(format!("\"{}\"", state.term)),
        ]),
        UIElement::Blank,
    ];

    match db.search(&state.term) {
        None => {
            out.push(UIElement::styled("Keine Ergebnisse...", StyleId::Muted));
            out.push(UIElement::Blank);
            out.extend(dashboard(db));
        }
        Some(result) => {
            out.push(tab_bar(&result, state.tab));
            out.push(UIElement::Separator);
            out.extend(result_list(&result, state.tab, display_limit));
        }
    }
    out
}

fn dashboard(db: &Database) -> Vec<UIElement> {
    let data = db.dataset();
    let mut out = vec![
        UIElement::styled("Übersicht", StyleId::Heading),
        UIElement::row(vec![
            UIElement::badge(data.schemas.len().to_string(), StyleId::BadgeCount),
            UIElement::text(Tab::Schema.title()),
            UIElement::badge(data.fields.len().to_string(), StyleId::BadgeCount),
            UIElement::text(Tab::Field.title()),
            UIElement::badge(data.groups.len().to_string(), StyleId::BadgeCount),
            UIElement::text(Tab::Group.title()),
            UIElement::badge(data.rules.len().to_string(), StyleId::BadgeCount),
            UIElement::text(Tab::Rule.title()),
        ]),
        UIElement::Blank,
        UIElement::styled("Top-Autoren", StyleId::Heading),
    ];

    let top_authors = &db.dashboard_data().top_authors;
    if top_authors.is_empty() {
        out.push(UIElement::styled("Keine Autoren erfasst.", StyleId::Muted));
    }
    for (rank, (author, count)) in top_authors.iter().enumerate() {
        out.push(UIElement::row(vec![
            UIElement::text(format!("{}.", rank + 1)),
            UIElement::text(author),
            UIElement::badge(count.to_string(), StyleId::BadgeCount),
        ]));
    }
    out
}

fn tab_bar(result: &SearchResult<'_>, active: Tab) -> UIElement {
    let children = Tab::ALL
        .into_iter()
        .flat_map(|tab| {
            let style = if tab == active {
                StyleId::TabActive
            } else {
                StyleId::TabInactive
            };
            [
                UIElement::styled(tab.title(), style),
                UIElement::badge(tab_count(result, tab).to_string(), StyleId::BadgeCount),
            ]
        })
        .collect();
    UIElement::row(children)
}

fn tab_count(result: &SearchResult<'_>, tab: Tab) -> usize {
    match tab {
        Tab::Schema => result.schemas.len(),
        Tab::Field => result.fields.len(),
        Tab::Group => result.groups.len(),
        Tab::Rule => result.rules.len(),
        Tab::Author => result.authors.len(),
    }
}

fn result_list(result: &SearchResult<'_>, tab: Tab, limit: usize) -> Vec<UIElement> {
    match tab {
        Tab::Schema => capped(&result.schemas, limit, |schema| element_rows(*schema, vec![], None)),
        Tab::Field => capped(&result.fields, limit, |field| {
            let kind = UIElement::badge(field.kind.tag(), field_kind_style(&field.kind));
            element_rows(*field, vec![kind], Some(Route::Field(field.id.clone())))
        }),
        Tab::Group => capped(&result.groups, limit, |group| element_rows(*group, vec![], None)),
        Tab::Rule => capped(&result.rules, limit, |rule| {
            element_rows(*rule, vec![], Some(Route::Rule(rule.id.clone())))
        }),
        Tab::Author => capped(&result.authors, limit, |(author, refs)| author_rows(author, refs)),
    }
}

/// Render at most `limit` items, noting how many were left out
fn capped<T>(items: &[T], limit: usize, render: impl Fn(&T) -> Vec<UIElement>) -> Vec<UIElement> {
    if items.is_empty() {
        return vec![UIElement::styled("Keine Treffer.", StyleId::Muted)];
    }

    let mut out: Vec<UIElement> = items.iter().take(limit).flat_map(render).collect();
    if items.len() > limit {
        out.push(UIElement::styled(
            format!("... {} weitere Treffer nicht angezeigt", items.len() - limit),
            StyleId::Muted,
        ));
    }
    out
}

fn element_rows<T: Element>(element: &T, badges: Vec<UIElement>, link: Option<Route>) -> Vec<UIElement> {
    let mut title = vec![
        UIElement::badge(element.identifier(), StyleId::BadgeId),
        UIElement::text(element.name()),
    ];
    title.extend(version_label(element.version()));
    title.extend(badges);

    let mut byline = vec![
        UIElement::styled("  Erstellt von", StyleId::Muted),
        UIElement::text(element.author().unwrap_or("Unbekannt")),
    ];
    if let Some(route) = link {
        byline.push(UIElement::styled(format!("-> {route}"), StyleId::Muted));
    }

    vec![UIElement::row(title), UIElement::row(byline)]
}

fn author_rows(author: &str, refs: &ElementRefs) -> Vec<UIElement> {
    vec![
        UIElement::row(vec![
            UIElement::styled(author, StyleId::Heading),
            UIElement::badge(refs.total().to_string(), StyleId::BadgeCount),
        ]),
        UIElement::styled(
            format!(
                "  {} Stammdatenschemata, {} Datenfelder, {} Datenfeldgruppen, {} Regeln",
                refs.schema_refs.len(),
                refs.field_refs.len(),
                refs.group_refs.len(),
                refs.rule_refs.len()
            ),
            StyleId::Muted,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "schemas": { "S1": { "id": "S1", "name": "Schema One", "version": "1.0", "fachlicherErsteller": "Alice" } },
        "fields": { "F1": { "id": "F1", "name": "Field One", "feldart": "label", "fachlicherErsteller": "Alice" } },
        "groups": {},
        "rules": {}
    }"#;

    fn lines(elements: &[UIElement]) -> Vec<String> {
        elements.iter().map(UIElement::plain_text).collect()
    }

    #[test]
    fn test_empty_term_shows_dashboard() {
        let db = Database::from_json_str(DOC).unwrap();
        let state = State::new();

        let page = lines(&overview_page(&db, &state, 20));
        assert!(page.contains(&"Keine Ergebnisse...".to_string()));
        assert!(page.contains(&"Top-Autoren".to_string()));
        assert!(page.contains(&"1. Alice [2]".to_string()));
    }

    #[test]
    fn test_search_shows_active_tab() {
        let db = Database::from_json_str(DOC).unwrap();
        let mut state = State::new();
        state.set_search_term("One");
        state.select_tab(Tab::Field);

        let page = lines(&overview_page(&db, &state, 20));
        assert!(page.contains(
            &"Stammdatenschemata [1] Datenfelder [1] Datenfeldgruppen [0] Regeln [0] Autoren [0]"
                .to_string()
        ));
        assert!(page.contains(&"[F1] Field One [label]".to_string()));
        assert!(page.contains(&"  Erstellt von Alice -> /datafields/F1".to_string()));
        assert!(!page.iter().any(|l| l.contains("Schema One")));
    }

    #[test]
    fn test_result_lists_are_capped() {
        let items: Vec<u32> = (0..25).collect();
        let out = capped(&items, 20, |i| vec![UIElement::text(i.to_string())]);

        assert_eq!(out.len(), 21);
        assert_eq!(
            out.last().map(UIElement::plain_text),
            Some("... 5 weitere Treffer nicht angezeigt".to_string())
        );
    }
}
