use super::text::{multiline_or_dash, single, version_label, MISSING};
use crate::stylesheet::{field_kind_style, StyleId};
use crate::ui_element::UIElement;
use xdf_api::{Element, Field, FieldKind, Metadata};

/// Detail page of one data field ("Datenfeld")
pub fn field_page(field: &Field) -> Vec<UIElement> {
    let mut out = header(
        &field.name,
        &field.version,
        vec![
            UIElement::badge(field.identifier(), StyleId::BadgeId),
            UIElement::badge(field.kind.tag(), field_kind_style(&field.kind)),
        ],
    );

    out.extend(common_definitions(field.author(), &field.metadata));

    let labels = &field.labels;
    out.push(single("Bezeichnung Eingabe", labels.input_label.as_deref()));
    out.push(single("Hilfetext Eingabe", labels.input_help.as_deref()));
    out.push(single("Bezeichnung Ausgabe", labels.output_label.as_deref()));
    out.push(single("Hilfetext Ausgabe", labels.output_help.as_deref()));
    out.push(rule_list(&field.rules));

    out.extend(kind_definitions(&field.kind));
    out
}

/// Title row, id/kind badges and the disabled edit control
pub(crate) fn header(name: &str, version: &str, badges: Vec<UIElement>) -> Vec<UIElement> {
    let mut title = vec![UIElement::styled(name, StyleId::Heading)];
    title.extend(version_label(version));

    let mut badge_row = badges;
    badge_row.push(UIElement::styled("[Bearbeiten]", StyleId::Disabled));

    vec![
        UIElement::row(title),
        UIElement::row(badge_row),
        UIElement::Separator,
    ]
}

/// Attributes every element kind shows in the same order
pub(crate) fn common_definitions(author: Option<&str>, metadata: &Metadata) -> Vec<UIElement> {
    let mut out = vec![
        single("Versionshinweis", metadata.version_note.as_deref()),
        single("Fachlicher Ersteller", author),
    ];

    for (term, value) in [
        ("Status", &metadata.status),
        ("Gültig ab", &metadata.valid_from),
        ("Gültig bis", &metadata.valid_until),
        ("Freigabedatum", &metadata.released_on),
        ("Veröffentlichungsdatum", &metadata.published_on),
    ] {
        if let Some(value) = value {
            out.push(UIElement::definition(term, vec![value.clone()]));
        }
    }

    out.push(UIElement::definition("Bezug", multiline_or_dash(metadata.reference.as_deref())));
    out.push(UIElement::definition("Definition", multiline_or_dash(metadata.definition.as_deref())));
    out.push(UIElement::definition(
        "Beschreibung",
        multiline_or_dash(metadata.description.as_deref()),
    ));
    out
}

fn rule_list(rules: &[String]) -> UIElement {
    let joined = if rules.is_empty() {
        MISSING.to_string()
    } else {
        rules.join(", ")
    };
    UIElement::definition("Regeln", vec![joined])
}

fn kind_definitions(kind: &FieldKind) -> Vec<UIElement> {
    match kind {
        FieldKind::Select { code_list, content } => {
            let genericode = code_list.as_ref().map(|c| &c.genericode);
            vec![
                single("Codeliste", code_list.as_ref().map(|c| c.id.as_str())),
                single("Version", genericode.and_then(|g| g.version.as_deref())),
                single(
                    "Canonical URI",
                    genericode.map(|g| g.canonical_identification.as_str()),
                ),
                single(
                    "Canonical Version URI",
                    genericode.and_then(|g| g.canonical_version_uri.as_deref()),
                ),
                single("Inhalt", content.as_deref()),
            ]
        }
        FieldKind::Input {
            data_type,
            precision,
            content,
        } => vec![
            UIElement::definition("Datentyp", vec![data_type.clone()]),
            single("Präzisierung", precision.as_deref()),
            single("Inhalt", content.as_deref()),
        ],
        FieldKind::Label { content } => {
            vec![UIElement::definition("Inhalt", multiline_or_dash(content.as_deref()))]
        }
    }
}
