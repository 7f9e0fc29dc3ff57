//! Page builders. Each page is a plain function from database and state to
//! a list of [`UIElement`]s; nothing here touches the terminal.

mod field_page;
mod overview_page;
mod rule_page;
mod text;

pub use field_page::field_page;
pub use overview_page::overview_page;
pub use rule_page::rule_page;

use crate::command::HELP;
use crate::route::Route;
use crate::state::{State, UploadState};
use crate::stylesheet::StyleId;
use crate::ui_element::UIElement;

/// Build the complete screen for the current state
pub fn render_page(state: &State, display_limit: usize) -> Vec<UIElement> {
    let mut out = navbar(state);

    match &state.database {
        None => out.extend(upload_page(&state.upload)),
        Some(db) => {
            out.extend(upload_alert(&state.upload));
            let page = match &state.route {
                Route::Overview => overview_page(db, state, display_limit),
                Route::Field(id) => db
                    .get_field(id)
                    .map(field_page)
                    .unwrap_or_else(|| not_found_page(&state.route)),
                Route::Rule(id) => db
                    .get_rule(id)
                    .map(rule_page)
                    .unwrap_or_else(|| not_found_page(&state.route)),
                Route::NotFound(_) => not_found_page(&state.route),
            };
            out.extend(page);
        }
    }

    if let Some(message) = &state.status_message {
        out.push(UIElement::Blank);
        out.push(UIElement::styled(message, StyleId::AlertInfo));
    }
    out
}

fn navbar(state: &State) -> Vec<UIElement> {
    let mut bar = vec![UIElement::styled("XDatenfelder", StyleId::TitleMain)];
    if let Some(source) = &state.source {
        bar.push(UIElement::styled(source.display().to_string(), StyleId::Muted));
    }
    vec![UIElement::row(bar), UIElement::Separator]
}

/// Shown until the first export has been loaded
pub fn upload_page(upload: &UploadState) -> Vec<UIElement> {
    let mut out = vec![
        UIElement::styled("Datenbank öffnen", StyleId::Heading),
        UIElement::text("Bitte eine XDatenfelder-JSON-Datei laden:"),
        UIElement::row(vec![
            UIElement::styled(":open <Datei>", StyleId::Term),
            UIElement::styled("(':help' zeigt alle Befehle)", StyleId::Muted),
        ]),
        UIElement::Blank,
    ];
    out.extend(upload_alert(upload));
    out
}

fn upload_alert(upload: &UploadState) -> Vec<UIElement> {
    match upload {
        UploadState::Ready => vec![],
        UploadState::Loading(path) => vec![UIElement::styled(
            format!("Datei wird geladen... ({})", path.display()),
            StyleId::AlertInfo,
        )],
        UploadState::Error(message) => vec![UIElement::styled(
            format!("Fehler: {message}"),
            StyleId::AlertError,
        )],
    }
}

pub fn not_found_page(route: &Route) -> Vec<UIElement> {
    vec![
        UIElement::styled("Die Seite konnte nicht gefunden werden.", StyleId::Heading),
        UIElement::styled(route.to_string(), StyleId::Muted),
        UIElement::Blank,
        UIElement::row(vec![
            UIElement::styled(":home", StyleId::Term),
            UIElement::text("führt zurück zur Startseite."),
        ]),
    ]
}

pub fn help_page() -> Vec<UIElement> {
    let mut out = vec![UIElement::styled("Befehle", StyleId::Heading)];
    out.extend(
        HELP.iter()
            .map(|(usage, description)| UIElement::definition(*usage, vec![description.to_string()])),
    );
    out
}
