//! Parsing of explorer input lines.
//!
//! A line starting with `:` is a command; any other non-empty line is a
//! search term, taken literally.

use crate::route::Route;
use crate::state::{Tab, TabError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load a new export
    Open(PathBuf),
    Search(String),
    ClearSearch,
    SelectTab(Tab),
    Navigate(Route),
    /// Return to the previously shown page
    Back,
    Help,
    Quit,
    /// Empty input, re-renders the current page
    Redraw,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unbekannter Befehl ':{0}' (':help' zeigt alle Befehle)")]
    Unknown(String),

    #[error("':{0}' erwartet ein Argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Tab(#[from] TabError),
}

pub const HELP: &[(&str, &str)] = &[
    ("<Text>", "Suche nach Id, Name oder Autor (Groß-/Kleinschreibung beachten)"),
    (":search <Text>", "Suche, auch für Text mit führendem ':'"),
    (":clear", "Suche zurücksetzen und Dashboard zeigen"),
    (":tab <schema|field|group|rule|author>", "Ergebnisliste wechseln"),
    (":field <Id>", "Datenfeld anzeigen"),
    (":rule <Id>", "Regel anzeigen"),
    (":go <Pfad>", "Seite öffnen, z.B. /datafields/F60000227"),
    (":back", "Zur vorherigen Seite"),
    (":home", "Zur Startseite"),
    (":open <Datei>", "Andere JSON-Datei laden"),
    (":help", "Diese Hilfe"),
    (":quit", "Beenden"),
];

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);

        let Some(command) = line.strip_prefix(':') else {
            if line.trim().is_empty() {
                return Ok(Command::Redraw);
            }
            return Ok(Command::Search(line.to_string()));
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        let required = |name: &'static str| {
            if argument.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(argument.to_string())
            }
        };

        match name {
            "open" | "o" => Ok(Command::Open(PathBuf::from(required("open")?))),
            "search" | "s" => Ok(Command::Search(required("search")?)),
            "clear" | "c" => Ok(Command::ClearSearch),
            "tab" | "t" => Ok(Command::SelectTab(required("tab")?.parse()?)),
            "field" | "f" => Ok(Command::Navigate(Route::Field(required("field")?))),
            "rule" | "r" => Ok(Command::Navigate(Route::Rule(required("rule")?))),
            "go" | "g" => Ok(Command::Navigate(Route::parse(&required("go")?))),
            "home" => Ok(Command::Navigate(Route::Overview)),
            "back" | "b" => Ok(Command::Back),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
