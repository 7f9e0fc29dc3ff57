use crate::route::Route;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use xdf::{Database, LoadError};

/// Result lists on the overview page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Schema,
    Field,
    Group,
    Rule,
    Author,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Schema, Tab::Field, Tab::Group, Tab::Rule, Tab::Author];

    pub fn name(self) -> &'static str {
        match self {
            Tab::Schema => "schema",
            Tab::Field => "field",
            Tab::Group => "group",
            Tab::Rule => "rule",
            Tab::Author => "author",
        }
    }

    /// Heading shown in the tab bar
    pub fn title(self) -> &'static str {
        match self {
            Tab::Schema => "Stammdatenschemata",
            Tab::Field => "Datenfelder",
            Tab::Group => "Datenfeldgruppen",
            Tab::Rule => "Regeln",
            Tab::Author => "Autoren",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("Unbekannter Reiter '{0}' (erlaubt: schema, field, group, rule, author)")]
    Unknown(String),
}

impl FromStr for Tab {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.name() == s)
            .ok_or_else(|| TabError::Unknown(s.to_string()))
    }
}

/// Progress of the most recent file load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Ready,
    Loading(PathBuf),
    Error(String),
}

/// Everything the pages need to render, passed explicitly.
#[derive(Clone, Default)]
pub struct State {
    /// The active database; stays in place when a later load fails
    pub database: Option<Arc<Database>>,
    /// File the active database was loaded from
    pub source: Option<PathBuf>,
    pub upload: UploadState,
    pub term: String,
    pub tab: Tab,
    pub route: Route,
    /// One-shot message for the status line, cleared by the next command
    pub status_message: Option<String>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("loaded", &self.database.is_some())
            .field("source", &self.source)
            .field("upload", &self.upload)
            .field("term", &self.term)
            .field("tab", &self.tab)
            .field("route", &self.route)
            .finish()
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self, path: &Path) {
        self.upload = UploadState::Loading(path.to_path_buf());
    }

    /// Apply the outcome of a load started with [`State::begin_load`].
    ///
    /// Success replaces the database and resets the view; failure keeps
    /// whatever database was active and records the message verbatim.
    pub fn finish_load(&mut self, path: PathBuf, result: Result<Database, LoadError>) {
        match result {
            Ok(database) => {
                info!("Switched to database from {}", path.display());
                self.database = Some(Arc::new(database));
                self.source = Some(path);
                self.upload = UploadState::Ready;
                self.term.clear();
                self.tab = Tab::default();
                self.route = Route::Overview;
            }
            Err(e) => {
                warn!("Keeping previous database after failed load: {}", e);
                self.upload = UploadState::Error(e.to_string());
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.upload, UploadState::Loading(_))
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.route = Route::Overview;
    }

    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.route = Route::Overview;
    }

    pub fn navigate(&mut self, route: Route) {
        self.route = route;
    }

    pub fn report(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn take_status(&mut self) -> Option<String> {
        self.status_message.take()
    }
}
