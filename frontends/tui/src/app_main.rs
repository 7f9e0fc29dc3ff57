use crate::command::Command;
use crate::route::Route;
use crate::state::State;
use std::path::PathBuf;
use tracing::debug;

/// What the event loop has to do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Print the current page
    Render,
    ShowHelp,
    /// Load a new export; the loop awaits it and feeds the result back
    Load(PathBuf),
    Quit,
}

/// Input handling of the explorer.
///
/// Owns the page history used by `:back`; everything else lives in [`State`].
#[derive(Debug, Default)]
pub struct AppMain {
    history: Vec<Route>,
}

impl AppMain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one input line and apply it to `state`.
    ///
    /// Parse errors end up in the status line instead of aborting the loop.
    pub fn handle_line(&mut self, state: &mut State, line: &str) -> Effect {
        match Command::parse(line) {
            Ok(command) => self.handle_command(state, command),
            Err(e) => {
                state.report(e.to_string());
                Effect::Render
            }
        }
    }

    pub fn handle_command(&mut self, state: &mut State, command: Command) -> Effect {
        debug!(?command, "Handling command");

        match command {
            Command::Open(path) => {
                if state.is_loading() {
                    state.report("Es wird bereits eine Datei geladen.");
                    return Effect::Render;
                }
                self.history.clear();
                return Effect::Load(path);
            }
            Command::Help => return Effect::ShowHelp,
            Command::Quit => return Effect::Quit,
            Command::Redraw => {}
            _ if state.database.is_none() => {
                state.report("Noch keine Datenbank geladen (':open <Datei>').");
            }
            Command::Search(term) => {
                self.remember(state);
                state.set_search_term(term);
            }
            Command::ClearSearch => {
                self.remember(state);
                state.clear_search();
            }
            Command::SelectTab(tab) => {
                self.remember(state);
                state.select_tab(tab);
            }
            Command::Navigate(route) => {
                self.remember(state);
                state.navigate(route);
            }
            Command::Back => match self.history.pop() {
                Some(route) => state.navigate(route),
                None => state.report("Keine vorherige Seite."),
            },
        }
        Effect::Render
    }

    fn remember(&mut self, state: &State) {
        if self.history.last() != Some(&state.route) {
            self.history.push(state.route.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Tab;
    use xdf::Database;

    const DOC: &str = r#"{"schemas":{},"fields":{},"groups":{},"rules":{"R1":{"id":"R1","name":"Regel"}}}"#;

    fn loaded() -> State {
        let mut state = State::new();
        state.finish_load(PathBuf::from("a.json"), Database::from_json_str(DOC));
        state
    }

    #[test]
    fn test_commands_without_database_are_reported() {
        let mut app = AppMain::new();
        let mut state = State::new();

        assert_eq!(app.handle_line(&mut state, "Regel"), Effect::Render);
        assert_eq!(state.term, "");
        assert!(state.take_status().unwrap().contains(":open"));

        assert_eq!(
            app.handle_line(&mut state, ":open a.json"),
            Effect::Load(PathBuf::from("a.json"))
        );
    }

    #[test]
    fn test_back_returns_to_previous_route() {
        let mut app = AppMain::new();
        let mut state = loaded();

        app.handle_line(&mut state, ":rule R1");
        assert_eq!(state.route, Route::Rule("R1".to_string()));
        app.handle_line(&mut state, ":go /datafields/F9");
        assert_eq!(state.route, Route::Field("F9".to_string()));

        app.handle_line(&mut state, ":back");
        assert_eq!(state.route, Route::Rule("R1".to_string()));
        app.handle_line(&mut state, ":back");
        assert_eq!(state.route, Route::Overview);

        app.handle_line(&mut state, ":back");
        assert_eq!(state.take_status(), Some("Keine vorherige Seite.".to_string()));
    }

    #[test]
    fn test_open_clears_history() {
        let mut app = AppMain::new();
        let mut state = loaded();

        app.handle_line(&mut state, ":rule R1");
        assert_eq!(
            app.handle_line(&mut state, ":open b.json"),
            Effect::Load(PathBuf::from("b.json"))
        );
        state.finish_load(PathBuf::from("b.json"), Database::from_json_str(DOC));

        app.handle_line(&mut state, ":back");
        assert_eq!(state.route, Route::Overview);
        assert_eq!(state.take_status(), Some("Keine vorherige Seite.".to_string()));
    }

    #[test]
    fn test_search_and_tab_switch_return_to_overview() {
        let mut app = AppMain::new();
        let mut state = loaded();
        state.navigate(Route::Rule("R1".to_string()));

        app.handle_line(&mut state, "Regel");
        assert_eq!(state.term, "Regel");
        assert_eq!(state.route, Route::Overview);

        app.handle_line(&mut state, ":tab rule");
        assert_eq!(state.tab, Tab::Rule);
    }

    #[test]
    fn test_parse_errors_go_to_status_line() {
        let mut app = AppMain::new();
        let mut state = loaded();

        assert_eq!(app.handle_line(&mut state, ":tab nope"), Effect::Render);
        assert!(state.take_status().unwrap().contains("nope"));
        assert_eq!(app.handle_line(&mut state, ":help"), Effect::ShowHelp);
        assert_eq!(app.handle_line(&mut state, ":quit"), Effect::Quit);
    }
}
