use super::{
    app_main::{AppMain, Effect},
    components::{help_page, render_page},
    config::ExplorerConfig,
    render_interpreter::render,
    state::State,
};
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::{info, warn};
use xdf::Database;

/// Run the explorer until `:quit`, Ctrl-D or Ctrl-C.
///
/// `initial_file` is loaded before the first prompt, as if `:open` had been
/// entered.
pub async fn run_app(config: ExplorerConfig, initial_file: Option<PathBuf>) -> Result<()> {
    if !config.color {
        colored::control::set_override(false);
    }

    let mut app = AppMain::new();
    let mut state = State::new();
    let mut editor = DefaultEditor::new()?;

    match initial_file {
        Some(path) => load_into(&mut state, path, &config).await,
        None => print_page(&mut state, &config),
    }

    loop {
        let prompt = match &state.database {
            Some(_) => format!("{}> ", state.route),
            None => "upload> ".to_string(),
        };

        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        remember_input(&mut editor, &line);

        match app.handle_line(&mut state, &line) {
            Effect::Render => print_page(&mut state, &config),
            Effect::ShowHelp => print!("{}", render(&help_page())),
            Effect::Load(path) => load_into(&mut state, path, &config).await,
            Effect::Quit => break,
        }
    }

    info!("Explorer closed");
    Ok(())
}

/// Add a non-blank input line to the editor history
fn remember_input(editor: &mut DefaultEditor, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    if let Err(e) = editor.add_history_entry(line) {
        warn!("Could not record input history: {}", e);
    }
}

/// Load `path` and show the progress page while the read is pending
async fn load_into(state: &mut State, path: PathBuf, config: &ExplorerConfig) {
    state.begin_load(&path);
    print_page(state, config);

    let result = Database::load(&path).await;
    if let Err(e) = &result {
        warn!("Could not open {}: {}", path.display(), e);
    }
    state.finish_load(path, result);
    print_page(state, config);
}

fn print_page(state: &mut State, config: &ExplorerConfig) {
    print!("{}", render(&render_page(state, config.display_limit)));
    state.take_status();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::History;

    #[test]
    fn test_only_non_blank_lines_enter_history() {
        let mut editor = DefaultEditor::new().unwrap();

        remember_input(&mut editor, "   ");
        remember_input(&mut editor, ":field F1");
        remember_input(&mut editor, "");

        assert_eq!(editor.history().len(), 1);
    }
}
