// Library interface for the explorer frontend
// Exposes modules for testing and reuse

pub mod app_main;
pub mod command;
pub mod components;
pub mod config;
pub mod launcher;
pub mod render_interpreter;
pub mod route;
pub mod state;
pub mod stylesheet;
pub mod ui_element;

// Re-export commonly used types
pub use app_main::{AppMain, Effect};
pub use command::Command;
pub use route::Route;
pub use state::{State, Tab, UploadState};
pub use ui_element::UIElement;
