//! In-memory index over an XDatenfelder export.
//!
//! A [`Database`] is built once from a JSON document and never changes
//! afterwards. Loading a new file produces a new `Database`.

pub mod database;
pub mod error;
pub mod index;
pub mod loader;
pub mod search;

pub use database::Database;
pub use error::{LoadError, Result};
pub use search::SearchResult;

pub use xdf_api as api;
