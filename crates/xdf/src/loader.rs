//! Reading an export from disk or memory into a [`Database`].

use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};
use xdf_api::Dataset;

use crate::database::Database;
use crate::error::{LoadError, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

impl Database {
    /// Read, decode, parse and index the file at `path`.
    ///
    /// Only the file read suspends; parsing and indexing run to completion
    /// once the bytes are in memory. Nothing is retried.
    #[tracing::instrument(name = "database.load", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let started = Instant::now();

        let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let result = Self::from_bytes(bytes);
        match &result {
            Ok(_) => info!(elapsed_ms = started.elapsed().as_millis() as u64, "Loaded database"),
            Err(e) => warn!("Failed to load database: {}", e),
        }
        result
    }

    /// Decode `bytes` as UTF-8 and ingest the JSON document.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let text = String::from_utf8(bytes)?;
        Self::from_json_str(&text)
    }

    /// Parse and ingest a JSON document. A leading byte order mark is ignored.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let data: Dataset = serde_json::from_str(text)?;
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{"schemas":{},"fields":{},"groups":{},"rules":{}}"#;

    #[test]
    fn test_from_json_str_accepts_empty_collections() {
        let db = Database::from_json_str(MINIMAL).unwrap();
        assert!(db.dataset().is_empty());
        assert!(db.dashboard_data().top_authors.is_empty());
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let text = format!("{BYTE_ORDER_MARK}{MINIMAL}");
        assert!(Database::from_json_str(&text).is_ok());
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let result = Database::from_bytes(vec![b'{', 0xff, 0xfe, b'}']);
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Database::from_json_str("{\"schemas\": "),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            Database::from_json_str("[1, 2, 3]"),
            Err(LoadError::Parse(_))
        ));
    }
}
