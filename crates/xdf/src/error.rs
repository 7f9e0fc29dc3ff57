use std::path::PathBuf;
use thiserror::Error;
use xdf_api::ElementKind;

/// Reasons a document could not be turned into a [`crate::Database`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Datei {} konnte nicht gelesen werden: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dateiinhalt ist kein gültiger UTF-8-Text: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Dateiinhalt ist kein gültiges XDatenfelder-JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Schlüssel {key} in {collection} verweist auf Element mit id {id}")]
    IdMismatch {
        collection: ElementKind,
        key: String,
        id: String,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;
