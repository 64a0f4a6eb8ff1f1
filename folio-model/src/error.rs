use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading site content.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read content file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed content JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContentError>;
