use std::path::PathBuf;

use thiserror::Error;

use crate::naming::NamingError;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid base64 in upstream response: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error("render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("formatter `{command}` failed: {detail}")]
    Format { command: String, detail: String },
}
