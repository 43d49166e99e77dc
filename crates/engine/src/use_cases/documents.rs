//! Typed loading of documents through the repository port.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::infrastructure::ports::{DocumentPath, GameDataRepo, RepoError};

/// Shared error type for the data use cases.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    /// The file parsed as JSON but not into the expected shape.
    #[error("Invalid document {path}: {message}")]
    InvalidDocument { path: String, message: String },
}

impl DataError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(e) if e.is_not_found())
    }
}

pub(crate) fn parse_document<T: DeserializeOwned>(
    path: &DocumentPath,
    document: Value,
) -> Result<T, DataError> {
    serde_json::from_value(document).map_err(|e| DataError::InvalidDocument {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Load a configuration document, or `default()` when the file is absent.
/// A file that exists but cannot be read or parsed is still an error.
pub(crate) async fn load_or_default<T, F>(
    repo: &dyn GameDataRepo,
    path: &DocumentPath,
    default: F,
) -> Result<T, DataError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match repo.read_document(path).await {
        Ok(document) => parse_document(path, document),
        Err(e) if e.is_not_found() => {
            tracing::debug!(path = %path, "No configuration file, using built-in defaults");
            Ok(default())
        }
        Err(e) => Err(e.into()),
    }
}
