//! Repository port for the design data files.

use async_trait::async_trait;
use serde_json::Value;

use super::error::RepoError;
use super::types::{DataSection, DocumentPath};

// =============================================================================
// Design Data Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameDataRepo: Send + Sync {
    /// Read and parse one document.
    async fn read_document(&self, path: &DocumentPath) -> Result<Value, RepoError>;

    /// Replace one document with `document`, whatever it contains.
    async fn write_document(&self, path: &DocumentPath, document: &Value)
        -> Result<(), RepoError>;

    /// Names (without `.json`) of the documents in a section, sorted.
    async fn list_documents(&self, section: DataSection) -> Result<Vec<String>, RepoError>;

    /// Class directory names under `classes/`, sorted.
    async fn list_classes(&self) -> Result<Vec<String>, RepoError>;
}
