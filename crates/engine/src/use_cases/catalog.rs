//! Read-only browsing of the design data.
//!
//! Documents are returned as stored; the pages interpret them.

use std::sync::Arc;

use serde_json::Value;

use crate::infrastructure::ports::{DataSection, DocumentPath, GameDataRepo};

use super::documents::DataError;

pub struct Catalog {
    repo: Arc<dyn GameDataRepo>,
}

impl Catalog {
    pub fn new(repo: Arc<dyn GameDataRepo>) -> Self {
        Self { repo }
    }

    pub async fn class_base_stats(&self) -> Result<Value, DataError> {
        Ok(self
            .repo
            .read_document(&DocumentPath::class_base_stats())
            .await?)
    }

    pub async fn list_classes(&self) -> Result<Vec<String>, DataError> {
        Ok(self.repo.list_classes().await?)
    }

    pub async fn list_documents(&self, section: DataSection) -> Result<Vec<String>, DataError> {
        Ok(self.repo.list_documents(section).await?)
    }

    pub async fn get_document(&self, section: DataSection, name: &str) -> Result<Value, DataError> {
        let path = DocumentPath::section_document(section, name)?;
        Ok(self.repo.read_document(&path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockGameDataRepo, RepoError};
    use mockall::predicate::*;
    use serde_json::json;

    #[tokio::test]
    async fn get_document_reads_section_file() {
        let mut repo = MockGameDataRepo::new();
        let expected = DocumentPath::section_document(DataSection::Items, "weapons").expect("valid");
        repo.expect_read_document()
            .with(eq(expected))
            .times(1)
            .returning(|_| Ok(json!({"_meta": {}, "weapons": []})));

        let catalog = Catalog::new(Arc::new(repo));
        let doc = catalog
            .get_document(DataSection::Items, "weapons")
            .await
            .expect("document");
        assert!(doc["weapons"].is_array());
    }

    #[tokio::test]
    async fn invalid_name_never_reaches_repository() {
        let mut repo = MockGameDataRepo::new();
        repo.expect_read_document().never();

        let catalog = Catalog::new(Arc::new(repo));
        let err = catalog
            .get_document(DataSection::World, "../secrets")
            .await
            .expect_err("rejected");
        assert!(matches!(err, DataError::Repo(RepoError::InvalidPath(_))));
    }

    #[tokio::test]
    async fn missing_base_stats_is_not_found() {
        let mut repo = MockGameDataRepo::new();
        repo.expect_read_document()
            .returning(|p| Err(RepoError::not_found("Document", p)));

        let catalog = Catalog::new(Arc::new(repo));
        let err = catalog.class_base_stats().await.expect_err("missing");
        assert!(err.is_not_found());
    }
}
