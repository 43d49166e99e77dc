//! Filesystem implementation of [`GameDataRepo`].
//!
//! Every call goes to disk; there is no cache. Writes replace the whole file
//! with the pretty-printed document and never merge. The document is written
//! to a sibling temp file first and renamed over the target, so readers see
//! either the old file or the new one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use super::ports::{DataSection, DocumentPath, GameDataRepo, RepoError};

pub struct FsGameDataRepo {
    root: PathBuf,
}

impl FsGameDataRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &DocumentPath) -> PathBuf {
        self.root.join(path.relative())
    }

    async fn read_dir_entries(
        &self,
        dir: &Path,
        label: &'static str,
    ) -> Result<Vec<(String, bool)>, RepoError> {
        let mut entries = fs::read_dir(dir)
            .await
            .map_err(|e| map_io(e, label, dir.display(), "read_dir"))?;

        let mut out = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RepoError::io("read_dir", e))?
        {
            let is_dir = entry
                .file_type()
                .await
                .map_err(|e| RepoError::io("file_type", e))?
                .is_dir();
            if let Some(name) = entry.file_name().to_str() {
                out.push((name.to_string(), is_dir));
            }
        }
        Ok(out)
    }
}

#[async_trait]
impl GameDataRepo for FsGameDataRepo {
    async fn read_document(&self, path: &DocumentPath) -> Result<Value, RepoError> {
        let file = self.resolve(path);
        let content = fs::read_to_string(&file)
            .await
            .map_err(|e| map_io(e, "Document", path, "read_document"))?;

        let document = serde_json::from_str(&content)
            .map_err(|e| RepoError::serialization(format!("{path}: {e}")))?;
        tracing::debug!(path = %path, bytes = content.len(), "Loaded document");
        Ok(document)
    }

    async fn write_document(&self, path: &DocumentPath, document: &Value) -> Result<(), RepoError> {
        let file = self.resolve(path);
        let mut content = serde_json::to_string_pretty(document)
            .map_err(|e| RepoError::serialization(format!("{path}: {e}")))?;
        content.push('\n');

        let staging = staging_path(&file);
        fs::write(&staging, content.as_bytes())
            .await
            .map_err(|e| map_io(e, "Document", path, "write_document"))?;
        if let Err(e) = fs::rename(&staging, &file).await {
            let _ = fs::remove_file(&staging).await;
            return Err(map_io(e, "Document", path, "rename_document"));
        }
        tracing::info!(path = %path, bytes = content.len(), "Wrote document");
        Ok(())
    }

    async fn list_documents(&self, section: DataSection) -> Result<Vec<String>, RepoError> {
        let dir = self.root.join(section.dir_name());
        let mut names: Vec<String> = self
            .read_dir_entries(&dir, "Section")
            .await?
            .into_iter()
            .filter(|(_, is_dir)| !is_dir)
            .filter_map(|(name, _)| name.strip_suffix(".json").map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }

    async fn list_classes(&self) -> Result<Vec<String>, RepoError> {
        let dir = self.root.join(DataSection::Classes.dir_name());
        let mut names: Vec<String> = self
            .read_dir_entries(&dir, "Section")
            .await?
            .into_iter()
            .filter(|(_, is_dir)| *is_dir)
            .map(|(name, _)| name)
            .collect();
        names.sort();
        Ok(names)
    }
}

/// `dir/.name.tmp` next to `file`; never matches a `.json` listing.
fn staging_path(file: &Path) -> PathBuf {
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    file.with_file_name(format!(".{name}.tmp"))
}

fn map_io(
    err: std::io::Error,
    entity_type: &'static str,
    what: impl std::fmt::Display,
    operation: &'static str,
) -> RepoError {
    if err.kind() == ErrorKind::NotFound {
        RepoError::not_found(entity_type, what)
    } else {
        RepoError::io(operation, format!("{what}: {err}"))
    }
}
