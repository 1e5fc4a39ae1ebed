//! ローカルJSONファイルのカタログ
//!
//! 静的JSONと同じ形式のファイルを読む。オフライン利用向けで読み取り専用。

use super::{parse_records, CatalogStore, StoreFuture};
use crate::catalog::{sort_newest_first, NewToolRecord, ToolRecord};
use crate::config::StoreKind;
use crate::error::{AtlError, Result};
use std::path::PathBuf;

/// ファイルストア
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> Result<Vec<ToolRecord>> {
        tracing::debug!(path = %self.path.display(), "loading catalog file");
        let body = tokio::fs::read_to_string(&self.path).await?;
        let mut records = parse_records(&body)?;
        sort_newest_first(&mut records);
        Ok(records)
    }
}

impl CatalogStore for FileStore {
    fn kind(&self) -> StoreKind {
        StoreKind::File
    }

    fn load_all(&self) -> StoreFuture<'_, Vec<ToolRecord>> {
        Box::pin(self.read())
    }

    fn insert<'a>(&'a self, _record: &'a NewToolRecord) -> StoreFuture<'a, ()> {
        Box::pin(async move { Err(AtlError::ReadOnlySource(self.kind().to_string())) })
    }

    fn ping(&self) -> StoreFuture<'_, usize> {
        Box::pin(async move { Ok(self.read().await?.len()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_sorted_newest_first() {
        let file = write_catalog(
            r#"[
                {"name": "Old", "description": "d", "url": "https://old.ai", "category": "Writing", "created_at": "2023-01-01T00:00:00Z"},
                {"name": "New", "description": "d", "url": "https://new.ai", "category": "Writing", "created_at": "2024-06-01T00:00:00Z"}
            ]"#,
        );
        let store = FileStore::new(file.path());
        let records = store.load_all().await.unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["New", "Old"]);
        assert_eq!(records[0].link, "https://new.ai");
    }

    #[tokio::test]
    async fn test_ping_counts_records() {
        let file = write_catalog(r#"[{"name": "a", "description": "b", "category": "c"}]"#);
        assert_eq!(FileStore::new(file.path()).ping().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("missing.json"));
        assert!(matches!(store.load_all().await, Err(AtlError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_record_fails_load() {
        let file = write_catalog(r#"[{"name": "a", "description": "b", "category": null}]"#);
        let store = FileStore::new(file.path());
        assert!(matches!(store.load_all().await, Err(AtlError::Json(_))));
    }
}
