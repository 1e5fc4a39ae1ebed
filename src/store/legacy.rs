//! 静的JSONドキュメントのカタログ
//!
//! 旧来の公開JSON（配列）を HTTP で取得する。読み取り専用。

use super::{parse_records, CatalogStore, StoreFuture};
use crate::catalog::{sort_newest_first, NewToolRecord, ToolRecord};
use crate::config::{HttpConfig, StoreKind};
use crate::error::AtlError;
use crate::http;
use reqwest::Client;

/// 静的JSONストア
pub struct LegacyJsonStore {
    http: Client,
    url: String,
}

impl LegacyJsonStore {
    pub fn new(config: &HttpConfig, url: &str) -> Self {
        Self {
            http: config.build_client(),
            url: url.to_string(),
        }
    }

    async fn fetch(&self) -> crate::error::Result<Vec<ToolRecord>> {
        tracing::debug!(url = %self.url, "loading legacy catalog");
        let body =
            http::fetch_text_with_spinner(self.http.get(&self.url), "Loading AI tools...").await?;
        let mut records = parse_records(&body)?;
        sort_newest_first(&mut records);
        tracing::info!(count = records.len(), "loaded legacy catalog");
        Ok(records)
    }
}

impl CatalogStore for LegacyJsonStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Legacy
    }

    fn load_all(&self) -> StoreFuture<'_, Vec<ToolRecord>> {
        Box::pin(self.fetch())
    }

    fn insert<'a>(&'a self, _record: &'a NewToolRecord) -> StoreFuture<'a, ()> {
        Box::pin(async move { Err(AtlError::ReadOnlySource(self.kind().to_string())) })
    }

    fn ping(&self) -> StoreFuture<'_, usize> {
        Box::pin(async move { Ok(self.fetch().await?.len()) })
    }
}
