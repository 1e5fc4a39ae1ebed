//! ホスト型データベースのテーブルAPIクライアント
//!
//! `{url}/rest/v1/{table}` に対して PostgREST 形式のクエリを発行する。

use super::{parse_records, CatalogStore, StoreFuture};
use crate::catalog::{NewToolRecord, ToolRecord};
use crate::config::{HttpConfig, StoreKind};
use crate::http;
use reqwest::{Client, RequestBuilder};

/// REST ストア
pub struct RestStore {
    http: Client,
    base_url: String,
    table: String,
    api_key: String,
}

impl RestStore {
    /// 新しいRestStoreを作成
    pub fn new(config: &HttpConfig, base_url: &str, table: &str, api_key: &str) -> Self {
        Self {
            http: config.build_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            table: table.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// テーブルURL
    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// 全件取得のクエリ
    fn load_query() -> [(&'static str, &'static str); 2] {
        [("select", "*"), ("order", "created_at.desc")]
    }

    /// 認証ヘッダーを付与
    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }
}

impl CatalogStore for RestStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Rest
    }

    fn load_all(&self) -> StoreFuture<'_, Vec<ToolRecord>> {
        Box::pin(async move {
            let url = self.table_url();
            tracing::debug!(%url, "loading catalog");

            let req = self.authorized(self.http.get(&url).query(&Self::load_query()));
            let body = http::fetch_text_with_spinner(req, "Loading AI tools...").await?;
            let records = parse_records(&body)?;

            tracing::info!(count = records.len(), "loaded catalog");
            Ok(records)
        })
    }

    fn insert<'a>(&'a self, record: &'a NewToolRecord) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let url = self.table_url();
            tracing::debug!(%url, name = %record.name, "inserting tool");

            let req = self
                .authorized(self.http.post(&url))
                .header("Prefer", "return=minimal")
                .json(record);
            http::send_checked(req).await?;

            tracing::info!(name = %record.name, "inserted tool");
            Ok(())
        })
    }

    fn ping(&self) -> StoreFuture<'_, usize> {
        Box::pin(async move {
            let url = self.table_url();
            let req = self.authorized(
                self.http
                    .get(&url)
                    .query(&[("select", "*"), ("limit", "1")]),
            );
            let body = http::send_checked(req).await?.text().await?;
            let sample: Vec<serde_json::Value> = serde_json::from_str(&body)?;
            Ok(sample.len())
        })
    }
}
