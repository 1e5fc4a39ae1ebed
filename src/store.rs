//! カタログストア
//!
//! ツールレコードの外部データソース。読み込みは全件・新しい順、
//! 書き込みは1件追加のみ。自動リトライは行わない。
//!
//! - `rest`: ホスト型データベースのテーブルAPI（読み書き）
//! - `legacy`: 静的JSONドキュメント（読み取り専用）
//! - `file`: ローカルJSONファイル（読み取り専用）

mod file;
mod legacy;
mod rest;

#[cfg(test)]
pub(crate) mod mock;

pub use file::FileStore;
pub use legacy::LegacyJsonStore;
pub use rest::RestStore;

use crate::catalog::{NewToolRecord, ToolRecord};
use crate::config::{StoreKind, StoreSettings};
use crate::error::{AtlError, Result};
use std::future::Future;
use std::pin::Pin;

/// 非同期操作の戻り値
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// カタログストア trait
pub trait CatalogStore: Send + Sync {
    /// ストア種別
    fn kind(&self) -> StoreKind;

    /// 全レコードを作成日時の新しい順で取得
    fn load_all(&self) -> StoreFuture<'_, Vec<ToolRecord>>;

    /// 1件追加（`id` と `created_at` はストアが割り当てる）
    fn insert<'a>(&'a self, record: &'a NewToolRecord) -> StoreFuture<'a, ()>;

    /// 接続確認。取得できたサンプル件数を返す
    fn ping(&self) -> StoreFuture<'_, usize>;
}

/// JSON配列をレコード列として読む
///
/// 必須項目の欠けたレコードが1件でもあれば読み込み失敗とする。
pub fn parse_records(body: &str) -> Result<Vec<ToolRecord>> {
    Ok(serde_json::from_str(body)?)
}

/// ストアファクトリー
///
/// 設定からストア種別に応じたクライアントを生成する。
pub struct StoreFactory {
    settings: StoreSettings,
}

impl StoreFactory {
    /// 新しいファクトリーを作成
    pub fn new(settings: StoreSettings) -> Self {
        Self { settings }
    }

    /// 設定に応じたストアを生成
    pub fn create(&self) -> Result<Box<dyn CatalogStore>> {
        let settings = &self.settings;
        match settings.kind {
            StoreKind::Rest => {
                let url = settings
                    .url
                    .as_deref()
                    .ok_or(AtlError::MissingCredentials("store url (ATL_STORE_URL)"))?;
                let api_key = settings
                    .api_key
                    .as_deref()
                    .ok_or(AtlError::MissingCredentials("api key (ATL_STORE_KEY)"))?;
                Ok(Box::new(RestStore::new(
                    &settings.http_config(),
                    url,
                    &settings.table,
                    api_key,
                )))
            }
            StoreKind::Legacy => Ok(Box::new(LegacyJsonStore::new(
                &settings.http_config(),
                &settings.legacy_url,
            ))),
            StoreKind::File => {
                let path = settings.file.clone().ok_or_else(|| {
                    AtlError::Config("file source requires --file or [store] file".to_string())
                })?;
                Ok(Box::new(FileStore::new(path)))
            }
        }
    }
}
