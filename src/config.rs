//! 設定ファイルとHTTP設定
//!
//! `~/.atl/config.toml`（または `$ATL_CONFIG`）を読み込み、環境変数で上書きする。
//! ファイルがなければ既定値を使う。

use crate::catalog::DEFAULT_EDITORIAL_CATEGORIES;
use crate::env::EnvVar;
use crate::error::Result;
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 旧来の静的JSONカタログ
pub const DEFAULT_LEGACY_URL: &str =
    "https://raw.githubusercontent.com/pavanakarthik12/ai-tools-library-data/refs/heads/main/tools.json";

/// 既定のテーブル名
pub const DEFAULT_TABLE: &str = "tools";

/// 既定のタイムアウト（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            user_agent: "atl-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// ストア種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// ホスト型データベースのテーブルAPI（読み書き）
    #[default]
    Rest,
    /// 静的JSONドキュメント（読み取り専用）
    Legacy,
    /// ローカルJSONファイル（読み取り専用）
    File,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Rest => "rest",
            StoreKind::Legacy => "legacy",
            StoreKind::File => "file",
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `[store]` セクション
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub kind: StoreKind,
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub table: String,
    pub legacy_url: String,
    pub file: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            kind: StoreKind::default(),
            url: None,
            api_key: None,
            table: DEFAULT_TABLE.to_string(),
            legacy_url: DEFAULT_LEGACY_URL.to_string(),
            file: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl StoreSettings {
    /// HTTP設定
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout: Some(Duration::from_secs(self.timeout_secs)),
            ..HttpConfig::default()
        }
    }
}

/// `[catalog]` セクション
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub editorial_categories: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            editorial_categories: DEFAULT_EDITORIAL_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// ATL 設定
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AtlConfig {
    pub store: StoreSettings,
    pub catalog: CatalogSettings,
}

impl AtlConfig {
    /// 既定の場所から読み込み、環境変数を適用する
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// 指定パスから読み込む（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: AtlConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), kind = %config.store.kind, "loaded config");
        Ok(config)
    }

    /// 環境変数で上書き
    pub fn apply_env(&mut self) {
        if let Some(url) = EnvVar::get(EnvVar::STORE_URL) {
            self.store.url = Some(url);
        }
        if let Some(key) = EnvVar::get(EnvVar::STORE_KEY) {
            self.store.api_key = Some(key);
        }
        if let Some(table) = EnvVar::get(EnvVar::STORE_TABLE) {
            self.store.table = table;
        }
    }
}

/// ATL のデータディレクトリ（~/.atl）
pub fn atl_home() -> Option<PathBuf> {
    EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".atl"))
}

/// 設定ファイルのパス
fn config_path() -> Option<PathBuf> {
    EnvVar::get(EnvVar::CONFIG)
        .map(PathBuf::from)
        .or_else(|| atl_home().map(|dir| dir.join("config.toml")))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
