use thiserror::Error;

/// ATL統一エラー型
#[derive(Debug, Error)]
pub enum AtlError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Catalog store error: {message} (status: {status})")]
    StoreApi { status: u16, message: String },

    #[error("Source '{0}' is read-only; switch to the rest source to add tools")]
    ReadOnlySource(String),

    #[error("Missing store credentials: {0}")]
    MissingCredentials(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AtlError>;

impl AtlError {
    /// ストアとの通信失敗かどうか
    ///
    /// 自動リトライは行わない。利用者が再実行するためのヒント表示にのみ使う。
    pub fn is_store_failure(&self) -> bool {
        matches!(self, AtlError::Network(_) | AtlError::StoreApi { .. })
    }

    /// 再実行を促すヒント
    pub fn retry_hint(&self) -> Option<&'static str> {
        match self {
            AtlError::Network(_) => Some("Check your connection and re-run the command"),
            AtlError::StoreApi { status, .. } if *status >= 500 => {
                Some("The catalog store is unavailable; re-run the command later")
            }
            AtlError::StoreApi { status: 401 | 403, .. } => {
                Some("Check ATL_STORE_KEY or [store] api_key in the config file")
            }
            _ => None,
        }
    }
}
