/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 設定ファイルのパス
    pub const CONFIG: &'static str = "ATL_CONFIG";
    /// REST ストアのベースURL
    pub const STORE_URL: &'static str = "ATL_STORE_URL";
    /// REST ストアの API キー
    pub const STORE_KEY: &'static str = "ATL_STORE_KEY";
    /// REST ストアのテーブル名
    pub const STORE_TABLE: &'static str = "ATL_STORE_TABLE";

    /// 環境変数を取得（空文字列・空白のみはNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
