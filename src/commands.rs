use crate::catalog::ToolRecord;
use crate::cli::{Cli, Command, GlobalArgs};
use crate::config::{AtlConfig, StoreKind};
use crate::error::AtlError;
use crate::store::{CatalogStore, StoreFactory};

pub mod add;
pub mod browse;
pub mod categories;
pub mod list;
pub mod ping;
pub mod suggest;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    let ctx = Context::from_args(&cli.global)?;

    match cli.command {
        Command::List(args) => list::run(args, &ctx).await,
        Command::Categories(args) => categories::run(args, &ctx).await,
        Command::Suggest(args) => suggest::run(args, &ctx).await,
        Command::Add(args) => add::run(args, &ctx).await,
        Command::Ping => ping::run(&ctx).await,
        Command::Browse => browse::run(&ctx).await,
    }
}

/// コマンド実行時の共通コンテキスト
pub struct Context {
    pub config: AtlConfig,
}

impl Context {
    /// 設定を読み込み、CLI オプションで上書きする
    pub fn from_args(global: &GlobalArgs) -> Result<Self, String> {
        let config = AtlConfig::load().map_err(describe)?;
        Ok(Self::with_overrides(config, global))
    }

    fn with_overrides(mut config: AtlConfig, global: &GlobalArgs) -> Self {
        if let Some(path) = &global.file {
            config.store.file = Some(path.clone());
            config.store.kind = StoreKind::File;
        }
        if let Some(kind) = global.source {
            config.store.kind = kind;
        }
        Self { config }
    }

    /// 設定に応じたストア
    pub fn store(&self) -> Result<Box<dyn CatalogStore>, String> {
        StoreFactory::new(self.config.store.clone())
            .create()
            .map_err(describe)
    }

    /// 編集部カテゴリ一覧
    pub fn editorial(&self) -> &[String] {
        &self.config.catalog.editorial_categories
    }
}

/// 全レコードを読み込む（失敗時は再実行を促す）
pub async fn load_catalog(store: &dyn CatalogStore) -> Result<Vec<ToolRecord>, String> {
    store
        .load_all()
        .await
        .map_err(|e| format!("Failed to load tools: {}", describe(e)))
}

/// エラーメッセージにヒントを付けて整形
pub fn describe(err: AtlError) -> String {
    match err.retry_hint() {
        Some(hint) => format!("{}\n  hint: {}", err, hint),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn global(source: Option<StoreKind>, file: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            source,
            file: file.map(PathBuf::from),
            verbose: false,
        }
    }

    #[test]
    fn test_file_flag_implies_file_source() {
        let ctx = Context::with_overrides(AtlConfig::default(), &global(None, Some("tools.json")));
        assert_eq!(ctx.config.store.kind, StoreKind::File);
        assert_eq!(ctx.config.store.file, Some(PathBuf::from("tools.json")));
    }

    #[test]
    fn test_source_flag_overrides_config() {
        let ctx = Context::with_overrides(AtlConfig::default(), &global(Some(StoreKind::Legacy), None));
        assert_eq!(ctx.config.store.kind, StoreKind::Legacy);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let ctx = Context::with_overrides(AtlConfig::default(), &global(None, None));
        assert_eq!(ctx.config.store.kind, StoreKind::Rest);
        assert!(!ctx.editorial().is_empty());
    }

    #[test]
    fn test_describe_appends_hint() {
        let message = describe(AtlError::StoreApi {
            status: 503,
            message: "down".to_string(),
        });
        assert!(message.contains("down"));
        assert!(message.contains("hint:"));
    }

    #[test]
    fn test_describe_without_hint() {
        let message = describe(AtlError::Config("bad".to_string()));
        assert!(!message.contains("hint:"));
    }
}
