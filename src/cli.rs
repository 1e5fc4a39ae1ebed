use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{add, browse, categories, list, ping, suggest};
use crate::config::StoreKind;

#[derive(Debug, Parser)]
#[command(name = "atl")]
#[command(about = "AI Tools Library CLI", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// 全サブコマンド共通のオプション
#[derive(Debug, clap::Args)]
pub struct GlobalArgs {
    /// Catalog source (overrides [store] kind in the config file)
    #[arg(long, global = true, value_enum)]
    pub source: Option<StoreKind>,

    /// Local JSON catalog file (implies --source file)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// ツール一覧（カテゴリ・検索で絞り込み）
    List(list::Args),

    /// カテゴリ一覧
    Categories(categories::Args),

    /// 検索語の補完候補
    Suggest(suggest::Args),

    /// ツールを追加
    Add(add::Args),

    /// ストアへの接続確認
    Ping,

    /// 対話的にツールを閲覧
    Browse,
}
