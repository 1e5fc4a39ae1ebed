//! atl list コマンド
//!
//! カテゴリと検索テキストで絞り込んだツール一覧を表示する。

use super::{load_catalog, Context};
use crate::catalog::{derive_view, CategorySelection, FilterState, ToolRecord};
use crate::output::{tools_table, ResultSummary};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(after_help = "OUTPUT FORMATS:\n  (default)  Table with a result summary\n  --json     Visible records as JSON\n  --simple   Tool names only")]
pub struct Args {
    /// Filter by category ("All" for every category)
    #[arg(long, short, default_value = "All")]
    pub category: String,

    /// Search name, description, category, pricing and tags
    #[arg(long, short)]
    pub search: Option<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only tool names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

impl Args {
    /// 絞り込み状態
    fn filter_state(&self) -> FilterState {
        FilterState::new(
            CategorySelection::parse(&self.category),
            self.search.clone().unwrap_or_default(),
        )
    }
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    // 1. 全件読み込み
    let store = ctx.store()?;
    let records = load_catalog(store.as_ref()).await?;

    // 2. 絞り込み
    let state = args.filter_state();
    let visible = derive_view(&records, &state);
    tracing::debug!(
        total = records.len(),
        visible = visible.len(),
        category = state.category.label(),
        "filtered catalog"
    );

    // 3. 出力
    if args.json {
        print_json(&visible)
    } else if args.simple {
        print_simple(&visible);
        Ok(())
    } else {
        print_table(&visible, &state);
        Ok(())
    }
}

fn print_json(records: &[&ToolRecord]) -> Result<(), String> {
    serde_json::to_string_pretty(records)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize tools: {}", e))
}

fn print_simple(records: &[&ToolRecord]) {
    for record in records {
        println!("{}", record.name);
    }
}

fn print_table(records: &[&ToolRecord], state: &FilterState) {
    let summary = ResultSummary::format(records.len(), &state.category, &state.search_term);

    if records.is_empty() {
        println!("{}", summary.line());
        if state.has_search() {
            println!("Try adjusting your search or category filter");
        } else {
            println!("No tools in this category yet");
        }
        return;
    }

    println!("{}", tools_table(records));
    println!("{}", summary.line());
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
