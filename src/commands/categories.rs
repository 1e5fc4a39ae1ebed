//! atl categories コマンド
//!
//! 編集部カテゴリと読み込んだレコードのカテゴリを統合した一覧を表示する。

use super::{load_catalog, Context};
use crate::catalog::{categories_for, filter_tools, CategorySelection, ToolRecord};
use clap::Parser;
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show the number of tools in each category
    #[arg(long, conflicts_with = "json")]
    pub counts: bool,
}

/// カテゴリと件数
#[derive(Debug, Serialize, PartialEq, Eq)]
struct CategoryCount {
    name: String,
    tools: usize,
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let store = ctx.store()?;
    let records = load_catalog(store.as_ref()).await?;
    let categories = categories_for(ctx.editorial(), &records);
    tracing::debug!(count = categories.len(), "normalized categories");

    if args.json {
        let counted = count_tools(&categories, &records);
        let json = serde_json::to_string_pretty(&counted)
            .map_err(|e| format!("Failed to serialize categories: {}", e))?;
        println!("{json}");
    } else if args.counts {
        for entry in count_tools(&categories, &records) {
            println!("{} ({})", entry.name, entry.tools);
        }
    } else {
        for category in &categories {
            println!("{category}");
        }
    }

    Ok(())
}

/// 各カテゴリに属するツール数（別名も含む）
fn count_tools(categories: &[String], records: &[ToolRecord]) -> Vec<CategoryCount> {
    categories
        .iter()
        .map(|name| CategoryCount {
            name: name.clone(),
            tools: filter_tools(records, &CategorySelection::parse(name), "").len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::make_tool;

    #[test]
    fn test_count_tools_includes_aliases() {
        let records = vec![
            make_tool("OpenAI API", "API"),
            make_tool("Replicate", "APIs"),
            make_tool("Jasper", "Writing"),
        ];
        let categories = categories_for(&["APIs", "Writing"], &records);
        let counts = count_tools(&categories, &records);

        assert_eq!(
            counts,
            vec![
                CategoryCount { name: "All".to_string(), tools: 3 },
                CategoryCount { name: "APIs".to_string(), tools: 2 },
                CategoryCount { name: "Writing".to_string(), tools: 1 },
            ]
        );
    }

    #[test]
    fn test_editorial_category_without_tools_counts_zero() {
        let records = vec![make_tool("Jasper", "Writing")];
        let categories = categories_for(&["Audio"], &records);
        let counts = count_tools(&categories, &records);
        assert!(counts.contains(&CategoryCount { name: "Audio".to_string(), tools: 0 }));
    }
}
