//! 出力整形
//!
//! 件数サマリ、料金バッジ、タグ表示、一覧テーブル。

use crate::catalog::{CategorySelection, PricingTier, ToolRecord};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;

/// 絞り込み結果のサマリ
pub struct ResultSummary {
    pub headline: String,
    pub detail: String,
}

impl ResultSummary {
    /// "3 Tools Found" / "in Writing matching \"ai\"" 形式
    pub fn format(count: usize, category: &CategorySelection, search_term: &str) -> Self {
        let noun = if count == 1 { "Tool" } else { "Tools" };
        let mut detail = match category {
            CategorySelection::All => "across all categories".to_string(),
            CategorySelection::Named(name) => format!("in {}", name),
        };
        let term = search_term.trim();
        if !term.is_empty() {
            detail.push_str(&format!(" matching \"{}\"", term));
        }

        Self {
            headline: format!("{} {} Found", count, noun),
            detail,
        }
    }

    /// 1行表示
    pub fn line(&self) -> String {
        format!("{} {}", self.headline.bold(), self.detail.dimmed())
    }
}

/// 料金ラベル（欠損時は "N/A"）
pub fn pricing_label(record: &ToolRecord) -> &str {
    record
        .pricing
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or("N/A")
}

/// 料金区分で色付けしたラベル
pub fn pricing_badge(record: &ToolRecord) -> String {
    let label = pricing_label(record);
    match record.pricing_tier() {
        PricingTier::Free => label.green().to_string(),
        PricingTier::Freemium => label.magenta().to_string(),
        PricingTier::Paid => label.blue().to_string(),
        PricingTier::Other => label.yellow().to_string(),
        PricingTier::Unknown => label.dimmed().to_string(),
    }
}

/// 表示用タグ文字列（先頭4件 + "+N more"）
pub fn tags_cell(record: &ToolRecord) -> String {
    let (shown, rest) = record.display_tags();
    let mut cell = shown.join(", ");
    if rest > 0 {
        cell.push_str(&format!(" +{} more", rest));
    }
    cell
}

/// ツール一覧テーブル
pub fn tools_table(records: &[&ToolRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Category", "Pricing", "Tags", "Link"]);

    for record in records {
        table.add_row(vec![
            record.name.clone(),
            record.category.clone(),
            pricing_badge(record),
            tags_cell(record),
            record.link.clone(),
        ]);
    }

    table
}

/// 警告行
pub fn warning_line(message: &str) -> String {
    format!("{} {}", "!".yellow(), message.yellow())
}

/// エラー行
pub fn error_line(message: &str) -> String {
    format!("{} {}", "✗".red(), message)
}

/// 成功行
pub fn success_line(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
