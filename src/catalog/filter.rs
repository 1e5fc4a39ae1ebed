//! フィルタロジック
//!
//! ツール一覧をカテゴリと検索テキストで絞り込む共通モジュール。
//! CLI と TUI の双方がこのモジュールの純粋関数から表示集合を導出する。

use super::category::CategorySelection;
use super::record::ToolRecord;

/// 絞り込み状態
///
/// 表示側が保持し、変更のたびに `derive_view` へ渡す。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategorySelection,
    pub search_term: String,
}

impl FilterState {
    pub fn new(category: CategorySelection, search_term: impl Into<String>) -> Self {
        Self {
            category,
            search_term: search_term.into(),
        }
    }

    /// 検索テキストが有効か（空白のみは無効）
    pub fn has_search(&self) -> bool {
        !self.search_term.trim().is_empty()
    }
}

/// 表示集合を導出する
pub fn derive_view<'a>(records: &'a [ToolRecord], state: &FilterState) -> Vec<&'a ToolRecord> {
    filter_tools(records, &state.category, &state.search_term)
}

/// カテゴリと検索テキストでツールを絞り込む
///
/// - 入力順を保持する（関連度による並べ替えはしない）
/// - カテゴリは大文字小文字無視、API/Website の別名も一致とみなす
/// - 検索テキストは name / description / category / pricing / tags の部分一致
/// - 両条件は AND
pub fn filter_tools<'a>(
    records: &'a [ToolRecord],
    category: &CategorySelection,
    search_term: &str,
) -> Vec<&'a ToolRecord> {
    let query = if search_term.trim().is_empty() {
        None
    } else {
        Some(search_term.to_lowercase())
    };

    records
        .iter()
        .filter(|record| category.matches(&record.category))
        .filter(|record| match &query {
            Some(query) => matches_search(record, query),
            None => true,
        })
        .collect()
}

/// レコードが検索クエリ（小文字化済み）を含むか
pub fn matches_search(record: &ToolRecord, query: &str) -> bool {
    record.name.to_lowercase().contains(query)
        || record.description.to_lowercase().contains(query)
        || record.category.to_lowercase().contains(query)
        || record
            .pricing
            .as_ref()
            .is_some_and(|p| p.to_lowercase().contains(query))
        || record
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

#[cfg(test)]
#[path = "filter_proptests.rs"]
mod proptests;
