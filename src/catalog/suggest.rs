//! 入力補完候補
//!
//! 検索欄の入力途中テキストから、名前・カテゴリ・タグの候補を順位付けして返す。

use super::record::ToolRecord;
use std::collections::HashSet;

/// 候補の最大件数
pub const MAX_SUGGESTIONS: usize = 8;

/// 候補を出し始める最小文字数
const MIN_TERM_CHARS: usize = 2;

/// 入力途中のテキストから補完候補を返す
///
/// 並び順:
/// 1. 完全一致（大文字小文字無視）
/// 2. 前方一致
/// 3. 短い順
///
/// 同順位は出現順を保つ。
pub fn suggest(records: &[ToolRecord], partial_term: &str) -> Vec<String> {
    let term = partial_term.trim();
    if term.chars().count() < MIN_TERM_CHARS {
        return Vec::new();
    }
    let query = term.to_lowercase();

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates: Vec<(String, String)> = Vec::new();

    let values = records.iter().flat_map(|record| {
        [record.name.as_str(), record.category.as_str()]
            .into_iter()
            .chain(record.tags().iter().map(String::as_str))
    });

    for value in values {
        let lower = value.to_lowercase();
        if !lower.contains(&query) || !seen.insert(lower.clone()) {
            continue;
        }
        candidates.push((value.to_string(), lower));
    }

    // sort_by_key は安定ソート
    candidates.sort_by_key(|(original, lower)| {
        (
            lower != &query,
            !lower.starts_with(&query),
            original.chars().count(),
        )
    });

    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(original, _)| original)
        .collect()
}

#[cfg(test)]
#[path = "suggest_test.rs"]
mod tests;
