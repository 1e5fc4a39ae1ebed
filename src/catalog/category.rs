//! カテゴリ正規化
//!
//! 編集部のカテゴリ一覧と、読み込んだレコードに現れるカテゴリを統合する。
//!
//! - 大文字小文字を区別せずに重複排除
//! - 編集部の表記を優先、それ以外は最初に現れた表記を採用
//! - `api` ≡ `APIs`、`website` ≡ `Websites` の2組だけ別名として扱う

use std::collections::HashSet;

/// 「すべて」を表す番兵カテゴリ
pub const ALL_CATEGORIES: &str = "All";

/// 組み込みの編集部カテゴリ一覧
pub const DEFAULT_EDITORIAL_CATEGORIES: &[&str] = &[
    "AI Assistants",
    "APIs",
    "Audio",
    "Code Assistants",
    "Design",
    "Image Generation",
    "Marketing",
    "Productivity",
    "Research",
    "Video",
    "Websites",
    "Writing",
];

/// 別名ルール（小文字キー → 正規キー）
const ALIASES: &[(&str, &str)] = &[("api", "apis"), ("website", "websites")];

/// カテゴリの比較キー
///
/// 小文字化したうえで別名を正規キーへ寄せる。
pub fn category_key(category: &str) -> String {
    let lower = category.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(lower)
}

/// 2つのカテゴリが同一とみなせるか
pub fn same_category(a: &str, b: &str) -> bool {
    category_key(a) == category_key(b)
}

/// カテゴリ選択状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    /// 絞り込みなし
    #[default]
    All,
    /// 特定カテゴリ
    Named(String),
}

impl CategorySelection {
    /// ユーザー入力から選択状態を生成
    ///
    /// 空文字と "All"（大文字小文字無視）は番兵として扱う。
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategorySelection::All
        } else {
            CategorySelection::Named(trimmed.to_string())
        }
    }

    /// 表示名
    pub fn label(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Named(name) => name,
        }
    }

    /// レコードのカテゴリがこの選択に含まれるか
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Named(name) => same_category(name, category),
        }
    }
}

/// カテゴリ一覧を正規化
///
/// 先頭に `"All"` を置き、残りを表示名の大文字小文字無視で昇順に並べる。
/// 観測されたカテゴリは必ずいずれか1つのエントリに対応する。
pub fn normalize<E, O>(editorial: &[E], observed: &[O]) -> Vec<String>
where
    E: AsRef<str>,
    O: AsRef<str>,
{
    let all_key = category_key(ALL_CATEGORIES);
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries: Vec<String> = Vec::new();

    let candidates = editorial
        .iter()
        .map(AsRef::as_ref)
        .chain(observed.iter().map(AsRef::as_ref));

    for raw in candidates {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }
        let key = category_key(name);
        if key == all_key || !seen.insert(key) {
            continue;
        }
        entries.push(name.to_string());
    }

    entries.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    let mut result = Vec::with_capacity(entries.len() + 1);
    result.push(ALL_CATEGORIES.to_string());
    result.extend(entries);
    result
}

/// レコード群から重複のないカテゴリ値を出現順に取り出す
pub fn observed_categories<'a, I>(categories: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result: Vec<&str> = Vec::new();
    for category in categories {
        if !result.contains(&category) {
            result.push(category);
        }
    }
    result
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;

#[cfg(test)]
#[path = "category_proptests.rs"]
mod proptests;
