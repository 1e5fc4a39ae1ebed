//! カタログエンジン
//!
//! ストアから読み込んだレコード集合に対する純粋・同期的な処理群。
//!
//! - `category`: カテゴリ正規化と別名判定
//! - `filter`: カテゴリ・検索テキストによる絞り込み
//! - `suggest`: 入力補完候補の順位付け
//! - `validate`: 追加フォームの検証と重複警告

mod category;
mod filter;
mod record;
mod suggest;
mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use category::{
    category_key, normalize, observed_categories, same_category, CategorySelection,
    ALL_CATEGORIES, DEFAULT_EDITORIAL_CATEGORIES,
};
pub use filter::{derive_view, filter_tools, FilterState};
pub use record::{sort_newest_first, NewToolRecord, PricingTier, ToolId, ToolRecord};
pub use suggest::{suggest, MAX_SUGGESTIONS};
pub use validate::{
    check_duplicates, normalize_tags, prepare, validate, Field, FormInput, SubmissionWarning,
    ValidationErrors, ValidationResult,
};

/// レコード集合から正規化済みカテゴリ一覧を作る
pub fn categories_for<E: AsRef<str>>(editorial: &[E], records: &[ToolRecord]) -> Vec<String> {
    let observed = observed_categories(records.iter().map(|r| r.category.as_str()));
    normalize(editorial, &observed)
}
