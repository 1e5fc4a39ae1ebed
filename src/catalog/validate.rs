//! 追加フォームの検証
//!
//! 送信前に必須項目とリンク形式を検証し、既存レコードとの重複を警告する。
//! 検証は同期的かつ副作用なしで、全項目のエラーをまとめて返す。

use super::record::{NewToolRecord, ToolRecord};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("link pattern is valid"));

/// 追加フォームの入力値
///
/// すべて生の文字列で保持する。`tags` はカンマ区切りの1文字列。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub name: String,
    pub description: String,
    pub link: String,
    pub category: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub pricing: String,
    #[serde(default)]
    pub notes: String,
}

/// 検証対象の項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Description,
    Link,
    Category,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Link => "link",
            Field::Category => "category",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Link => "Link",
            Field::Category => "Category",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 項目ごとのエラー（1項目につき1件）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}

/// 検証結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { field_errors: ValidationErrors },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// フォームを検証する
///
/// - name / description / link / category は空白のみ不可
/// - link は `^https?://.+` に一致すること（形式エラーが必須エラーより優先）
pub fn validate(form: &FormInput) -> ValidationResult {
    let mut errors = ValidationErrors::default();

    let required = [
        (Field::Name, &form.name),
        (Field::Description, &form.description),
        (Field::Link, &form.link),
        (Field::Category, &form.category),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
        }
    }

    let link = form.link.trim();
    if !link.is_empty() && !LINK_PATTERN.is_match(link) {
        errors.insert(
            Field::Link,
            "Link must be a valid URL starting with http:// or https://",
        );
    }

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid {
            field_errors: errors,
        }
    }
}

/// 送信をブロックしない警告
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionWarning {
    /// 同名（大文字小文字無視）のツールが既にある
    DuplicateName { existing: String },
    /// 既存カテゴリを再利用できそう
    SimilarCategory { existing: String },
}

impl fmt::Display for SubmissionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionWarning::DuplicateName { existing } => {
                write!(f, "A tool named \"{}\" already exists", existing)
            }
            SubmissionWarning::SimilarCategory { existing } => {
                write!(f, "Consider using the existing category \"{}\"", existing)
            }
        }
    }
}

/// 既存レコードとの重複を調べる
///
/// name と category がどちらも空でないときだけ判定する。
pub fn check_duplicates(form: &FormInput, records: &[ToolRecord]) -> Vec<SubmissionWarning> {
    let name = form.name.trim().to_lowercase();
    let category = form.category.trim().to_lowercase();
    if name.is_empty() || category.is_empty() {
        return Vec::new();
    }

    let mut warnings = Vec::new();

    if let Some(existing) = records.iter().find(|r| r.name.trim().to_lowercase() == name) {
        warnings.push(SubmissionWarning::DuplicateName {
            existing: existing.name.clone(),
        });
    }

    let similar = records.iter().map(|r| r.category.as_str()).find(|existing| {
        let lower = existing.trim().to_lowercase();
        lower != category && (lower.contains(&category) || category.contains(&lower))
    });
    if let Some(existing) = similar {
        warnings.push(SubmissionWarning::SimilarCategory {
            existing: existing.to_string(),
        });
    }

    warnings
}

/// カンマ区切りのタグ入力を正規化する
///
/// `" ai, NOTES ,,art"` → `["Ai", "Notes", "Art"]`
pub fn normalize_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(capitalize)
        .collect()
}

/// 先頭文字を大文字、残りを小文字にする
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// 空白のみの任意項目は None
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// 検証を最後まで実行し、通過した場合のみ追加ペイロードを組み立てる
pub fn prepare(form: &FormInput) -> Result<NewToolRecord, ValidationErrors> {
    if let ValidationResult::Invalid { field_errors } = validate(form) {
        return Err(field_errors);
    }

    Ok(NewToolRecord {
        name: form.name.trim().to_string(),
        description: form.description.trim().to_string(),
        link: form.link.trim().to_string(),
        category: form.category.trim().to_string(),
        tags: normalize_tags(&form.tags),
        pricing: optional(&form.pricing),
        notes: optional(&form.notes),
    })
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
