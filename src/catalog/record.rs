//! カタログのレコード型
//!
//! ストアから読み込む `ToolRecord` と、追加時に送る `NewToolRecord`。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 一覧表示するタグの最大数
pub const MAX_DISPLAY_TAGS: usize = 4;

/// ストアが割り当てる不透明なID
///
/// ワイヤ上は文字列・数値のどちらでも受け付け、文字列として保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ToolId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(ToolId(s)),
            serde_json::Value::Number(n) => Ok(ToolId(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number id, got {}",
                other
            ))),
        }
    }
}

/// カタログの1エントリ
///
/// `name` / `description` / `category` はストア側の契約で必須。
/// 欠けている場合はデシリアライズ自体が失敗し、読み込み失敗として扱う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ToolId>,
    pub name: String,
    pub description: String,
    /// 旧形式の静的JSONでは `url`
    #[serde(default, alias = "url")]
    pub link: String,
    pub category: String,
    /// 配列以外の値は「タグなし」として読む
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub pricing: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// 並び順にのみ使う。解釈できない値は「日時なし」として読む
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_created_at"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl ToolRecord {
    /// タグ一覧（欠損時は空）
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// 表示用タグ（先頭 `MAX_DISPLAY_TAGS` 件）と残り件数
    pub fn display_tags(&self) -> (&[String], usize) {
        let tags = self.tags();
        if tags.len() > MAX_DISPLAY_TAGS {
            (&tags[..MAX_DISPLAY_TAGS], tags.len() - MAX_DISPLAY_TAGS)
        } else {
            (tags, 0)
        }
    }

    /// 料金区分
    pub fn pricing_tier(&self) -> PricingTier {
        PricingTier::classify(self.pricing.as_deref())
    }
}

/// タグを寛容に読む
///
/// - 配列: 文字列要素のみ採用
/// - null / 欠損 / その他: None
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// 作成日時を寛容に読む
///
/// RFC 3339 → オフセットなし日時（UTC とみなす）→ 日付のみ の順に試す。
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => parse_timestamp(&s),
        _ => None,
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// 追加リクエストのペイロード
///
/// `id` と `created_at` はストアが割り当てる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewToolRecord {
    pub name: String,
    pub description: String,
    pub link: String,
    pub category: String,
    pub tags: Vec<String>,
    pub pricing: Option<String>,
    pub notes: Option<String>,
}

/// 料金ラベルの表示区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingTier {
    Free,
    Freemium,
    Paid,
    Other,
    Unknown,
}

impl PricingTier {
    /// 自由記述の料金ラベルを分類
    ///
    /// "freemium" は "free" を含むため先に判定する。
    pub fn classify(pricing: Option<&str>) -> Self {
        let Some(label) = pricing.map(str::trim).filter(|s| !s.is_empty()) else {
            return PricingTier::Unknown;
        };
        let lower = label.to_lowercase();
        if lower == "n/a" {
            PricingTier::Unknown
        } else if lower.contains("freemium") {
            PricingTier::Freemium
        } else if lower.contains("free") {
            PricingTier::Free
        } else if lower.contains("paid") || lower.contains('$') {
            PricingTier::Paid
        } else {
            PricingTier::Other
        }
    }
}

/// 作成日時の降順（新しい順）に並べる
///
/// 日時のないレコードは末尾に回し、相対順序を保つ。
pub fn sort_newest_first(records: &mut [ToolRecord]) {
    records.sort_by(|a, b| match (&a.created_at, &b.created_at) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
