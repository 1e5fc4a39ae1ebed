//! テスト用レコードビルダー

use super::ToolRecord;

/// 最小構成のレコードを作る
pub fn make_tool(name: &str, category: &str) -> ToolRecord {
    ToolRecord {
        id: None,
        name: name.to_string(),
        description: format!("{name} description"),
        link: format!("https://example.com/{}", name.to_lowercase().replace(' ', "-")),
        category: category.to_string(),
        tags: None,
        pricing: None,
        notes: None,
        created_at: None,
    }
}

/// タグ付きのレコードを作る
pub fn make_tool_with_tags(name: &str, category: &str, tags: &[&str]) -> ToolRecord {
    ToolRecord {
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        ..make_tool(name, category)
    }
}

/// 料金ラベル付きのレコードを作る
pub fn make_tool_with_pricing(name: &str, category: &str, pricing: &str) -> ToolRecord {
    ToolRecord {
        pricing: Some(pricing.to_string()),
        ..make_tool(name, category)
    }
}
