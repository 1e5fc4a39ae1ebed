use super::*;
use crate::catalog::testing::{make_tool, make_tool_with_tags};

fn sample() -> Vec<ToolRecord> {
    vec![
        make_tool_with_tags("Notion AI", "Productivity", &["ai", "notes"]),
        make_tool_with_tags("Midjourney", "Image Generation", &["art", "images"]),
        make_tool_with_tags("Runway", "Video", &["video editing", "AI"]),
        make_tool("Image Upscaler", "Image Generation"),
    ]
}

#[test]
fn short_terms_return_nothing() {
    let records = sample();
    assert!(suggest(&records, "").is_empty());
    assert!(suggest(&records, "a").is_empty());
    assert!(suggest(&records, " a ").is_empty());
}

#[test]
fn exact_match_ranks_first() {
    let records = sample();
    let result = suggest(&records, "ai");
    assert_eq!(result[0], "ai");
}

#[test]
fn case_insensitive_duplicates_keep_first_casing() {
    let records = sample();
    let result = suggest(&records, "ai");
    assert_eq!(result.iter().filter(|s| s.eq_ignore_ascii_case("ai")).count(), 1);
    assert!(!result.contains(&"AI".to_string()));
}

#[test]
fn prefix_matches_rank_before_substring_matches() {
    let records = sample();
    let result = suggest(&records, "ima");
    // "images" / "Image Upscaler" / "Image Generation" は前方一致
    assert_eq!(result, ["images", "Image Upscaler", "Image Generation"]);
}

#[test]
fn substring_matches_follow_prefix_matches() {
    let records = vec![make_tool("Jasper AI", "Writing"), make_tool("Aiva", "Audio")];
    let result = suggest(&records, "ai");
    assert_eq!(result, ["Aiva", "Jasper AI"]);
}

#[test]
fn shorter_candidates_win_ties() {
    let records = vec![
        make_tool("Notebook Assistant", "Writing"),
        make_tool("Notes", "Writing"),
    ];
    let result = suggest(&records, "note");
    assert_eq!(result, ["Notes", "Notebook Assistant"]);
}

#[test]
fn candidates_include_categories() {
    let records = sample();
    let result = suggest(&records, "produc");
    assert_eq!(result, ["Productivity"]);
}

#[test]
fn caps_at_eight() {
    let records: Vec<ToolRecord> = (0..20)
        .map(|i| make_tool(&format!("Tool {i}"), "Utilities"))
        .collect();
    let result = suggest(&records, "tool");
    assert_eq!(result.len(), MAX_SUGGESTIONS);
    assert_eq!(result[0], "Tool 0");
}

#[test]
fn no_match_returns_empty() {
    let records = sample();
    assert!(suggest(&records, "zzz").is_empty());
}
