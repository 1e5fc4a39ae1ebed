use super::*;
use crate::catalog::category::same_category;
use crate::catalog::ToolRecord;
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Writing", "writing", "API", "APIs", "apis", "Website", "Websites", "Design", "Audio",
    ])
    .prop_map(str::to_string)
}

fn tool_strategy() -> impl Strategy<Value = ToolRecord> {
    (
        "[a-zA-Z ]{1,12}",
        "[a-z ]{0,20}",
        category_strategy(),
        prop::option::of(prop::collection::vec("[a-zA-Z]{1,6}", 0..4)),
        prop::option::of(prop::sample::select(vec!["Free", "Paid", "Freemium"])),
    )
        .prop_map(|(name, description, category, tags, pricing)| ToolRecord {
            id: None,
            name,
            description,
            link: "https://example.com".to_string(),
            category,
            tags,
            pricing: pricing.map(str::to_string),
            notes: None,
            created_at: None,
        })
}

fn records_strategy() -> impl Strategy<Value = Vec<ToolRecord>> {
    prop::collection::vec(tool_strategy(), 0..15)
}

fn term_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,3}"
}

fn owned(records: Vec<&ToolRecord>) -> Vec<ToolRecord> {
    records.into_iter().cloned().collect()
}

proptest! {
    /// All + 空検索は恒等
    #[test]
    fn prop_identity(records in records_strategy()) {
        let result = owned(filter_tools(&records, &CategorySelection::All, ""));
        prop_assert_eq!(result, records);
    }

    /// カテゴリ絞り込みは一致するレコードを過不足なく返す
    #[test]
    fn prop_category_filter_is_exact(
        records in records_strategy(),
        category in category_strategy()
    ) {
        let selection = CategorySelection::parse(&category);
        let result = filter_tools(&records, &selection, "");
        let expected: Vec<&ToolRecord> = records
            .iter()
            .filter(|r| same_category(&r.category, &category))
            .collect();
        prop_assert_eq!(result, expected);
    }

    /// 検索結果はすべてクエリを含む
    #[test]
    fn prop_search_results_contain_term(
        records in records_strategy(),
        term in term_strategy()
    ) {
        let query = term.to_lowercase();
        for record in filter_tools(&records, &CategorySelection::All, &term) {
            prop_assert!(matches_search(record, &query));
        }
    }

    /// 検索は冪等
    #[test]
    fn prop_search_is_idempotent(
        records in records_strategy(),
        term in term_strategy()
    ) {
        let once = owned(filter_tools(&records, &CategorySelection::All, &term));
        let twice = owned(filter_tools(&once, &CategorySelection::All, &term));
        prop_assert_eq!(twice, once);
    }

    /// 両条件の結果は各単独条件の結果の部分集合
    #[test]
    fn prop_filter_is_monotonic(
        records in records_strategy(),
        category in category_strategy(),
        term in term_strategy()
    ) {
        let selection = CategorySelection::parse(&category);
        let both = filter_tools(&records, &selection, &term);
        let by_category = filter_tools(&records, &selection, "");
        let by_term = filter_tools(&records, &CategorySelection::All, &term);

        for record in both {
            prop_assert!(by_category.iter().any(|r| std::ptr::eq(*r, record)));
            prop_assert!(by_term.iter().any(|r| std::ptr::eq(*r, record)));
        }
    }
}
