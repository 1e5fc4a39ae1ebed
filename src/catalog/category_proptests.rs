use super::*;
use proptest::prelude::*;

/// カテゴリ名に使える文字列（別名の元になる語も混ぜる）
fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z ]{0,11}",
        Just("API".to_string()),
        Just("api".to_string()),
        Just("Website".to_string()),
        Just("WRITING".to_string()),
    ]
}

proptest! {
    /// 観測されたカテゴリはすべていずれかのエントリに対応する
    #[test]
    fn prop_no_observed_category_is_lost(
        observed in prop::collection::vec(category_strategy(), 0..20)
    ) {
        let result = normalize(DEFAULT_EDITORIAL_CATEGORIES, &observed);
        for category in &observed {
            let matches = result
                .iter()
                .filter(|entry| same_category(entry, category))
                .count();
            // "all" は番兵 "All" に吸収される
            prop_assert_eq!(matches, 1, "category {:?} in {:?}", category, result);
        }
    }

    /// 出力に大文字小文字違いの重複はない
    #[test]
    fn prop_no_case_insensitive_duplicates(
        observed in prop::collection::vec(category_strategy(), 0..20)
    ) {
        let result = normalize(DEFAULT_EDITORIAL_CATEGORIES, &observed);
        let mut keys: Vec<String> = result.iter().map(|c| category_key(c)).collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), before);
    }

    /// 先頭は常に "All"
    #[test]
    fn prop_all_is_first(
        observed in prop::collection::vec(category_strategy(), 0..10)
    ) {
        let result = normalize(&[] as &[&str], &observed);
        prop_assert_eq!(result[0].as_str(), ALL_CATEGORIES);
    }
}
