use super::*;

fn args(category: &str, search: Option<&str>) -> Args {
    Args {
        category: category.to_string(),
        search: search.map(|s| s.to_string()),
        json: false,
        simple: false,
    }
}

#[test]
fn test_filter_state_defaults_to_all() {
    let state = args("All", None).filter_state();
    assert_eq!(state.category, CategorySelection::All);
    assert_eq!(state.search_term, "");
}

#[test]
fn test_filter_state_named_category_and_search() {
    let state = args("APIs", Some("open")).filter_state();
    assert_eq!(state.category, CategorySelection::Named("APIs".to_string()));
    assert_eq!(state.search_term, "open");
}

#[test]
fn test_filter_state_lowercase_all() {
    let state = args("all", None).filter_state();
    assert_eq!(state.category, CategorySelection::All);
}
