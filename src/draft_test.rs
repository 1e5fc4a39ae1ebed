use super::*;
use tempfile::TempDir;

fn sample_form() -> FormInput {
    FormInput {
        name: "Perplexity".to_string(),
        description: "Answer engine".to_string(),
        link: "https://perplexity.ai".to_string(),
        category: "Research".to_string(),
        tags: "search, answers".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_load_missing_returns_none() {
    let dir = TempDir::new().unwrap();
    let draft = Draft::new(dir.path().join("draft.json"));
    assert_eq!(draft.load().unwrap(), None);
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let draft = Draft::new(dir.path().join("draft.json"));

    draft.save(&sample_form()).unwrap();

    assert_eq!(draft.load().unwrap(), Some(sample_form()));
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let draft = Draft::new(dir.path().join("nested").join("draft.json"));

    draft.save(&sample_form()).unwrap();

    assert!(draft.path().exists());
}

#[test]
fn test_save_overwrites_existing() {
    let dir = TempDir::new().unwrap();
    let draft = Draft::new(dir.path().join("draft.json"));
    draft.save(&sample_form()).unwrap();

    let mut updated = sample_form();
    updated.name = "Perplexity Pro".to_string();
    draft.save(&updated).unwrap();

    assert_eq!(draft.load().unwrap().unwrap().name, "Perplexity Pro");
}

#[test]
fn test_clear_removes_file_and_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let draft = Draft::new(dir.path().join("draft.json"));
    draft.save(&sample_form()).unwrap();

    draft.clear().unwrap();
    assert!(!draft.path().exists());
    draft.clear().unwrap();
}

#[test]
fn test_load_corrupt_draft_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Draft::new(path).load();
    assert!(matches!(result, Err(AtlError::Json(_))));
}
