//! File-backed catalog integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {
    "id": 1,
    "name": "Notion AI",
    "description": "Writing assistant inside your notes",
    "link": "https://notion.so/product/ai",
    "category": "Productivity",
    "tags": ["notes", "writing"],
    "pricing": "Freemium",
    "created_at": "2024-03-01T10:00:00Z"
  },
  {
    "id": 2,
    "name": "OpenAI API",
    "description": "Models over HTTP",
    "link": "https://platform.openai.com",
    "category": "API",
    "pricing": "Paid",
    "created_at": "2024-05-01T10:00:00Z"
  },
  {
    "id": "3",
    "name": "Midjourney",
    "description": "Image generation from prompts",
    "url": "https://midjourney.com",
    "category": "Image Generation",
    "tags": ["art", "images"],
    "created_at": "2024-01-01T10:00:00Z"
  }
]"#;

/// 一時 HOME とカタログファイルを用意する
struct Fixture {
    home: TempDir,
    catalog: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let home = TempDir::new().unwrap();
        let catalog = home.path().join("tools.json");
        std::fs::write(&catalog, CATALOG).unwrap();
        Self { home, catalog }
    }

    fn atl(&self) -> Command {
        let mut cmd = Command::cargo_bin("atl").unwrap();
        cmd.env("HOME", self.home.path())
            .env_remove("ATL_CONFIG")
            .env_remove("ATL_STORE_URL")
            .env_remove("ATL_STORE_KEY")
            .env_remove("ATL_STORE_TABLE")
            .env_remove("RUST_LOG")
            .arg("--file")
            .arg(&self.catalog);
        cmd
    }
}

#[test]
fn test_list_simple_is_newest_first() {
    let fixture = Fixture::new();
    let output = fixture.atl().args(["list", "--simple"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, vec!["OpenAI API", "Notion AI", "Midjourney"]);
}

#[test]
fn test_list_search_filters_records() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .args(["list", "--search", "NOTES", "--simple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notion AI"))
        .stdout(predicate::str::contains("Midjourney").not());
}

#[test]
fn test_list_category_alias_json() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .args(["list", "--category", "APIs", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"OpenAI API\""))
        .stdout(predicate::str::contains("Notion AI").not());
}

#[test]
fn test_list_table_shows_summary() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .args(["list", "--category", "Productivity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Tool Found"))
        .stdout(predicate::str::contains("in Productivity"));
}

#[test]
fn test_list_no_results_message() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .args(["list", "--search", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 Tools Found"));
}

#[test]
fn test_categories_merge_editorial_and_observed() {
    let fixture = Fixture::new();
    let output = fixture.atl().arg("categories").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let categories: Vec<&str> = stdout.lines().collect();
    assert_eq!(categories.first(), Some(&"All"));
    assert!(categories.contains(&"APIs"));
    assert!(categories.contains(&"Productivity"));
    // "API" は "APIs" の別名なので重複しない
    assert!(!categories.contains(&"API"));
}

#[test]
fn test_suggest_prints_candidates() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .args(["suggest", "mid"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Midjourney"));
}

#[test]
fn test_suggest_single_char_is_empty() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .args(["suggest", "m"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_add_validation_failure_lists_fields() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .args([
            "add",
            "--description",
            "Something",
            "--link",
            "notaurl",
            "--category",
            "Research",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name is required"))
        .stderr(predicate::str::contains("Link must be a valid URL"));
}

#[test]
fn test_add_validation_failure_still_warns_about_duplicates() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .args([
            "add",
            "--name",
            "notion ai",
            "--description",
            "Duplicate entry",
            "--link",
            "notaurl",
            "--category",
            "Productivity",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Link must be a valid URL"))
        .stderr(predicate::str::contains("A tool named \"Notion AI\" already exists"));
}

#[test]
fn test_add_dry_run_warns_about_duplicates() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .args([
            "add",
            "--name",
            "notion ai",
            "--description",
            "Duplicate entry",
            "--link",
            "https://notion.so",
            "--category",
            "Productivity",
            "--tags",
            "notes, AI",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Notes\""))
        .stderr(predicate::str::contains("A tool named \"Notion AI\" already exists"));
}

#[test]
fn test_add_to_file_source_is_read_only() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .args([
            "add",
            "--name",
            "Perplexity",
            "--description",
            "Answer engine",
            "--link",
            "https://perplexity.ai",
            "--category",
            "Research",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));

    // 読み取り専用エラーでは下書きを残さない
    assert!(!fixture.home.path().join(".atl").join("draft.json").exists());
}

#[test]
fn test_add_retry_without_draft_fails() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .args(["add", "--retry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved draft"));
}

#[test]
fn test_ping_file_source() {
    let fixture = Fixture::new();
    fixture
        .atl()
        .arg("ping")
        .assert()
        .success()
        .stdout(predicate::str::contains("Connected to file store"));
}

#[test]
fn test_missing_catalog_file_fails() {
    let fixture = Fixture::new();
    std::fs::remove_file(&fixture.catalog).unwrap();
    fixture
        .atl()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load tools"));
}

#[test]
fn test_rest_source_requires_credentials() {
    let home = TempDir::new().unwrap();
    Command::cargo_bin("atl")
        .unwrap()
        .env("HOME", home.path())
        .env_remove("ATL_CONFIG")
        .env_remove("ATL_STORE_URL")
        .env_remove("ATL_STORE_KEY")
        .args(["--source", "rest", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ATL_STORE_URL"));
}
