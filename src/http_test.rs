use super::*;

#[test]
fn test_extract_message_from_json() {
    let body = r#"{"code":"42P01","message":"relation \"public.tool\" does not exist"}"#;
    assert_eq!(
        extract_error_message(body),
        "relation \"public.tool\" does not exist"
    );
}

#[test]
fn test_extract_error_key() {
    assert_eq!(
        extract_error_message(r#"{"error":"Invalid API key"}"#),
        "Invalid API key"
    );
}

#[test]
fn test_extract_plain_text() {
    assert_eq!(extract_error_message("  Bad Gateway \n"), "Bad Gateway");
}

#[test]
fn test_extract_empty_body() {
    assert_eq!(extract_error_message(""), "empty response");
}

#[test]
fn test_extract_json_without_known_keys() {
    assert_eq!(extract_error_message(r#"{"code":1}"#), r#"{"code":1}"#);
}
