//! 共通HTTPヘルパー

use crate::error::{AtlError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{RequestBuilder, Response};
use std::time::Duration;

/// リクエストを送信し、失敗ステータスを `StoreApi` エラーに変換する
pub async fn send_checked(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await?;
    let status = response.status().as_u16();

    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        tracing::warn!(status, %message, "catalog store request failed");
        return Err(AtlError::StoreApi { status, message });
    }

    Ok(response)
}

/// スピナー付きで本文を取得
pub async fn fetch_text_with_spinner(request: RequestBuilder, message: &str) -> Result<String> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    let result = async {
        let response = send_checked(request).await?;
        Ok::<_, AtlError>(response.text().await?)
    }
    .await;

    pb.finish_and_clear();
    result
}

/// エラーレスポンス本文からメッセージを取り出す
///
/// JSON の `message` / `error` / `hint` を優先し、なければ本文そのまま。
pub fn extract_error_message(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["message", "error", "hint"] {
            if let Some(message) = json[key].as_str().filter(|s| !s.is_empty()) {
                return message.to_string();
            }
        }
    }

    if trimmed.is_empty() {
        "empty response".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
