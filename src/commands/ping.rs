//! atl ping コマンド
//!
//! カタログストアに1件だけ問い合わせて接続を確認する。

use super::{describe, Context};
use crate::output::success_line;

pub async fn run(ctx: &Context) -> Result<(), String> {
    let store = ctx.store()?;
    let kind = store.kind();
    tracing::debug!(%kind, "checking catalog store connection");

    let sample = store
        .ping()
        .await
        .map_err(|e| format!("Connection failed: {}", describe(e)))?;

    println!(
        "{}",
        success_line(&format!(
            "Connected to {} store ({} sample record(s))",
            kind, sample
        ))
    );
    Ok(())
}
