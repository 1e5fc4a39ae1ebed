//! atl browse コマンド
//!
//! カタログを1回だけ読み込み、対話的な閲覧画面を開く。

use super::{load_catalog, Context};
use crate::catalog::categories_for;
use crate::tui;

pub async fn run(ctx: &Context) -> Result<(), String> {
    let store = ctx.store()?;
    let records = load_catalog(store.as_ref()).await?;
    let categories = categories_for(ctx.editorial(), &records);
    tracing::debug!(
        records = records.len(),
        categories = categories.len(),
        "opening browser"
    );

    tui::run(records, categories).map_err(|e| format!("TUI error: {}", e))
}
