//! atl suggest コマンド
//!
//! 入力途中の検索語に対する補完候補を表示する。

use super::{load_catalog, Context};
use crate::catalog::suggest;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Partial search text (at least 2 characters)
    pub term: String,
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let store = ctx.store()?;
    let records = load_catalog(store.as_ref()).await?;

    let suggestions = suggest(&records, &args.term);
    if suggestions.is_empty() {
        eprintln!("No suggestions for \"{}\"", args.term.trim());
        return Ok(());
    }

    for suggestion in suggestions {
        println!("{suggestion}");
    }
    Ok(())
}
