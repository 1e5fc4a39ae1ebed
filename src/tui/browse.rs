//! カタログ閲覧 TUI
//!
//! 読み込み済みのレコードをカテゴリと検索テキストで絞り込みながら閲覧する。
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update（Elm Architecture）
//! - `view`: 画面描画

mod app;
mod view;

use crate::catalog::ToolRecord;
use app::{update, Model};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};

/// TUI を実行
///
/// `categories` は正規化済み（先頭が "All"）のカテゴリ一覧。
pub fn run(records: Vec<ToolRecord>, categories: Vec<String>) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let result = event_loop(Model::new(records, categories));

    // ターミナルを復元（どの段階が失敗しても両方実行する）
    let raw_mode = terminal::disable_raw_mode();
    let screen = stdout().execute(LeaveAlternateScreen).map(|_| ());

    first_error([result, raw_mode, screen])
}

/// 最初のエラーを返す（すべて成功なら Ok）
fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}

fn event_loop(mut model: Model) -> io::Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    while !model.should_quit {
        terminal.draw(|f| view::view(f, &model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(msg) = model.key_to_msg(key.code) {
                update(&mut model, msg);
            }
        }
    }

    Ok(())
}
