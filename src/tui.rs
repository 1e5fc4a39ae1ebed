//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用したカタログ閲覧画面を提供する。

mod browse;

pub use browse::run;
