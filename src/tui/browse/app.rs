//! 閲覧 TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: レコードのスナップショットと絞り込み状態
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: 状態更新（選択は絞り込み変更のたびに整合させる）

use crate::catalog::{derive_view, suggest, CategorySelection, FilterState, ToolRecord, ALL_CATEGORIES};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 検索欄にフォーカス移動
    SearchFocus,
    /// 検索欄からフォーカス解除（リストへ戻る）
    SearchUnfocus,
    /// 検索文字入力
    SearchInput(char),
    /// 検索文字削除
    SearchBackspace,
    /// 検索クリア
    SearchClear,
    /// 先頭の補完候補で検索テキストを置き換える
    AcceptSuggestion,
    /// 次のカテゴリへ
    NextCategory,
    /// 前のカテゴリへ
    PrevCategory,
    /// 選択を上へ
    Up,
    /// 選択を下へ
    Down,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    /// 読み込み済みレコード（新しい順、閲覧中は変更しない）
    pub records: Vec<ToolRecord>,
    /// 正規化済みカテゴリ（先頭は "All"）
    pub categories: Vec<String>,
    /// 選択中のカテゴリ位置
    pub category_index: usize,
    /// 検索テキスト
    pub search_text: String,
    /// 検索欄にフォーカスしているか
    pub search_focused: bool,
    /// リストの選択状態
    pub list_state: ListState,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    /// 新しいモデルを作成
    pub fn new(records: Vec<ToolRecord>, mut categories: Vec<String>) -> Self {
        if categories.first().map(String::as_str) != Some(ALL_CATEGORIES) {
            categories.insert(0, ALL_CATEGORIES.to_string());
        }

        let mut model = Self {
            records,
            categories,
            category_index: 0,
            search_text: String::new(),
            search_focused: false,
            list_state: ListState::default(),
            should_quit: false,
        };
        clamp_selection(&mut model);
        model
    }

    /// 選択中のカテゴリ
    pub fn category(&self) -> CategorySelection {
        self.categories
            .get(self.category_index)
            .map(|c| CategorySelection::parse(c))
            .unwrap_or_default()
    }

    /// 現在の絞り込み状態
    pub fn filter_state(&self) -> FilterState {
        FilterState::new(self.category(), self.search_text.clone())
    }

    /// 表示対象のレコード
    pub fn visible(&self) -> Vec<&ToolRecord> {
        derive_view(&self.records, &self.filter_state())
    }

    /// 選択中のレコード
    pub fn selected(&self) -> Option<&ToolRecord> {
        let index = self.list_state.selected()?;
        self.visible().get(index).copied()
    }

    /// 検索テキストに対する補完候補
    pub fn suggestions(&self) -> Vec<String> {
        suggest(&self.records, &self.search_text)
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.search_focused {
            // 検索欄にフォーカス中のキー処理
            match key {
                KeyCode::Esc if !self.search_text.is_empty() => Some(Msg::SearchClear),
                KeyCode::Esc | KeyCode::Down => Some(Msg::SearchUnfocus),
                KeyCode::Enter => Some(Msg::AcceptSuggestion),
                KeyCode::Tab => Some(Msg::NextCategory),
                KeyCode::BackTab => Some(Msg::PrevCategory),
                KeyCode::Backspace => Some(Msg::SearchBackspace),
                KeyCode::Char(c) => Some(Msg::SearchInput(c)),
                _ => None,
            }
        } else {
            // リスト（通常）フォーカス時のキー処理
            match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Char('/') => Some(Msg::SearchFocus),
                KeyCode::Esc if !self.search_text.is_empty() => Some(Msg::SearchClear),
                KeyCode::Tab | KeyCode::Right => Some(Msg::NextCategory),
                KeyCode::BackTab | KeyCode::Left => Some(Msg::PrevCategory),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
                _ => None,
            }
        }
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::SearchFocus => model.search_focused = true,
        Msg::SearchUnfocus => model.search_focused = false,
        Msg::SearchInput(c) => {
            model.search_text.push(c);
            clamp_selection(model);
        }
        Msg::SearchBackspace => {
            model.search_text.pop();
            clamp_selection(model);
        }
        Msg::SearchClear => {
            model.search_text.clear();
            clamp_selection(model);
        }
        Msg::AcceptSuggestion => {
            if let Some(top) = model.suggestions().into_iter().next() {
                model.search_text = top;
                clamp_selection(model);
            }
            model.search_focused = false;
        }
        Msg::NextCategory => {
            let len = model.categories.len();
            model.category_index = (model.category_index + 1) % len;
            clamp_selection(model);
        }
        Msg::PrevCategory => {
            let len = model.categories.len();
            model.category_index = (model.category_index + len - 1) % len;
            clamp_selection(model);
        }
        Msg::Up => {
            if let Some(index) = model.list_state.selected() {
                model.list_state.select(Some(index.saturating_sub(1)));
            }
        }
        Msg::Down => {
            let len = model.visible().len();
            if let Some(index) = model.list_state.selected() {
                if index + 1 < len {
                    model.list_state.select(Some(index + 1));
                }
            }
        }
    }
}

/// 絞り込み変更後に選択状態を整合させる
fn clamp_selection(model: &mut Model) {
    let len = model.visible().len();
    if len == 0 {
        model.list_state.select(None);
    } else {
        let index = model.list_state.selected().unwrap_or(0).min(len - 1);
        model.list_state.select(Some(index));
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
