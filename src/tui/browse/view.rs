//! 閲覧画面の描画

use super::app::Model;
use crate::catalog::ToolRecord;
use crate::output::{pricing_label, ResultSummary};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap};

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 検索欄
            Constraint::Length(1), // 補完候補
            Constraint::Length(1), // カテゴリタブ
            Constraint::Min(5),    // 一覧 + 詳細
            Constraint::Length(1), // 件数サマリ
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    view_search(f, model, chunks[0]);
    view_suggestions(f, model, chunks[1]);
    view_categories(f, model, chunks[2]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[3]);

    let visible = model.visible();
    view_list(f, model, &visible, body[0]);
    view_detail(f, model.selected(), body[1]);

    let state = model.filter_state();
    let summary = ResultSummary::format(visible.len(), &state.category, &state.search_term);
    let summary = Paragraph::new(format!(" {} {}", summary.headline, summary.detail))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(summary, chunks[4]);

    let help_text = if model.search_focused {
        " Enter: accept suggestion · Esc: clear/leave · Tab: category"
    } else {
        " /: search · Tab: category · ↑/↓: move · Esc: clear · q: quit"
    };
    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[5]);
}

/// 検索欄
fn view_search(f: &mut Frame, model: &Model, area: Rect) {
    let (text, style) = if model.search_focused {
        (
            format!("{}_", model.search_text),
            Style::default().fg(Color::Yellow),
        )
    } else if model.search_text.is_empty() {
        (
            "Press / to search".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (model.search_text.clone(), Style::default())
    };

    let search = Paragraph::new(text)
        .style(style)
        .block(Block::default().title(" Search ").borders(Borders::ALL));
    f.render_widget(search, area);
}

/// 補完候補（入力中のみ）
fn view_suggestions(f: &mut Frame, model: &Model, area: Rect) {
    if !model.search_focused {
        return;
    }
    let suggestions = model.suggestions();
    if suggestions.is_empty() {
        return;
    }

    let line = Paragraph::new(format!(" ↳ {}", suggestions.join(" · ")))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(line, area);
}

/// カテゴリタブ
fn view_categories(f: &mut Frame, model: &Model, area: Rect) {
    let titles: Vec<&str> = model.categories.iter().map(String::as_str).collect();
    let tabs = Tabs::new(titles)
        .select(model.category_index)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, area);
}

/// ツール一覧
fn view_list(f: &mut Frame, model: &Model, visible: &[&ToolRecord], area: Rect) {
    let items: Vec<ListItem> = visible
        .iter()
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("  {}", r.name)),
                Span::styled(
                    format!("  {}", r.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let title = format!(" Tools ({}) ", visible.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");

    let mut state = model.list_state.clone();
    f.render_stateful_widget(list, area, &mut state);
}

/// 選択中ツールの詳細
fn view_detail(f: &mut Frame, selected: Option<&ToolRecord>, area: Rect) {
    let block = Block::default().title(" Detail ").borders(Borders::ALL);

    let Some(record) = selected else {
        let empty = Paragraph::new("\n  No tools match. Try adjusting your search or category.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            record.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(record.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Category: ", label),
            Span::raw(record.category.clone()),
        ]),
        Line::from(vec![
            Span::styled("Pricing:  ", label),
            Span::raw(pricing_label(record).to_string()),
        ]),
        Line::from(vec![
            Span::styled("Link:     ", label),
            Span::styled(record.link.clone(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    if !record.tags().is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tags:     ", label),
            Span::raw(record.tags().join(", ")),
        ]));
    }
    if let Some(notes) = record.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Notes", label)));
        lines.push(Line::from(notes.to_string()));
    }

    let detail = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(detail, area);
}
