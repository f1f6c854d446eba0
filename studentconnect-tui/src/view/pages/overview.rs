//! 组织者概览页：统计卡片 + 活动表格

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use crate::i18n::t;
use crate::model::App;
use crate::view::fit_width;
use crate::view::theme::{Styles, colors};

/// 渲染概览页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 统计卡片
            Constraint::Length(1), // 搜索框
            Constraint::Min(1),    // 表格
        ])
        .split(area);

    render_cards(app, frame, rows[0]);
    render_search_line(app, frame, rows[1]);
    render_table(app, frame, rows[2]);
}

/// 统计卡片（总数 / 待审核 / 已通过）
fn render_cards(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let analytics = app.board.board.analytics();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let values = [
        (texts.overview.total, analytics.total, c.fg),
        (texts.overview.pending, analytics.pending, c.warning),
        (texts.overview.approved, analytics.approved, c.success),
    ];

    for ((label, value, color), card) in values.into_iter().zip(cards.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(false));
        let lines = vec![
            Line::styled(label, Styles::muted()),
            Line::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), *card);
    }
}

/// 搜索框（只按标题搜索）
pub(super) fn render_search_line(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let board = &app.board;

    let line = if board.searching {
        Line::from(vec![
            Span::styled(" / ", Styles::hint_key()),
            Span::styled(format!("{}▎", board.search), Style::default().fg(c.border_focused)),
        ])
    } else if board.search.is_empty() {
        Line::from(vec![
            Span::styled(" / ", Styles::hint_key()),
            Span::styled(texts.common.search, Styles::muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" / ", Styles::hint_key()),
            Span::styled(board.search.clone(), Style::default().fg(c.fg)),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// 活动表格
fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let visible = app.board.visible_rows();

    if visible.is_empty() {
        let empty = Paragraph::new(Line::styled(
            format!("  {}", texts.overview.no_events),
            Styles::muted(),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let title_width = usize::from(area.width).saturating_sub(44).max(12);
    let table_rows: Vec<Row> = visible
        .iter()
        .map(|row| {
            let status_color = match row.status.as_str() {
                "Approved" => c.success,
                "Pending" => c.warning,
                _ => c.error,
            };
            Row::new(vec![
                Span::raw(fit_width(&row.title, title_width)),
                Span::raw(row.category.clone()),
                Span::raw(row.date.clone()),
                Span::styled(row.status.clone(), Style::default().fg(status_color)),
            ])
        })
        .collect();

    let header = Row::new(vec![
        texts.overview.col_title,
        texts.overview.col_category,
        texts.overview.col_date,
        texts.overview.col_status,
    ])
    .style(Styles::title());

    let table = Table::new(
        table_rows,
        [
            Constraint::Min(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(Block::default().title(format!(" {} ", texts.overview.my_events)))
    .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    if app.focus.is_content() {
        state.select(Some(app.board.selected));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
