//! 欢迎页

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::i18n::t;
use crate::view::theme::{Styles, colors};

/// 渲染欢迎页（未登录时显示）
pub fn render(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(inner);

    let lines = vec![
        Line::styled(texts.welcome.title, Styles::title()),
        Line::from(""),
        Line::styled(texts.welcome.subtitle, Style::default().fg(c.fg)),
        Line::from(""),
        Line::from(""),
        Line::styled(texts.welcome.login_hint, Style::default().fg(c.border_focused)),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows[1]);
}
