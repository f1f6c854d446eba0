//! 学生发现页：搜索、类别筛选、活动卡片列表

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use studentconnect_core::services::CategoryFilter;
use studentconnect_core::types::EventCategory;

use super::overview::render_search_line;
use crate::i18n::t;
use crate::model::App;
use crate::model::state::BoardState;
use crate::view::fit_width;
use crate::view::theme::{Styles, colors};

/// 渲染发现页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 搜索框
            Constraint::Length(2), // 类别按钮
            Constraint::Min(1),    // 卡片列表
        ])
        .split(area);

    render_search_line(app, frame, rows[0]);
    render_filters(app, frame, rows[1]);
    render_cards(app, frame, rows[2]);
}

/// 类别筛选按钮，当前选中的高亮
fn render_filters(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let mut spans = vec![Span::styled(format!(" {} ", texts.discover.filter), Styles::muted())];

    for option in BoardState::filter_options() {
        let label = match &option {
            CategoryFilter::All => texts.common.all,
            CategoryFilter::Only(value) => EventCategory::from_value(value)
                .map_or(value.as_str(), |category| category.display_name()),
        };
        let style = if option == app.board.filter {
            Styles::selected()
        } else {
            Styles::muted()
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 活动卡片（两行：标题 / 组织者 · 地点 · 日期）
fn render_cards(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let visible = app.board.visible_rows();

    if visible.is_empty() {
        let empty = Paragraph::new(Line::styled(
            format!("  {}", texts.discover.no_events),
            Styles::muted(),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let width = usize::from(area.width).saturating_sub(4);
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_selected = app.focus.is_content() && i == app.board.selected;
            let title_style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
            };
            let category = EventCategory::from_value(&row.category)
                .map_or(row.category.as_str(), |category| category.display_name());

            let meta = format!(
                "{}: {} · {}: {} · {}",
                texts.discover.organizer,
                row.organizer.as_deref().unwrap_or("-"),
                texts.discover.location,
                row.location.as_deref().unwrap_or("-"),
                row.date,
            );

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", fit_width(&row.title, width)), title_style),
                    Span::styled(format!(" [{category}]"), Style::default().fg(c.border_focused)),
                ]),
                Line::styled(format!("   {}", fit_width(&meta, width)), Styles::muted()),
                Line::from(""),
            ])
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.board.selected));

    frame.render_stateful_widget(List::new(items), area, &mut state);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use studentconnect_core::types::DashboardRole;

    use super::*;
    use crate::backend::AppConfig;
    use crate::model::Page;
    use crate::update::test_support::test_app;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(app, frame, frame.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn filters_and_cards_show_category_names() {
        let config = AppConfig {
            role: Some(DashboardRole::Student),
            ..AppConfig::default()
        };
        let (app, _rt, _dir) = test_app(config);
        assert_eq!(app.current_page(), Some(Page::Discover));

        let text = screen_text(&app);
        assert!(text.contains("Tech Event"));
        assert!(text.contains("[Workshop]"));
    }
}
