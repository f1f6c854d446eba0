//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use studentconnect_core::types::DashboardRole;

use crate::i18n::t;
use crate::model::{App, Page, Screen};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(app, frame, title_area);

    match app.screen {
        Screen::Welcome => pages::welcome::render(frame, content_area),
        Screen::Dashboard => render_dashboard(app, frame, content_area),
    }

    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 左右分栏：导航 + 页面
fn render_dashboard(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22), // 左侧导航
            Constraint::Percentage(78), // 右侧内容
        ])
        .split(area);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let mut title = format!(" {} v{}", texts.common.app_name, env!("CARGO_PKG_VERSION"));
    if app.screen == Screen::Dashboard {
        let role = match app.role {
            DashboardRole::Organizer => texts.modal.auth.organizer,
            DashboardRole::Student => texts.modal.auth.student,
        };
        title.push_str(&format!(" · {role}"));
    }
    let paragraph = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let page = app.current_page();

    let block = Block::default()
        .title(format!(" {} ", page.map_or("", Page::title)))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match page {
        Some(Page::Overview) => pages::overview::render(app, frame, inner_area),
        Some(Page::Discover) => pages::discover::render(app, frame, inner_area),
        Some(Page::EventDetails) => pages::event_details::render(app, frame, inner_area),
        Some(Page::CreateEvent) => pages::create_event::render(app, frame, inner_area),
        Some(Page::Profile) => pages::profile::render(app, frame, inner_area),
        None => {}
    }
}
