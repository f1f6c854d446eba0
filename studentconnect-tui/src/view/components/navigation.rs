//! 左侧导航面板组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use studentconnect_core::types::NavLink;

use crate::i18n::t;
use crate::model::{App, link_icon};
use crate::view::theme::{Styles, colors};

/// 渲染导航面板
///
/// `▶` 是光标位置；当前可见视图对应的链接以强调色显示。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let is_focused = app.focus.is_navigation();
    let active = app.controller.active_link_index();

    let block = Block::default()
        .title(format!(" {} ", texts.nav.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let items: Vec<ListItem> = app
        .controller
        .links()
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let is_selected = i == app.navigation.selected;
            let is_active = active == Some(i);
            let prefix = if is_selected { "▶ " } else { "  " };

            let content = format!("{}{} {}", prefix, link_icon(link), link_label(link));

            let style = if is_selected && is_focused {
                Styles::selected()
            } else if is_active {
                Style::default()
                    .fg(c.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 链接的显示名
fn link_label(link: &NavLink) -> &'static str {
    let texts = t();
    match link.key {
        "overview" => texts.nav.overview,
        "create-event" => texts.nav.create_event,
        "discover" => texts.nav.discover,
        "profile" => texts.nav.profile,
        "about" => texts.nav.about,
        "logout" => texts.nav.logout,
        other => other,
    }
}
