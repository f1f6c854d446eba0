//! 底部状态栏组件

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page, Screen};
use crate::view::theme::{Styles, colors};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(indicator) = refresh_indicator(app) {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(indicator, Style::default().fg(colors().success)));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 自动刷新指示
fn refresh_indicator(app: &App) -> Option<String> {
    let config = &app.config.auto_refresh;
    if app.screen != Screen::Dashboard || !config.enabled || !config.enable_indicator {
        return None;
    }
    let texts = t();
    if app.refresh.is_paused(Instant::now(), config) {
        Some(format!("⏸ {}", texts.status_bar.auto_refresh_paused))
    } else {
        Some(format!(
            "⟳ {} {}s",
            texts.status_bar.auto_refresh, config.interval_secs
        ))
    }
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;
    let mut hints = Vec::new();

    if app.screen == Screen::Welcome {
        hints.push(("Enter", h.login));
        hints.push(("Alt+h", h.help));
        hints.push(("Alt+q", h.quit));
        return hints;
    }

    hints.push(("Tab", h.switch_panel));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", h.navigate));
            hints.push(("Enter", h.open));
        }
        FocusPanel::Content => match app.current_page() {
            Some(Page::Overview) => {
                hints.push(("↑↓", h.navigate));
                hints.push(("/", h.search));
            }
            Some(Page::Discover) => {
                hints.push(("↑↓", h.navigate));
                hints.push(("/", h.search));
                hints.push(("←→", h.filter));
                hints.push(("Enter", h.open));
            }
            Some(Page::CreateEvent) => {
                hints.push(("↑↓", h.navigate));
                hints.push(("Alt+p", h.prev_step));
                hints.push(("Alt+n", h.next_step));
                hints.push(("Alt+s", h.submit));
            }
            Some(Page::Profile) => {
                hints.push(("↑↓", h.navigate));
                hints.push(("Enter", h.select_file));
                hints.push(("Alt+s", h.submit));
            }
            Some(Page::EventDetails) => {
                hints.push(("Esc", t().common.back));
            }
            None => {}
        },
    }

    hints.push(("Alt+t", h.theme));
    hints.push(("Alt+l", h.language));
    hints.push(("Alt+q", h.quit));

    hints
}
