//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::App;
use crate::model::state::{AuthMode, AuthTab, Modal};
use crate::view::pad_width;
use crate::view::theme::{Styles, colors};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Auth { .. } => render_auth(frame, modal),
        Modal::ConfirmLogout { confirm_focused } => render_confirm_logout(frame, *confirm_focused),
        Modal::About => render_about(frame),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框，返回内容区域
fn modal_frame(frame: &mut Frame, title: &str, width: u16, height: u16, danger: bool) -> Rect {
    let c = colors();
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if danger { c.error } else { c.border_focused }));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 渲染登录 / 注册弹窗
fn render_auth(frame: &mut Frame, modal: &Modal) {
    let Modal::Auth {
        tab,
        mode,
        email,
        password,
        confirm,
        focus,
        show_password,
        error,
    } = modal
    else {
        return;
    };

    let texts = &t().modal.auth;
    let c = colors();
    let field_count = Modal::auth_field_count(*tab, *mode);

    // 标签页(2) + 每个字段(3) + 错误(2) + 提示(2) + 边框(2)
    let height = 2 + (field_count as u16) * 3 + 2 + 2 + 2;
    let inner = modal_frame(frame, texts.title, 54, height, false);

    let mut lines = Vec::new();

    // === 角色标签页 + 登录/注册 ===
    let tab_span = |label: &'static str, active: bool| {
        if active {
            Span::styled(format!(" {label} "), Styles::selected())
        } else {
            Span::styled(format!(" {label} "), Styles::muted())
        }
    };
    lines.push(Line::from(vec![
        tab_span(texts.student, *tab == AuthTab::Student),
        Span::raw(" "),
        tab_span(texts.organizer, *tab == AuthTab::Organizer),
        Span::styled("   │   ", Styles::muted()),
        tab_span(texts.login, *mode == AuthMode::Login),
        Span::raw(" "),
        tab_span(texts.signup, *mode == AuthMode::Signup),
    ]));
    lines.push(Line::from(""));

    // === 输入框 ===
    let masked = |value: &str| {
        if *show_password {
            value.to_string()
        } else {
            "•".repeat(value.chars().count())
        }
    };
    let mut fields = vec![
        (texts.email, email.clone()),
        (texts.password, masked(password)),
    ];
    if field_count == 3 {
        fields.push((texts.confirm_password, masked(confirm)));
    }

    for (i, (label, value)) in fields.into_iter().enumerate() {
        let focused = *focus == i;
        lines.push(Line::from(Span::styled(label, Styles::muted())));
        let (display, style) = if focused {
            (format!("  {value}▎"), Style::default().fg(c.border_focused))
        } else {
            (format!("  {value}"), Style::default().fg(c.fg))
        };
        lines.push(Line::styled(display, style));
        lines.push(Line::from(""));
    }

    // === 错误信息 ===
    if let Some(err) = error {
        lines.push(Line::styled(format!("  ⚠ {err}"), Style::default().fg(c.error)));
    } else {
        lines.push(Line::from(""));
    }

    // === 操作提示 ===
    let reveal = if *show_password {
        texts.hide_password
    } else {
        texts.show_password
    };
    lines.push(Line::from(vec![
        Span::styled("←→", Styles::hint_key()),
        Span::styled(format!(" {} ", texts.switch_tab), Styles::muted()),
        Span::styled("Alt+m", Styles::hint_key()),
        Span::styled(format!(" {} ", texts.switch_mode), Styles::muted()),
        Span::styled("Alt+s", Styles::hint_key()),
        Span::styled(format!(" {reveal}"), Styles::muted()),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染退出登录确认
fn render_confirm_logout(frame: &mut Frame, confirm_focused: bool) {
    let texts = t();
    let c = colors();
    let inner = modal_frame(frame, texts.modal.logout_title, 44, 7, true);

    let cancel_style = if confirm_focused {
        Style::default().fg(c.fg)
    } else {
        Styles::selected()
    };
    let confirm_style = if confirm_focused {
        Style::default()
            .fg(c.selected_fg)
            .bg(c.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(texts.modal.logout_message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.confirm), confirm_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// 渲染关于弹窗
fn render_about(frame: &mut Frame) {
    let texts = t();
    let inner = modal_frame(frame, texts.modal.about_title, 56, 9, false);

    let lines = vec![
        Line::styled(
            format!("{} v{}", texts.common.app_name, env!("CARGO_PKG_VERSION")),
            Styles::title(),
        ),
        Line::from(""),
        Line::from(texts.modal.about_body),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = texts.modal.help_lines;
    let height = u16::try_from(help.len()).unwrap_or(u16::MAX).saturating_add(4);
    let inner = modal_frame(frame, texts.modal.help_title, 56, height, false);

    let mut lines: Vec<Line> = help
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {}", pad_width(key, 16)), Styles::hint_key()),
                Span::styled(*desc, Style::default().fg(colors().fg)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(format!("  Esc  {}", texts.common.close), Styles::muted()));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染提示 / 错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let texts = t();
    let danger = title == texts.common.error;
    let inner = modal_frame(frame, title, 50, 8, danger);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(colors().fg)),
        Line::from(""),
        Line::styled(format!("Enter / Esc  {}", texts.common.close), Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
