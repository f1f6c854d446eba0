//! 创建活动页：分步表单

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::form::{field_lines, preview_line, submit_line};
use crate::i18n::t;
use crate::model::App;
use crate::model::state::step_label;
use crate::view::theme::{Styles, colors};

/// 渲染创建活动表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let state = &app.create_event;
    let steps = state.form.steps();
    let controls = steps.controls();

    let mut lines = Vec::new();

    // === 步骤指示 ===
    let mut indicator = vec![Span::styled(
        format!(
            " {} {}/{}  ",
            texts.create_event.step,
            steps.current_index() + 1,
            steps.len()
        ),
        Styles::title(),
    )];
    for (i, step) in steps.steps().iter().enumerate() {
        let style = if steps.is_step_visible(i) {
            Style::default()
                .fg(c.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Styles::muted()
        };
        if i > 0 {
            indicator.push(Span::styled(" › ", Styles::muted()));
        }
        indicator.push(Span::styled(step_label(step), style));
    }
    lines.push(Line::from(indicator));
    lines.push(Line::from(""));

    // === 当前步骤字段 ===
    lines.extend(field_lines(
        state,
        app.focus.is_content(),
        usize::from(area.width),
    ));

    if state.focused_field() == Some(state.image_field) || steps.is_last() {
        lines.push(Line::from(""));
        lines.push(preview_line(
            state,
            texts.create_event.preview_ready,
            texts.create_event.flyer_hint,
        ));
    }

    // === 步骤按钮 ===
    lines.push(Line::from(""));
    let mut buttons = Vec::new();
    if controls.previous_visible {
        buttons.push(Span::styled(format!("  ◀ {} ", texts.common.prev), Styles::muted()));
        buttons.push(Span::styled("Alt+p", Styles::hint_key()));
    }
    if controls.next_visible {
        buttons.push(Span::styled(format!("  {} ▶ ", texts.common.next), Styles::muted()));
        buttons.push(Span::styled("Alt+n", Styles::hint_key()));
    }
    lines.push(Line::from(buttons));
    if controls.submit_visible {
        lines.push(Line::from(""));
        lines.push(submit_line(state));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
