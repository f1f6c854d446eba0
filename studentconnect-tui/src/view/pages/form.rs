//! 表单字段渲染（创建活动 / 个人资料共用）

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use studentconnect_core::types::{EventCategory, FieldMark};

use crate::i18n::t;
use crate::model::state::{FormState, field_label};
use crate::view::theme::{Styles, colors};
use crate::view::{fit_width, pad_width};

/// 标签列宽
const LABEL_WIDTH: usize = 18;

/// 当前步骤的字段行
///
/// 校验失败的字段标签以错误色显示，通过的以成功色显示。
pub fn field_lines(state: &FormState, focused: bool, width: usize) -> Vec<Line<'static>> {
    let texts = t();
    let c = colors();
    let value_width = width.saturating_sub(LABEL_WIDTH + 4);

    state
        .form
        .current_fields()
        .enumerate()
        .map(|(i, field)| {
            let is_focused = focused && i == state.focus;

            let label_style = match field.mark {
                FieldMark::Invalid => Style::default().fg(c.error),
                FieldMark::Valid => Style::default().fg(c.success),
                FieldMark::Unmarked => Styles::muted(),
            };
            let mut label = field_label(field.name).to_string();
            if field.required {
                label.push_str(" *");
            }

            let shown = if field.name == "category" {
                EventCategory::from_value(&field.value)
                    .map_or(field.value.clone(), |category| category.display_name().to_string())
            } else {
                field.value.clone()
            };

            let value = if is_focused && field.name == "category" {
                Span::styled(
                    format!("◀ {shown} ▶"),
                    Style::default()
                        .fg(c.border_focused)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_focused {
                Span::styled(
                    format!("{}▎", fit_width(&shown, value_width)),
                    Style::default().fg(c.border_focused),
                )
            } else if shown.is_empty() && !field.required {
                Span::styled(texts.common.optional.to_string(), Styles::muted())
            } else {
                Span::styled(fit_width(&shown, value_width), Style::default().fg(c.fg))
            };

            let cursor = if is_focused { "▶ " } else { "  " };
            Line::from(vec![
                Span::raw(cursor),
                Span::styled(pad_width(&label, LABEL_WIDTH), label_style),
                value,
            ])
        })
        .collect()
}

/// 提交按钮（提交中显示忙碌文字）
pub fn submit_line(state: &FormState) -> Line<'static> {
    let control = state.form.submit_control();
    let style = if control.is_disabled() {
        Styles::muted()
    } else {
        Styles::selected()
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" {} ", control.label()), style),
        Span::styled("  Alt+s", Styles::hint_key()),
    ])
}

/// 图片预览状态
pub fn preview_line(state: &FormState, ready: &'static str, hint: &'static str) -> Line<'static> {
    let c = colors();
    match state.preview.source() {
        Some(source) => {
            let kib = source.len() / 1024;
            Line::from(vec![
                Span::styled(format!("  ✓ {ready}"), Style::default().fg(c.success)),
                Span::styled(format!(" ({kib} KiB)"), Styles::muted()),
            ])
        }
        None => Line::styled(format!("  {hint}"), Styles::muted()),
    }
}
