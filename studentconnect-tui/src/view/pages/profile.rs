//! 个人资料页

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use super::form::{field_lines, preview_line, submit_line};
use crate::i18n::t;
use crate::model::App;

/// 渲染个人资料表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let state = &app.profile;

    let mut lines = vec![Line::from("")];
    lines.extend(field_lines(
        state,
        app.focus.is_content(),
        usize::from(area.width),
    ));
    lines.push(Line::from(""));
    lines.push(preview_line(
        state,
        texts.profile.preview_ready,
        texts.profile.avatar_hint,
    ));
    lines.push(Line::from(""));
    lines.push(submit_line(state));

    frame.render_widget(Paragraph::new(lines), area);
}
