//! 活动详情页

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染活动详情
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let found = app
        .selected_event
        .as_deref()
        .and_then(|id| app.catalog.details(id).ok());
    let Some((entry, details)) = found else {
        let empty = Paragraph::new(Line::styled(
            format!("  {}", texts.details.no_selection),
            Styles::muted(),
        ));
        frame.render_widget(empty, area);
        return;
    };

    let label = |text: &'static str| Span::styled(format!("{text}: "), Styles::muted());
    let value = |text: &str| Span::styled(text.to_string(), Style::default().fg(c.fg));

    let mut lines = vec![
        Line::styled(
            entry.title.clone(),
            Style::default()
                .fg(c.border_focused)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(vec![
            label(texts.details.date),
            value(&entry.date),
            Span::raw("   "),
            label(texts.details.time),
            value(&details.time),
        ]),
        Line::from(vec![
            label(texts.details.mode),
            value(&details.mode),
            Span::raw("   "),
            label(texts.details.price),
            value(&details.price),
        ]),
        Line::from(vec![label(texts.details.participants), value(&entry.participants)]),
        Line::from(""),
        Line::styled(texts.details.about, Styles::title()),
        Line::styled(details.description.clone(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(texts.details.topics, Styles::title()),
    ];

    lines.extend(
        details
            .topics
            .iter()
            .map(|topic| Line::styled(format!("  • {topic}"), Style::default().fg(c.fg))),
    );

    lines.push(Line::from(""));
    lines.push(Line::styled(texts.details.speaker, Styles::title()));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}", details.speaker.name),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" · {}", details.speaker.role), Styles::muted()),
    ]));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
