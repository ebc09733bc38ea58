use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::theme;

const HINTS: [(&str, &str); 5] = [
    ("Space", "Toggle"),
    ("a", "Select All"),
    ("hjkl", "Move"),
    ("Enter", "Confirm"),
    ("q", "Quit"),
];

fn build_styled_spans(app: &App) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::footer::KEY);
    let desc_style = Style::default().fg(theme::footer::DESCRIPTION);
    let sep_style = Style::default().fg(theme::footer::SEPARATOR);

    let mut spans = Vec::with_capacity(HINTS.len() * 4 + 5);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans.push(Span::styled(" \u{2022} ", sep_style));
    spans.push(Span::styled(
        format!(
            "{}/{} selected",
            app.selected_count,
            app.multi_check.options().len()
        ),
        Style::default().fg(theme::footer::COUNT),
    ));

    if let Some(warning) = &app.warning {
        spans.push(Span::styled(" \u{2022} ", sep_style));
        spans.push(Span::styled(
            warning.clone(),
            Style::default().fg(theme::footer::WARNING),
        ));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(build_styled_spans(app)));
    frame.render_widget(footer, area);
}
