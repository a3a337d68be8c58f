use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task_count_label;
use crate::tui::app::App;

use super::helpers::{spans_width, truncate_to_width};

/// Render the app name and the task counter, with a separator below.
/// On narrow terminals the name goes first, then the counter is truncated.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let name = Span::styled(
        " tickd",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    );
    let label = task_count_label(app.task_count());
    let counter = vec![
        Span::styled("You have ", Style::default().fg(app.theme.text).bg(bg)),
        Span::styled(
            label.clone(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", Style::default().bg(bg)),
    ];
    let name_w = spans_width(std::slice::from_ref(&name));
    let counter_w = spans_width(&counter);

    let mut spans = Vec::new();
    if name_w + counter_w < width {
        spans.push(name);
        spans.push(Span::styled(
            " ".repeat(width - name_w - counter_w),
            Style::default().bg(bg),
        ));
        spans.extend(counter);
    } else if counter_w <= width {
        spans.push(Span::styled(
            " ".repeat(width - counter_w),
            Style::default().bg(bg),
        ));
        spans.extend(counter);
    } else {
        spans.push(Span::styled(
            truncate_to_width(&format!("You have {}", label), width),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
