use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::display_width;

/// Key hints for the current mode, shown right-aligned
fn key_hint(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  space done  e edit  d remove  q quit",
        Mode::Compose => "Enter add  Esc list",
        Mode::Edit => "Enter save  Esc cancel",
        Mode::Confirm | Mode::Notice => "",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    let hint = if app.show_key_hints {
        key_hint(app.mode)
    } else {
        ""
    };
    if !hint.is_empty() {
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let hint_width = display_width(hint) + 1;
        if content_width + hint_width <= width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn navigate_hint_is_right_aligned() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(60, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        let hint = key_hint(Mode::Navigate);
        assert!(output.ends_with(hint));
        assert_eq!(output.len(), 59);
    }

    #[test]
    fn status_message_on_the_left() {
        let mut app = app_with_tasks(&[]);
        app.status_message = Some("removed \"A\"".into());
        app.show_key_hints = false;
        let output = render_to_string(60, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, " removed \"A\"");
    }

    #[test]
    fn hint_dropped_when_too_narrow() {
        let mut app = app_with_tasks(&[]);
        app.mode = Mode::Edit;
        let output = render_to_string(10, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}
