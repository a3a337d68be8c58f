use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;
use crate::tui::confirm::{Choice, ConfirmAction};

use super::helpers::{centered_rect_fixed, truncate_to_width};

const POPUP_W: u16 = 48;

/// Render the yes/no confirmation popup
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = &app.confirm else {
        return;
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w = POPUP_W.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(format!(" {}", prompt.title), header_style)),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", prompt.message), text_style)),
    ];

    let ConfirmAction::RemoveTask { id } = &prompt.action;
    if let Some(task) = app.store.get(*id) {
        lines.push(Line::from(vec![
            Span::styled("   ", text_style),
            Span::styled(
                truncate_to_width(&task.title, inner_w.saturating_sub(4)),
                bright_style,
            ),
        ]));
    }
    lines.push(Line::from(""));

    // Buttons: the highlighted one is drawn reversed
    let button = |label: &str, choice: Choice| {
        let style = if prompt.selected == choice {
            Style::default()
                .fg(bg)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        Span::styled(format!(" {} ", label), style)
    };
    lines.push(Line::from(vec![
        Span::styled(" ", text_style),
        button(&prompt.decline_label, Choice::Decline),
        Span::styled("  ", text_style),
        button(&prompt.accept_label, Choice::Accept),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" y", dim_style),
        Span::styled(" yes  ", text_style),
        Span::styled("n", dim_style),
        Span::styled(" no  ", text_style),
        Span::styled("Esc", dim_style),
        Span::styled(" cancel", text_style),
    ]));

    render_box(frame, app, area, popup_w, lines);
}

/// Render the blocking notice popup
pub fn render_notice_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w = POPUP_W.min(area.width.saturating_sub(2));
    let lines = vec![
        Line::from(Span::styled(format!(" {}", notice.title), header_style)),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", notice.message), text_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter", dim_style),
            Span::styled(" ok", text_style),
        ]),
    ];

    render_box(frame, app, area, popup_w, lines);
}

fn render_box(frame: &mut Frame, app: &App, area: Rect, popup_w: u16, lines: Vec<Line>) {
    let bg = app.theme.background;
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, overlay_area);
}
