use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};

const PLACEHOLDER: &str = "Add a new task...";

/// Render the new-task input bar. Places the terminal cursor when focused.
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Compose;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let line = if app.input.is_empty() && !focused {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(
            app.input.text().to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };

    // Keep the cursor inside the box by scrolling long input horizontally
    let inner_w = inner.width as usize;
    let cursor_col = app.input.cursor_col();
    let h_scroll = (cursor_col + 1).saturating_sub(inner_w);

    let paragraph = Paragraph::new(line)
        .style(Style::default().bg(bg))
        .scroll((0, h_scroll as u16));
    frame.render_widget(paragraph, inner);

    if focused {
        let x = inner.x + (cursor_col - h_scroll) as u16;
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
