pub mod header;
pub mod input_bar;
pub mod popup;
pub mod status_row;
pub mod task_list;

mod helpers;
#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Draw one frame: header, input bar, list, status row, then any popup
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | input bar (3 rows) | task list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + counter, separator
            Constraint::Length(3), // bordered input bar
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    input_bar::render_input_bar(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Prompts are rendered on top of everything
    match app.mode {
        Mode::Confirm => popup::render_confirm_popup(frame, app, area),
        Mode::Notice => popup::render_notice_popup(frame, app, area),
        _ => {}
    }
}
