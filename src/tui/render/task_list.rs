use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Mode};

use super::helpers::{pad_to_width, spans_width, truncate_to_width, window_by_width};

/// What a single row needs from the store and the row state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    /// 0-based position in the list
    pub index: usize,
    pub task: &'a Task,
    pub is_cursor: bool,
    /// Text of the rename buffer while the row is editing
    pub edit_text: Option<&'a str>,
}

/// Map the store into row views, in display order
pub fn row_views(app: &App) -> Vec<RowView<'_>> {
    let list_focused = app.mode != Mode::Compose;
    app.store
        .tasks()
        .iter()
        .enumerate()
        .map(|(index, task)| RowView {
            index,
            task,
            is_cursor: list_focused && index == app.cursor,
            edit_text: app
                .row_state(task.id)
                .and_then(|row| row.buffer())
                .map(|buf| buf.text()),
        })
        .collect()
}

/// Render the task list, keeping the cursor row in view
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(" No tasks yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    adjust_scroll(app, visible_height);

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_pos = None;

    for row in row_views(app)
        .into_iter()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let row_bg = if row.is_cursor {
            app.theme.selection_bg
        } else {
            bg
        };

        let mut spans: Vec<Span> = vec![
            Span::styled(
                format!(" {:>2} ", row.index + 1),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ),
            Span::styled(
                format!("[{}] ", row.task.checkbox_char()),
                Style::default()
                    .fg(if row.task.done {
                        app.theme.done
                    } else {
                        app.theme.border
                    })
                    .bg(row_bg),
            ),
        ];
        let prefix_width = spans_width(&spans);
        let title_room = width.saturating_sub(prefix_width);

        match row.edit_text {
            Some(text) => {
                // Scroll the edit text so the insertion point stays visible
                let cursor_col = app
                    .row_state(row.task.id)
                    .and_then(|r| r.buffer())
                    .map_or(0, |buf| buf.cursor_col());
                let h_scroll = (cursor_col + 1).saturating_sub(title_room);
                let (visible, dropped) = window_by_width(text, h_scroll, title_room);
                spans.push(Span::styled(
                    visible,
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(row_bg)
                        .add_modifier(Modifier::UNDERLINED),
                ));
                if app.mode == Mode::Edit {
                    let col = (prefix_width + cursor_col.saturating_sub(dropped))
                        .min(width.saturating_sub(1));
                    let y = row.index - app.scroll_offset;
                    cursor_pos = Some(Position::new(area.x + col as u16, area.y + y as u16));
                }
            }
            None => {
                let mut style = Style::default()
                    .fg(app.theme.task_color(row.task.done))
                    .bg(row_bg);
                if row.task.done {
                    style = style.add_modifier(Modifier::CROSSED_OUT);
                }
                if row.is_cursor {
                    style = style.add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(
                    truncate_to_width(&row.task.title, title_room),
                    style,
                ));
            }
        }

        if row.is_cursor {
            pad_to_width(&mut spans, width, Style::default().bg(row_bg));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if let Some(pos) = cursor_pos {
        frame.set_cursor_position(pos);
    }
}

/// Scroll just enough to keep `app.cursor` within `height` rows
fn adjust_scroll(app: &mut App, height: usize) {
    if height == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
    let max_offset = app.store.len().saturating_sub(height);
    app.scroll_offset = app.scroll_offset.min(max_offset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_list_hint() {
        let mut app = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " No tasks yet. Press a to add one.");
    }

    #[test]
    fn rows_show_index_checkbox_and_title() {
        let mut app = app_with_tasks(&[("A", true), ("B", false)]);
        let output = render_to_string(TERM_W, 4, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, "  1 [x] A\n  2 [ ] B");
    }

    #[test]
    fn editing_row_shows_buffer() {
        let mut app = app_with_tasks(&[("A", false), ("B", false)]);
        app.cursor = 1;
        app.start_edit();
        let id = app.editing_id().unwrap();
        app.rows
            .get_mut(&id)
            .unwrap()
            .buffer_mut()
            .unwrap()
            .insert_str("2");
        let output = render_to_string(TERM_W, 4, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains("  2 [ ] B2"));
        assert!(output.contains("  1 [ ] A"));
    }

    #[test]
    fn long_edit_text_scrolls_to_cursor() {
        let mut app = app_with_tasks(&[("a very long task title indeed XYZ", false)]);
        app.start_edit();
        let output = render_to_string(20, 1, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        // 12 cells of title room: the tail before the cursor plus the cursor cell
        assert_eq!(output, "  1 [ ]  indeed XYZ");

        let id = app.editing_id().unwrap();
        app.rows
            .get_mut(&id)
            .unwrap()
            .buffer_mut()
            .unwrap()
            .insert_str("!");
        let output = render_to_string(20, 1, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, "  1 [ ] indeed XYZ!");
    }

    #[test]
    fn short_edit_text_is_not_scrolled() {
        let mut app = app_with_tasks(&[("short", false)]);
        app.start_edit();
        let output = render_to_string(20, 1, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, "  1 [ ] short");
    }

    #[test]
    fn long_titles_are_truncated() {
        let mut app = app_with_tasks(&[("a very long task title indeed", false)]);
        let output = render_to_string(20, 1, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, "  1 [ ] a very long\u{2026}");
    }

    #[test]
    fn scroll_follows_cursor() {
        let titles: Vec<String> = (1..=10).map(|i| format!("task {}", i)).collect();
        let refs: Vec<(&str, bool)> = titles.iter().map(|t| (t.as_str(), false)).collect();
        let mut app = app_with_tasks(&refs);
        app.cursor = 9;
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(app.scroll_offset, 7);
        assert!(output.starts_with("  8 [ ] task 8"));
        assert!(output.ends_with(" 10 [ ] task 10"));
    }

    #[test]
    fn row_views_mark_cursor_only_when_list_focused() {
        let mut app = app_with_tasks(&[("A", false), ("B", false)]);
        app.cursor = 1;
        let views = row_views(&app);
        assert_eq!(views.len(), 2);
        assert!(views[1].is_cursor);
        assert_eq!(views[1].index, 1);

        app.mode = Mode::Compose;
        assert!(row_views(&app).iter().all(|v| !v.is_cursor));
    }
}
