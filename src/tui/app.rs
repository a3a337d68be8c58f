use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{Config, ConfirmOutcome, Task, TaskId, TaskPolicy, TaskStore};
use crate::ops::task_ops::{self, Action, TaskError};

use super::confirm::{ConfirmAction, ConfirmPrompt, Notice};
use super::input;
use super::line_buffer::LineBuffer;
use super::render;
use super::row::RowState;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the list
    Navigate,
    /// Typing into the new-task input bar
    Compose,
    /// Renaming the row under the cursor
    Edit,
    /// Waiting for a yes/no answer
    Confirm,
    /// Showing a blocking notice
    Notice,
}

/// Main application state: the screen that owns the store
pub struct App {
    pub store: TaskStore,
    pub policy: TaskPolicy,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// New-task input bar
    pub input: LineBuffer,
    /// Per-row editing state; rows not present are viewing
    pub rows: HashMap<TaskId, RowState>,
    pub confirm: Option<ConfirmPrompt>,
    pub notice: Option<Notice>,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: TaskStore::new(),
            policy: config.tasks,
            mode: Mode::Compose,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            input: LineBuffer::new(),
            rows: HashMap::new(),
            confirm: None,
            notice: None,
            status_message: None,
        }
    }

    /// Number of tasks, as shown by the header counter
    pub fn task_count(&self) -> usize {
        self.store.len()
    }

    pub fn cursor_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.cursor)
    }

    pub fn row_state(&self, id: TaskId) -> Option<&RowState> {
        self.rows.get(&id)
    }

    /// The row currently being renamed, if any
    pub fn editing_id(&self) -> Option<TaskId> {
        self.rows
            .iter()
            .find(|(_, state)| state.is_editing())
            .map(|(id, _)| *id)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.store.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn cursor_to(&mut self, index: usize) {
        self.cursor = index.min(self.store.len().saturating_sub(1));
    }

    /// Run an action through the reducers and adopt the resulting snapshot
    pub fn apply(&mut self, action: Action) -> Result<(), TaskError> {
        let next = task_ops::reduce(&self.store, &action, self.policy)?;
        self.store = next;
        self.rows.retain(|id, _| self.store.get(*id).is_some());
        self.cursor_to(self.cursor);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Input bar

    /// Add the input bar's text as a new task. The bar is cleared on success.
    pub fn submit_new_task(&mut self) {
        let id = self.store.peek_next_id();
        match self.apply(Action::Add {
            title: self.input.text().to_string(),
        }) {
            Ok(()) => {
                self.input.clear();
                if let Some(pos) = self.store.position(id) {
                    self.cursor = pos;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "add rejected");
                self.show_notice(&e, Mode::Compose);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Row actions

    pub fn toggle_cursor_task(&mut self) {
        let Some(id) = self.cursor_task().map(|t| t.id) else {
            return;
        };
        if let Err(e) = self.apply(Action::Toggle { id }) {
            debug!(error = %e, "toggle ignored");
        }
    }

    /// Viewing → Editing for the row under the cursor
    pub fn start_edit(&mut self) {
        let Some((id, title)) = self.cursor_task().map(|t| (t.id, t.title.clone())) else {
            return;
        };
        self.rows.entry(id).or_default().start_edit(&title);
        self.mode = Mode::Edit;
    }

    /// Editing → Viewing, renaming the task to the buffer's text
    pub fn commit_edit(&mut self) {
        let Some(id) = self.editing_id() else {
            self.mode = Mode::Navigate;
            return;
        };
        let text = self.rows.get_mut(&id).and_then(RowState::commit);
        self.mode = Mode::Navigate;

        let Some(title) = text else {
            return;
        };
        match self.apply(Action::Rename { id, title }) {
            Ok(()) => {}
            Err(TaskError::NotFound(_)) => debug!(%id, "rename target gone"),
            Err(e) => {
                tracing::warn!(error = %e, "rename rejected");
                self.show_notice(&e, Mode::Navigate);
            }
        }
    }

    /// Editing → Viewing without renaming
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing_id()
            && let Some(row) = self.rows.get_mut(&id)
        {
            row.cancel();
        }
        self.mode = Mode::Navigate;
    }

    /// Ask before removing the task under the cursor
    pub fn request_remove(&mut self) {
        let Some(id) = self.cursor_task().map(|t| t.id) else {
            return;
        };
        self.confirm = Some(ConfirmPrompt::remove_task(id));
        self.mode = Mode::Confirm;
    }

    /// Close the pending prompt; only `Accept` runs its action
    pub fn resolve_confirm(&mut self, outcome: ConfirmOutcome) {
        let prompt = self.confirm.take();
        self.mode = Mode::Navigate;
        let Some(prompt) = prompt else {
            return;
        };

        match prompt.action {
            ConfirmAction::RemoveTask { id } => {
                if !outcome.is_accepted() {
                    debug!(%id, ?outcome, "removal not confirmed");
                    return;
                }
                let title = self.store.get(id).map(|t| t.title.clone());
                match self.apply(Action::Remove { id }) {
                    Ok(()) => {
                        if let Some(title) = title {
                            self.status_message = Some(format!("removed \"{}\"", title));
                        }
                    }
                    Err(e) => debug!(error = %e, "remove ignored"),
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Notices

    pub fn show_notice(&mut self, err: &TaskError, return_to: Mode) {
        self.notice = Some(Notice::for_error(err, return_to));
        self.mode = Mode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        let return_to = self
            .notice
            .take()
            .map_or(Mode::Navigate, |notice| notice.return_to);
        self.mode = return_to;
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    info!("session started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!(tasks = app.task_count(), "session ended");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
