use super::line_buffer::LineBuffer;

/// Per-row editing mode.
///
/// The text buffer only exists while editing, so the row's title can only be
/// changed in `Editing`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowState {
    #[default]
    Viewing,
    Editing { buffer: LineBuffer },
}

impl RowState {
    pub fn is_editing(&self) -> bool {
        matches!(self, RowState::Editing { .. })
    }

    /// Viewing → Editing. The buffer starts as the current title.
    /// Already-editing rows keep their buffer.
    pub fn start_edit(&mut self, title: &str) {
        if !self.is_editing() {
            *self = RowState::Editing {
                buffer: LineBuffer::from_text(title),
            };
        }
    }

    /// Editing → Viewing, yielding the text to rename the task to
    pub fn commit(&mut self) -> Option<String> {
        match std::mem::take(self) {
            RowState::Editing { buffer } => Some(buffer.text().to_string()),
            RowState::Viewing => None,
        }
    }

    /// Editing → Viewing, discarding the buffer
    pub fn cancel(&mut self) {
        *self = RowState::Viewing;
    }

    pub fn buffer(&self) -> Option<&LineBuffer> {
        match self {
            RowState::Editing { buffer } => Some(buffer),
            RowState::Viewing => None,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut LineBuffer> {
        match self {
            RowState::Editing { buffer } => Some(buffer),
            RowState::Viewing => None,
        }
    }
}
