/// How the user answered a yes/no prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Accept,
    Decline,
    /// Prompt closed without choosing; treated like `Decline`
    Dismissed,
}

impl ConfirmOutcome {
    pub fn is_accepted(self) -> bool {
        self == ConfirmOutcome::Accept
    }
}
