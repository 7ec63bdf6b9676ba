/// Modal notice the editor is waiting on.
///
/// While one is pending the front-end must block every other interaction and
/// report the user's choice back through [`super::UiEvent::DialogAnswered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// Raised by a rejected append.
    InvalidInput,
    /// Raised by "Clear All"; only [`DialogAnswer::Yes`] clears the list.
    ConfirmClear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Single acknowledge button.
    Warning,
    /// Yes / No buttons.
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAnswer {
    Yes,
    No,
    Acknowledged,
    /// Closed without choosing (Escape, window close button).
    Dismissed,
}

impl Dialog {
    pub fn kind(&self) -> DialogKind {
        match self {
            Dialog::InvalidInput => DialogKind::Warning,
            Dialog::ConfirmClear => DialogKind::Confirm,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialog::InvalidInput => "Empty input",
            Dialog::ConfirmClear => "Confirm clear",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Dialog::InvalidInput => "Please enter a valid element",
            Dialog::ConfirmClear => "Are you sure you want to remove all elements?",
        }
    }
}
