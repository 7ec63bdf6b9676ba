/// User gestures delivered by the front-end, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    AddClicked,
    /// Enter pressed inside the input field.
    EnterPressed,
    ClearAllClicked,
    SelectionChanged(SelectionChange),
    DialogAnswered(super::DialogAnswer),
}

/// Selection notification from the list widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// `None` is the toolkit's "nothing selected" sentinel.
    pub index: Option<usize>,
    /// Part of an in-progress pointer drag.
    pub adjusting: bool,
}

impl SelectionChange {
    pub fn settled(index: usize) -> Self {
        Self {
            index: Some(index),
            adjusting: false,
        }
    }

    pub fn adjusting(index: usize) -> Self {
        Self {
            index: Some(index),
            adjusting: true,
        }
    }

    pub fn cleared() -> Self {
        Self {
            index: None,
            adjusting: false,
        }
    }
}
