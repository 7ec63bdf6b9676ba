//! Editor state machine.
//!
//! Design:
//! - The list moves between `Empty` and `NonEmpty`; the selection
//!   (`None` / `Some(i)`) is orthogonal and resets whenever the list empties.
//! - A pending [`Dialog`] models the modal notices. While one is pending,
//!   [`ElementListEditor::handle`] drops every event except the answer.
//! - The status line is recomputed from the list length after every append
//!   and clear; a settled selection overrides it until the next recompute.

mod dialog;
mod event;
mod status;

pub use dialog::{Dialog, DialogAnswer, DialogKind};
pub use event::{SelectionChange, UiEvent};
pub use status::StatusMessage;

use crate::error::ValidationError;
use crate::types::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Empty,
    NonEmpty,
}

/// Owns the element list and everything the window shows about it.
#[derive(Debug, Default)]
pub struct ElementListEditor {
    elements: Vec<Element>,
    pending_input: String,
    selection: Option<usize>,
    status: StatusMessage,
    dialog: Option<Dialog>,
    focus_input: bool,
}

impl ElementListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn state(&self) -> ListState {
        if self.elements.is_empty() {
            ListState::Empty
        } else {
            ListState::NonEmpty
        }
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Binding for the input field's text buffer.
    pub fn pending_input_mut(&mut self) -> &mut String {
        &mut self.pending_input
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn status(&self) -> StatusMessage {
        self.status
    }

    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    /// Returns `true` once after an event that should move keyboard focus
    /// back to the input field.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_input)
    }

    /// Dispatches a front-end event.
    pub fn handle(&mut self, event: UiEvent) {
        if self.dialog.is_some() && !matches!(event, UiEvent::DialogAnswered(_)) {
            return;
        }

        match event {
            // A rejection is already surfaced through the warning dialog.
            UiEvent::AddClicked | UiEvent::EnterPressed => {
                let _ = self.submit_pending();
            }
            UiEvent::ClearAllClicked => self.request_clear_all(),
            UiEvent::SelectionChanged(change) => self.select_item(change),
            UiEvent::DialogAnswered(answer) => self.answer_dialog(answer),
        }
    }

    /// Appends `raw` with surrounding whitespace removed.
    ///
    /// Empty or whitespace-only input leaves the list and the pending input
    /// untouched and raises [`Dialog::InvalidInput`].
    pub fn append(&mut self, raw: &str) -> Result<(), ValidationError> {
        let element = match Element::try_new(raw.to_string()) {
            Ok(element) => element,
            Err(e) => {
                self.dialog = Some(Dialog::InvalidInput);
                return Err(e.into());
            }
        };

        tracing::debug!(element = %element, index = self.elements.len(), "append");
        self.elements.push(element);
        self.pending_input.clear();
        self.focus_input = true;
        self.status = StatusMessage::for_len(self.elements.len());
        Ok(())
    }

    /// Appends the text currently held by the input field. Shared by the
    /// "Add" button and the Enter key.
    pub fn submit_pending(&mut self) -> Result<(), ValidationError> {
        let raw = self.pending_input.clone();
        self.append(&raw)
    }

    /// Asks for confirmation before clearing; see [`Self::answer_dialog`].
    pub fn request_clear_all(&mut self) {
        self.dialog = Some(Dialog::ConfirmClear);
    }

    /// Applies a settled selection. Drag updates, the "nothing selected"
    /// sentinel and out-of-range indices change nothing.
    pub fn select_item(&mut self, change: SelectionChange) {
        if change.adjusting {
            return;
        }
        let Some(index) = change.index else {
            return;
        };
        if index >= self.elements.len() {
            return;
        }

        tracing::trace!(index, total = self.elements.len(), "select");
        self.selection = Some(index);
        self.status = StatusMessage::Selected {
            index,
            total: self.elements.len(),
        };
    }

    /// Closes the pending dialog and applies the user's choice.
    pub fn answer_dialog(&mut self, answer: DialogAnswer) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };

        match dialog {
            Dialog::InvalidInput => self.focus_input = true,
            Dialog::ConfirmClear => {
                if answer == DialogAnswer::Yes {
                    self.clear_all();
                }
            }
        }
    }

    fn clear_all(&mut self) {
        tracing::info!(removed = self.elements.len(), "clear all");
        self.elements.clear();
        self.selection = None;
        self.status = StatusMessage::for_len(0);
    }
}
