//! Element list editor core.
//!
//! Holds the toolkit-independent state of the editor window: the ordered
//! element list, the text pending in the input field, the current selection,
//! the derived status line and the modal dialog waiting for an answer.
//! Front-ends translate their widget callbacks into [`editor::UiEvent`]s and
//! render whatever the editor exposes.

pub mod editor;
pub mod error;
pub mod types;

pub use editor::{
    Dialog, DialogAnswer, DialogKind, ElementListEditor, ListState, SelectionChange,
    StatusMessage, UiEvent,
};
pub use error::ValidationError;
