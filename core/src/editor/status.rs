use std::fmt;

/// Text shown in the status line under the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusMessage {
    #[default]
    Empty,
    Total(usize),
    /// `index` is zero-based; it is rendered one-based.
    Selected { index: usize, total: usize },
}

impl StatusMessage {
    /// Status for a list of `len` elements with no selection report.
    pub fn for_len(len: usize) -> Self {
        if len == 0 {
            StatusMessage::Empty
        } else {
            StatusMessage::Total(len)
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Empty => write!(f, "Empty list. Add elements."),
            StatusMessage::Total(n) => write!(f, "Total elements: {n}"),
            StatusMessage::Selected { index, total } => {
                write!(f, "Selected element: {} of {total}", index + 1)
            }
        }
    }
}
