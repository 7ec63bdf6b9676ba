use thiserror::Error;

use crate::types::ElementError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("element is empty or whitespace-only")]
    EmptyElement,
}

impl From<ElementError> for ValidationError {
    // `not_empty` is the only validator on `Element`.
    fn from(_: ElementError) -> Self {
        ValidationError::EmptyElement
    }
}
