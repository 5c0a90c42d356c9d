// crates/editable_sections/src/error.rs

use thiserror::Error;

/// Fieldless classification of a [`MarkerError`], handy for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerErrorKind {
    EmptyMarker,
    NestedStartMarker,
    UnmatchedEndMarker,
    UnterminatedSection,
}

/// Ways a text can fail marker validation.
///
/// Offsets are byte offsets into the scanned text and point at the first byte
/// of the offending marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("Start and end markers must not be empty.")]
    EmptyMarker,

    #[error("Nested start marker found at byte {offset}.")]
    NestedStartMarker { offset: usize },

    #[error("End marker found without a matching start marker at byte {offset}.")]
    UnmatchedEndMarker { offset: usize },

    #[error("Start marker at byte {offset} found without a matching end marker.")]
    UnterminatedSection { offset: usize },
}

impl MarkerError {
    pub fn kind(&self) -> MarkerErrorKind {
        match self {
            MarkerError::EmptyMarker => MarkerErrorKind::EmptyMarker,
            MarkerError::NestedStartMarker { .. } => MarkerErrorKind::NestedStartMarker,
            MarkerError::UnmatchedEndMarker { .. } => MarkerErrorKind::UnmatchedEndMarker,
            MarkerError::UnterminatedSection { .. } => MarkerErrorKind::UnterminatedSection,
        }
    }

    /// Byte offset of the marker that triggered the error, if there is one.
    pub fn offset(&self) -> Option<usize> {
        match *self {
            MarkerError::EmptyMarker => None,
            MarkerError::NestedStartMarker { offset }
            | MarkerError::UnmatchedEndMarker { offset }
            | MarkerError::UnterminatedSection { offset } => Some(offset),
        }
    }
}
