// crates/editable_sections/src/validator.rs

use crate::error::MarkerError;
use crate::utils::scanner::{MarkerScanner, TokenKind};

/// Checks that `text` contains a legal sequence of start/end markers.
///
/// Every start marker must be closed by exactly one end marker before the next
/// start marker appears, and no end marker may appear outside a section. An
/// empty marker is rejected even when `text` is empty.
///
/// When both markers are the same literal, successive occurrences alternate
/// between opening and closing a section.
///
/// # Errors
///
/// Returns the first [`MarkerError`] encountered while scanning left to right.
pub fn validate_markers(text: &str, start_marker: &str, end_marker: &str) -> Result<(), MarkerError> {
    ensure_non_empty(start_marker, end_marker)?;
    check_structure(text, start_marker, end_marker)
}

pub(crate) fn ensure_non_empty(start_marker: &str, end_marker: &str) -> Result<(), MarkerError> {
    if start_marker.is_empty() || end_marker.is_empty() {
        return Err(MarkerError::EmptyMarker);
    }
    Ok(())
}

/// Scan state is the offset of the currently open start marker, `None` when closed.
pub(crate) fn check_structure(text: &str, start_marker: &str, end_marker: &str) -> Result<(), MarkerError> {
    let symmetric = start_marker == end_marker;
    let mut open_at: Option<usize> = None;

    for token in MarkerScanner::new(text, start_marker, end_marker) {
        open_at = match (token.kind, open_at) {
            (TokenKind::Start, Some(_)) if symmetric => None,
            (TokenKind::Start, Some(_)) => {
                return Err(MarkerError::NestedStartMarker { offset: token.offset })
            }
            (TokenKind::Start, None) => Some(token.offset),
            (TokenKind::End, Some(_)) => None,
            (TokenKind::End, None) => {
                return Err(MarkerError::UnmatchedEndMarker { offset: token.offset })
            }
        };
    }

    match open_at {
        Some(offset) => Err(MarkerError::UnterminatedSection { offset }),
        None => Ok(()),
    }
}
