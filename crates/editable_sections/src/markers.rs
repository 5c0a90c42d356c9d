// crates/editable_sections/src/markers.rs

use edit_marker::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};

use crate::error::MarkerError;
use crate::extractor::{self, SectionSpan};
use crate::validator::{check_structure, ensure_non_empty};

/// A start/end marker pair that is known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerPair {
    start: String,
    end: String,
}

impl MarkerPair {
    /// # Errors
    ///
    /// Returns [`MarkerError::EmptyMarker`] if either literal is empty.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, MarkerError> {
        let start = start.into();
        let end = end.into();
        ensure_non_empty(&start, &end)?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// True when the same literal both opens and closes a section.
    pub fn is_symmetric(&self) -> bool {
        self.start == self.end
    }

    /// # Errors
    ///
    /// See [`crate::validate_markers`].
    pub fn validate(&self, text: &str) -> Result<(), MarkerError> {
        check_structure(text, &self.start, &self.end)
    }

    /// # Errors
    ///
    /// See [`crate::parse_sections`].
    pub fn parse_sections(&self, text: &str) -> Result<Vec<String>, MarkerError> {
        extractor::parse_sections(text, &self.start, &self.end)
    }

    /// # Errors
    ///
    /// See [`crate::sections`].
    pub fn sections<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, MarkerError> {
        extractor::sections(text, &self.start, &self.end)
    }

    /// # Errors
    ///
    /// See [`crate::section_spans`].
    pub fn section_spans(&self, text: &str) -> Result<Vec<SectionSpan>, MarkerError> {
        extractor::section_spans(text, &self.start, &self.end)
    }
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}
