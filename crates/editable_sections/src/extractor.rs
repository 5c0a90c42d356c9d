// crates/editable_sections/src/extractor.rs

use std::ops::Range;

use crate::error::MarkerError;
use crate::validator::validate_markers;

/// Byte offsets of one section within the text it was extracted from.
///
/// `marker_start..marker_end` covers the section including both markers;
/// `body_start..body_end` covers only the text between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionSpan {
    pub marker_start: usize,
    pub body_start: usize,
    pub body_end: usize,
    pub marker_end: usize,
}

impl SectionSpan {
    pub fn body(&self) -> Range<usize> {
        self.body_start..self.body_end
    }

    pub fn outer(&self) -> Range<usize> {
        self.marker_start..self.marker_end
    }

    pub fn is_empty(&self) -> bool {
        self.body_start == self.body_end
    }

    /// Borrows this section's body from the text the span was computed for.
    pub fn body_of<'t>(&self, text: &'t str) -> &'t str {
        &text[self.body()]
    }
}

/// Extracts the text between each start/end marker pair, in order of appearance.
///
/// The text is validated first; no sections are returned if validation fails.
/// Section bodies are returned exactly as they appear, whitespace and newlines
/// included.
///
/// # Errors
///
/// Returns the [`MarkerError`] reported by [`validate_markers`].
pub fn parse_sections(text: &str, start_marker: &str, end_marker: &str) -> Result<Vec<String>, MarkerError> {
    Ok(sections(text, start_marker, end_marker)?
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// Like [`parse_sections`], borrowing the bodies from `text`.
///
/// # Errors
///
/// Returns the [`MarkerError`] reported by [`validate_markers`].
pub fn sections<'t>(text: &'t str, start_marker: &str, end_marker: &str) -> Result<Vec<&'t str>, MarkerError> {
    let spans = section_spans(text, start_marker, end_marker)?;
    Ok(spans.iter().map(|span| span.body_of(text)).collect())
}

/// Locates every section and returns its byte offsets.
///
/// # Errors
///
/// Returns the [`MarkerError`] reported by [`validate_markers`].
pub fn section_spans(text: &str, start_marker: &str, end_marker: &str) -> Result<Vec<SectionSpan>, MarkerError> {
    validate_markers(text, start_marker, end_marker)?;
    let spans = collect_spans(text, start_marker, end_marker);
    log::debug!(
        "Found {} section(s) in {} byte(s) of text",
        spans.len(),
        text.len()
    );
    Ok(spans)
}

/// Pairs each start marker with the first end marker after it.
/// Only meaningful on text that passed validation.
fn collect_spans(text: &str, start_marker: &str, end_marker: &str) -> Vec<SectionSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(start_marker) {
        let marker_start = cursor + found;
        let body_start = marker_start + start_marker.len();
        // Validated text always closes an open section.
        let Some(found_end) = text[body_start..].find(end_marker) else {
            break;
        };
        let body_end = body_start + found_end;
        let marker_end = body_end + end_marker.len();

        spans.push(SectionSpan {
            marker_start,
            body_start,
            body_end,
            marker_end,
        });
        cursor = marker_end;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkerErrorKind;

    #[test]
    fn test_single_section() {
        assert_eq!(
            parse_sections("Apple #s Pear #e Grapes", "#s", "#e").unwrap(),
            vec![" Pear "]
        );
    }

    #[test]
    fn test_adjacent_markers_give_empty_section() {
        assert_eq!(parse_sections("A #s#e B", "#s", "#e").unwrap(), vec![""]);
    }

    #[test]
    fn test_multiple_sections_in_order() {
        assert_eq!(
            parse_sections("#s one #e #s two #e", "#s", "#e").unwrap(),
            vec![" one ", " two "]
        );
    }

    #[test]
    fn test_errors_propagate() {
        let kind = |text: &str, start: &str| {
            parse_sections(text, start, "#e").unwrap_err().kind()
        };
        assert_eq!(kind("#s #s x #e #e", "#s"), MarkerErrorKind::NestedStartMarker);
        assert_eq!(kind("x #e", "#s"), MarkerErrorKind::UnmatchedEndMarker);
        assert_eq!(kind("#s x", "#s"), MarkerErrorKind::UnterminatedSection);
        assert_eq!(kind("plain text", ""), MarkerErrorKind::EmptyMarker);
    }

    #[test]
    fn test_empty_and_unmarked_text() {
        assert!(parse_sections("", "#s", "#e").unwrap().is_empty());
        assert!(parse_sections("no markers at all", "#s", "#e").unwrap().is_empty());
    }

    #[test]
    fn test_spans_cover_markers() {
        let text = "ab#s xy #ecd";
        let spans = section_spans(text, "#s", "#e").unwrap();
        assert_eq!(spans.len(), 1);
        let span = spans[0];
        assert_eq!(&text[span.outer()], "#s xy #e");
        assert_eq!(span.body_of(text), " xy ");
        assert!(!span.is_empty());
    }

    #[test]
    fn test_borrowed_sections_point_into_text() {
        let text = String::from("x #s keep #e y");
        let bodies = sections(&text, "#s", "#e").unwrap();
        assert_eq!(bodies, vec![" keep "]);
        let base = text.as_ptr() as usize;
        assert_eq!(bodies[0].as_ptr() as usize - base, 4);
    }

    #[test]
    fn test_identical_markers() {
        assert_eq!(
            parse_sections("a|b|c|d|e", "|", "|").unwrap(),
            vec!["b", "d"]
        );
        assert_eq!(parse_sections("||", "|", "|").unwrap(), vec![""]);
    }

    #[test]
    fn test_start_marker_contains_end_marker() {
        // The end literal "#end" is a prefix of the start literal.
        assert_eq!(
            parse_sections("#end_x body #end tail", "#end_x", "#end").unwrap(),
            vec![" body "]
        );
    }

    #[test]
    fn test_end_marker_contains_start_marker() {
        // The start literal "<" also begins the end literal "</".
        assert_eq!(
            parse_sections("a < b </ c", "<", "</").unwrap_err().kind(),
            MarkerErrorKind::NestedStartMarker
        );
        assert_eq!(
            parse_sections("a < b /> c", "<", "/>").unwrap(),
            vec![" b "]
        );
    }
}
