// crates/editable_sections/src/processor/filter.rs

use crate::error::MarkerError;
use crate::markers::MarkerPair;

/// Renders `text` keeping only the section bodies.
///
/// Every non-empty stretch of text outside the sections (markers included) is
/// replaced by a single `placeholder`. Adjacent sections with nothing between
/// them are joined without a placeholder. Text without sections renders as the
/// placeholder alone, or as nothing when the text is empty.
///
/// # Errors
///
/// Returns the [`MarkerError`] from validating `text`.
pub fn filter_to_sections(text: &str, markers: &MarkerPair, placeholder: &str) -> Result<String, MarkerError> {
    let spans = markers.section_spans(text)?;
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in &spans {
        if span.marker_start > cursor {
            output.push_str(placeholder);
        }
        output.push_str(span.body_of(text));
        cursor = span.marker_end;
    }

    if text.len() > cursor {
        output.push_str(placeholder);
    }
    Ok(output)
}
