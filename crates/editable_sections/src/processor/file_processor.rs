// crates/editable_sections/src/processor/file_processor.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::markers::MarkerPair;

/// Trait that abstracts turning some input into its editable sections.
pub trait SectionProcessor {
    /// Extracts the sections of in-memory text.
    fn process_text(&self, text: &str) -> Result<Vec<String>>;

    /// Reads the file at `file_path` and extracts its sections.
    fn process_file(&self, file_path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Error reading file {}", file_path.display()))?;
        self.process_text(&content)
            .with_context(|| format!("Invalid section markers in {}", file_path.display()))
    }
}

/// Default implementation of the `SectionProcessor` trait.
/// Validates and extracts with a fixed marker pair.
#[derive(Debug, Clone, Default)]
pub struct DefaultSectionProcessor {
    pub markers: MarkerPair,
}

impl DefaultSectionProcessor {
    pub fn new(markers: MarkerPair) -> Self {
        Self { markers }
    }
}

impl SectionProcessor for DefaultSectionProcessor {
    fn process_text(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.markers.parse_sections(text)?)
    }
}

/// Public API function to process a file using a provided `SectionProcessor` implementation.
pub fn process_file_with_processor<P: AsRef<Path>>(
    processor: &dyn SectionProcessor,
    file_path: P,
) -> Result<Vec<String>> {
    let file_path = file_path.as_ref();
    let sections = processor.process_file(file_path)?;
    log::info!(
        "Extracted {} section(s) from {}",
        sections.len(),
        file_path.display()
    );
    Ok(sections)
}
