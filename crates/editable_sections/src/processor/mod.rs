// crates/editable_sections/src/processor/mod.rs

mod file_processor;
mod filter;

pub use file_processor::{process_file_with_processor, DefaultSectionProcessor, SectionProcessor};
pub use filter::filter_to_sections;
