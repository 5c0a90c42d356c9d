// crates/editable_sections/src/lib.rs

//! Validation and extraction of marker-delimited editable sections.
//!
//! A section is the text strictly between a start marker and the next end
//! marker. Markers are matched as exact literals; sections never nest.
//!
//! ```ignore
//! use editable_sections::parse_sections;
//!
//! let sections = parse_sections("Apple #s Pear #e Grapes", "#s", "#e")?;
//! assert_eq!(sections, vec![" Pear "]);
//! ```

mod error;
mod extractor;
mod markers;
mod utils;
mod validator;

pub mod processor;

pub use error::{MarkerError, MarkerErrorKind};
pub use extractor::{parse_sections, section_spans, sections, SectionSpan};
pub use markers::MarkerPair;
pub use validator::validate_markers;
