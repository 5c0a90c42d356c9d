// crates/edit_marker/src/lib.rs

//! Marker literals shared by the section tool‑chain.

/// Opens an editable section when no marker is configured.
pub const DEFAULT_START_MARKER: &str = "#start_edit";

/// Closes an editable section when no marker is configured.
pub const DEFAULT_END_MARKER: &str = "#end_edit";

/// Environment variable overriding the start marker (CLI only).
pub const START_MARKER_ENV: &str = "EDIT_START_MARKER";

/// Environment variable overriding the end marker (CLI only).
pub const END_MARKER_ENV: &str = "EDIT_END_MARKER";
