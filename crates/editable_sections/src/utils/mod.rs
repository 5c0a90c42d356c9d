// crates/editable_sections/src/utils/mod.rs

pub(crate) mod scanner;
