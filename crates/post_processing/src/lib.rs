// crates/post_processing/src/lib.rs

/// Trims surrounding whitespace from every section.
///
/// Extraction always returns bodies exactly as written; callers that want
/// tidy values apply this afterwards.
pub fn trim_sections<S: AsRef<str>>(sections: &[S]) -> Vec<String> {
    sections
        .iter()
        .map(|section| section.as_ref().trim().to_string())
        .collect()
}

/// Removes sections that contain nothing but whitespace, keeping the rest untouched.
pub fn drop_blank_sections<S: AsRef<str>>(sections: &[S]) -> Vec<String> {
    sections
        .iter()
        .map(AsRef::as_ref)
        .filter(|section| !section.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins sections for display, putting `separator` on its own line between them.
///
/// # Arguments
///
/// * `sections` - The extracted section bodies, in order.
/// * `separator` - Line printed between consecutive sections.
pub fn render_sections<S: AsRef<str>>(sections: &[S], separator: &str) -> String {
    let mut output = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            if !output.ends_with('\n') {
                output.push('\n');
            }
            output.push_str(separator);
            output.push('\n');
        }
        output.push_str(section.as_ref());
    }
    output
}
