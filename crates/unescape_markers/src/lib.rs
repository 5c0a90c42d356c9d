// crates/unescape_markers/src/lib.rs

/// Converts literal escape sequences in a marker argument to the characters they name.
///
/// Recognised: `\n`, `\t`, `\r` and `\\`. Any other backslash sequence (and a
/// trailing lone backslash) is kept as written.
pub fn unescape_marker(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            output.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => output.push('\n'),
            Some('t') => output.push('\t'),
            Some('r') => output.push('\r'),
            Some('\\') => output.push('\\'),
            Some(other) => {
                output.push('\\');
                output.push(other);
            }
            None => output.push('\\'),
        }
    }
    output
}
