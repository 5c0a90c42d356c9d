// crates/editable_sections/src/utils/scanner.rs

/// Which of the two marker literals a token matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Start,
    End,
}

/// One marker occurrence, located at `offset` (in bytes) in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Cached result of the last search for one marker.
#[derive(Debug, Clone, Copy)]
enum Lookahead {
    Unknown,
    At(usize),
    Exhausted,
}

/// Iterator over the non-overlapping marker occurrences of a text, left to right.
///
/// At any cursor the earliest occurrence of either marker is taken; when both
/// begin at the same byte the start marker wins. After a token the scan resumes
/// right after it, so a marker never matches inside another marker's occurrence.
///
/// Both markers must be non-empty; callers check this before scanning.
#[derive(Debug)]
pub(crate) struct MarkerScanner<'a> {
    text: &'a str,
    start: &'a str,
    end: &'a str,
    cursor: usize,
    next_start: Lookahead,
    next_end: Lookahead,
}

impl<'a> MarkerScanner<'a> {
    pub fn new(text: &'a str, start: &'a str, end: &'a str) -> Self {
        debug_assert!(!start.is_empty() && !end.is_empty());
        Self {
            text,
            start,
            end,
            cursor: 0,
            next_start: Lookahead::Unknown,
            next_end: Lookahead::Unknown,
        }
    }
}

/// Returns the first occurrence of `needle` at or after `cursor`, reusing the
/// cached position when it has not been passed yet. The cursor only moves
/// forward, so an exhausted search stays exhausted.
fn lookahead(slot: &mut Lookahead, text: &str, needle: &str, cursor: usize) -> Option<usize> {
    match *slot {
        Lookahead::At(pos) if pos >= cursor => return Some(pos),
        Lookahead::Exhausted => return None,
        _ => {}
    }
    let found = text[cursor..].find(needle).map(|i| cursor + i);
    *slot = found.map_or(Lookahead::Exhausted, Lookahead::At);
    found
}

impl Iterator for MarkerScanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let start = lookahead(&mut self.next_start, self.text, self.start, self.cursor);
        let end = lookahead(&mut self.next_end, self.text, self.end, self.cursor);

        let (kind, offset, len) = match (start, end) {
            (Some(s), Some(e)) if e < s => (TokenKind::End, e, self.end.len()),
            (Some(s), _) => (TokenKind::Start, s, self.start.len()),
            (None, Some(e)) => (TokenKind::End, e, self.end.len()),
            (None, None) => return None,
        };
        self.cursor = offset + len;
        Some(Token { kind, offset })
    }
}
