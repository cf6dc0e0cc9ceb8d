//! Tag scanning.
//!
//! Scans raw template text left-to-right for top-level custom component
//! tags. A component tag is the sole structural signal in the input: `<`
//! followed by an uppercase ASCII letter starts a candidate, and everything
//! else (lowercase markup elements, stray angle brackets, unclosed tags)
//! is literal text.
//!
//! The scan is an explicit cursor machine, not a backtracking pattern: one
//! forward pass, quote-aware inside opening tags, so malformed input
//! degrades to literal text in linear time.

use crate::Range;

/// One matched component tag span, as byte ranges into the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TagMatch {
    /// Full span from `<` through the matching `</Name>`.
    pub span: Range,
    /// The component name.
    pub name: Range,
    /// Raw attribute text between the name and the opening tag's `>`.
    pub attributes: Range,
    /// Inner content between the opening `>` and the closing tag.
    pub content: Range,
}

/// Find the next top-level component tag at or after byte offset `from`.
///
/// Candidates that cannot be completed (no `>` closing the opening tag, or
/// no matching `</Name>` later in the source) are skipped and their text
/// stays literal; scanning resumes one byte past the candidate's `<`.
pub(crate) fn next_tag(source: &str, from: usize) -> Option<TagMatch> {
    let mut cursor = from;
    while let Some(offset) = source[cursor..].find('<') {
        let lt = cursor + offset;
        if let Some(tag) = match_tag_at(source, lt) {
            return Some(tag);
        }
        cursor = lt + 1;
    }
    None
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn match_tag_at(source: &str, lt: usize) -> Option<TagMatch> {
    let bytes = source.as_bytes();

    // Component names start with an uppercase ASCII letter; anything else
    // (lowercase elements, `</`, comparison operators) is literal text.
    let name_start = lt + 1;
    if !bytes.get(name_start).is_some_and(|b| b.is_ascii_uppercase()) {
        return None;
    }
    let mut pos = name_start + 1;
    while pos < bytes.len() && is_word_byte(bytes[pos]) {
        pos += 1;
    }
    let name_end = pos;

    // The opening tag ends at the first `>` outside double quotes, so
    // attribute values may contain `>`.
    let attr_start = pos;
    let mut in_quotes = false;
    loop {
        match bytes.get(pos) {
            None => return None,
            Some(b'"') => in_quotes = !in_quotes,
            Some(b'>') if !in_quotes => break,
            Some(_) => {}
        }
        pos += 1;
    }
    let attr_end = pos;

    // The body runs to the first matching closer. Nested identical names
    // resolve through recursive re-expansion, not within one scan.
    let content_start = pos + 1;
    let closer = format!("</{}>", &source[name_start..name_end]);
    let rel = source[content_start..].find(&closer)?;
    let content_end = content_start + rel;

    Some(TagMatch {
        span: Range { start: lt, end: content_end + closer.len() },
        name: Range { start: name_start, end: name_end },
        attributes: Range { start: attr_start, end: attr_end },
        content: Range { start: content_start, end: content_end },
    })
}
