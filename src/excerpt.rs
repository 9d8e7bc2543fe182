//! Excerpt extraction
//!
//! Turns a raw match offset into a readable slice of the corpus. Starting
//! [`RADIUS`] bytes away from the match on each side, the scan moves outward
//! until it finds a sentence (`.`) or clause (`;`) delimiter. When the
//! excerpt opens on a `[` stage direction, a closing `]` ends it early.

use memchr::{memchr, memchr2, memrchr2};
use std::ops::Range;
use tracing::trace;

/// Default look-around distance before delimiter scanning begins
pub const RADIUS: usize = 100;

const PERIOD: u8 = b'.';
const SEMICOLON: u8 = b';';
const OPENING_BRACKET: u8 = b'[';
const CLOSING_BRACKET: u8 = b']';

/// Extract the excerpt around `offset` using the default [`RADIUS`]
pub fn extract(corpus: &str, offset: usize) -> &str {
    extract_with_radius(corpus, offset, RADIUS)
}

/// Extract the excerpt around `offset` with a custom look-around radius
pub fn extract_with_radius(corpus: &str, offset: usize, radius: usize) -> &str {
    let range = bounds(corpus.as_bytes(), offset, radius);
    // Boundaries are 0, len, or one past an ASCII delimiter: always char boundaries.
    corpus.get(range).unwrap_or_default()
}

/// Compute the excerpt byte range `[start, end)` for a match at `offset`
///
/// Offsets past the end of `text` are clamped to its length. When no
/// delimiter follows the match the excerpt runs to the end of the text.
pub fn bounds(text: &[u8], offset: usize, radius: usize) -> Range<usize> {
    let offset = offset.min(text.len());
    let start = left_boundary(text, offset, radius);
    let end = right_boundary(text, offset, radius, start);

    trace!(offset, start, end, "excerpt bounds");
    start..end
}

/// Position just after the last delimiter at or before `offset - radius`
fn left_boundary(text: &[u8], offset: usize, radius: usize) -> usize {
    let Some(scan_from) = offset.checked_sub(radius) else {
        return 0;
    };
    let scan_end = (scan_from + 1).min(text.len());

    memrchr2(PERIOD, SEMICOLON, &text[..scan_end]).map_or(0, |i| i + 1)
}

/// Position just after the first delimiter at or after `offset + radius`
///
/// At every scan position `i` the bracket rule is tested before the
/// punctuation rule: if the excerpt starts with `[` and `text[i + 1]` is
/// `]`, the excerpt ends at `i + 1`.
fn right_boundary(text: &[u8], offset: usize, radius: usize, start: usize) -> usize {
    let scan_from = offset.saturating_add(radius);
    if scan_from >= text.len() {
        return text.len();
    }
    let window = &text[scan_from..];

    let punctuation = memchr2(PERIOD, SEMICOLON, window);
    let bracket = if text.get(start) == Some(&OPENING_BRACKET) {
        // A ']' found at window[j + 1] closes the scan at window position j.
        memchr(CLOSING_BRACKET, &window[1..])
    } else {
        None
    };

    let hit = match (bracket, punctuation) {
        (Some(b), Some(p)) => Some(b.min(p)),
        (b, p) => b.or(p),
    };

    hit.map_or(text.len(), |i| scan_from + i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLAUSES: &str = "The cat sat. The dog ran; the bird flew.";

    #[test]
    fn test_clause_boundaries_with_zero_radius() {
        assert_eq!(extract_with_radius(CLAUSES, 0, 0), "The cat sat.");
        assert_eq!(extract_with_radius(CLAUSES, 13, 0), " The dog ran;");
        assert_eq!(extract_with_radius(CLAUSES, 26, 0), " the bird flew.");
    }

    #[test]
    fn test_short_corpus_falls_back_to_whole_text() {
        // Both scans start outside the text
        assert_eq!(extract(CLAUSES, 13), CLAUSES);
    }

    #[test]
    fn test_left_scan_includes_start_position() {
        // offset - radius lands exactly on the ';'
        let text = "abc;defghij";
        assert_eq!(bounds(text.as_bytes(), 5, 2), 4..11);
    }

    #[test]
    fn test_right_scan_includes_start_position() {
        let text = "abcdef.ghi";
        assert_eq!(bounds(text.as_bytes(), 3, 3), 0..7);
    }

    #[test]
    fn test_no_delimiters() {
        let text = "x".repeat(500);
        assert_eq!(bounds(text.as_bytes(), 250, RADIUS), 0..500);
    }

    #[test]
    fn test_offset_zero_without_preceding_delimiter() {
        let text = format!("{}. rest", "a".repeat(150));
        let range = bounds(text.as_bytes(), 0, RADIUS);
        assert_eq!(range, 0..151);
    }

    #[test]
    fn test_last_offset_does_not_read_past_end() {
        let text = format!("[{}", "b".repeat(300));
        let last = text.len() - 1;
        assert_eq!(bounds(text.as_bytes(), last, 0), 0..text.len());
        assert_eq!(bounds(text.as_bytes(), last, RADIUS), 0..text.len());
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        assert_eq!(bounds(b"abc. def", 99, 0), 4..8);
    }

    #[test]
    fn test_bracket_closes_before_sentence_end() {
        let text = "Enter.[Aside, to Horatio] Well said. More.";
        // Without the bracket rule the scan would run to "said."
        assert_eq!(extract_with_radius(text, 7, 0), "[Aside, to Horatio");
    }

    #[test]
    fn test_bracket_and_period_at_same_position() {
        let text = "He dies.[Exit.] Enter Ghost.";
        assert_eq!(extract_with_radius(text, 9, 0), "[Exit.");
    }

    #[test]
    fn test_bracket_ignored_without_opening_bracket() {
        let text = "Enter. Aside, to Horatio] Well said. More.";
        assert_eq!(extract_with_radius(text, 7, 0), " Aside, to Horatio] Well said.");
    }

    #[test]
    fn test_bracket_rule_with_default_radius() {
        let text = format!(
            "Scene.[{} speaks aside] and then a long speech follows. End.",
            "word ".repeat(60)
        );
        // The backward scan from offset - RADIUS finds "Scene." and opens on '['
        let excerpt = extract(&text, 110);
        assert!(excerpt.starts_with('['));
        assert!(excerpt.ends_with("speaks aside"));
    }

    #[test]
    fn test_multibyte_text_is_sliced_safely() {
        let text = format!("Été; {} fin. Après", "où ".repeat(60));
        let offset = text.find("fin").unwrap();
        let excerpt = extract(&text, offset);
        assert!(excerpt.contains("fin."));
        assert!(excerpt.starts_with(' '));
    }
}
