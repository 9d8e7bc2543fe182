//! Length-preserving case folding
//!
//! Match positions in the folded text are used as offsets into the original
//! corpus, so folding must never change the byte length of the text.

/// Lowercase `text` without changing its UTF-8 byte length
///
/// Each character is replaced by its lowercase form only when that form is
/// a single character encoded in the same number of bytes. Characters whose
/// lowercase mapping expands (e.g. `İ`) or changes width are kept as-is.
/// Final sigma `ς` folds to `σ`, so `ΣΊΣΥΦΟΣ` and `σίσυφος` fold alike.
pub fn fold_case(text: &str) -> Vec<u8> {
    let mut folded = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];

    for c in text.chars() {
        let lower = fold_char(c);
        folded.extend_from_slice(lower.encode_utf8(&mut buf).as_bytes());
    }

    debug_assert_eq!(folded.len(), text.len());
    folded
}

#[inline]
fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    if c == 'ς' {
        return 'σ';
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        assert_eq!(fold_case("To Be, Or NOT"), b"to be, or not");
    }

    #[test]
    fn test_non_ascii_same_width() {
        assert_eq!(fold_case("ÉTÉ"), "été".as_bytes());
    }

    #[test]
    fn test_expanding_lowercase_is_kept() {
        // 'İ' lowercases to "i\u{307}", which is wider
        let text = "İstanbul";
        let folded = fold_case(text);
        assert_eq!(folded.len(), text.len());
        assert_eq!(folded, "İstanbul".as_bytes());
    }

    #[test]
    fn test_final_sigma() {
        assert_eq!(fold_case("ΣΊΣΥΦΟΣ"), fold_case("σίσυφος"));
        assert_eq!(fold_case("ς"), "σ".as_bytes());
    }

    #[test]
    fn test_length_preserved() {
        for text in ["", "Hamlet", "ΣΊΣΥΦΟΣ", "Kelvin \u{212A}", "ẞ straße"] {
            assert_eq!(fold_case(text).len(), text.len(), "{text}");
        }
    }
}
