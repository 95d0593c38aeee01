// this_file: crates/filigree-core/src/transform/spacing.rs

//! Invisible vertical padding around the output.

/// The one character most platforms render as a blank line without
/// trimming it: U+1160 HANGUL JUNGSEONG FILLER.
pub const INVISIBLE_LINE: char = '\u{1160}';

/// Surround `text` with `count` invisible lines above and below.
///
/// Each padding line holds a single filler character, so the output gains
/// exactly `2 * count` lines and `2 * count` newlines over the input.
pub fn apply_spacing(text: &str, count: u32) -> String {
    if count == 0 {
        return text.to_string();
    }
    let count = count as usize;
    let mut out = String::with_capacity(text.len() + 8 * count);
    for _ in 0..count {
        out.push(INVISIBLE_LINE);
        out.push('\n');
    }
    out.push_str(text);
    for _ in 0..count {
        out.push('\n');
        out.push(INVISIBLE_LINE);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_char(haystack: &str, needle: char) -> usize {
        haystack.chars().filter(|ch| *ch == needle).count()
    }

    #[test]
    fn zero_count_is_identity() {
        assert_eq!(apply_spacing("test", 0), "test");
    }

    #[test]
    fn count_two_pads_both_sides() {
        let out = apply_spacing("x", 2);
        assert_eq!(count_char(&out, '\n'), 4);
        assert_eq!(count_char(&out, INVISIBLE_LINE), 4);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "x");
    }

    #[test]
    fn single_count_centers_the_text() {
        let out = apply_spacing("test", 1);
        assert_eq!(out, "\u{1160}\ntest\n\u{1160}");
    }

    #[test]
    fn internal_newlines_are_preserved() {
        let out = apply_spacing("line1\nline2", 1);
        assert_eq!(count_char(&out, '\n'), 3);
        assert!(out.contains("line1\nline2"));
    }

    #[test]
    fn filler_is_the_hangul_filler() {
        assert_eq!(INVISIBLE_LINE as u32, 0x1160);
    }
}
