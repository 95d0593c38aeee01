// this_file: crates/filigree-core/src/transform/first_letter.rs

//! Styled replacement of the first character.

use filigree_glyphs::FontFamily;

/// Replace the first character of `text` with its styled glyph.
///
/// Operates on the first Unicode scalar value, not a grapheme cluster. If
/// no family is selected, or the first character has no entry in the
/// family's table (digits, punctuation, already-styled glyphs), the text
/// comes back unchanged.
pub fn replace_first_letter(text: &str, family: Option<FontFamily>) -> String {
    let Some(family) = family else {
        return text.to_string();
    };
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let styled = family.styled(first).unwrap_or(first);
            let mut out = String::with_capacity(text.len() + 4);
            out.push(styled);
            out.push_str(chars.as_str());
            out
        },
        None => String::new(),
    }
}
