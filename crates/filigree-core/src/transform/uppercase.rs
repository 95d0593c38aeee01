// this_file: crates/filigree-core/src/transform/uppercase.rs

//! Restyling of fully-uppercase words.

use filigree_glyphs::FontFamily;

/// Rewrite every fully-uppercase word of `text` through the family's
/// glyph table.
///
/// Text splits into alternating word and separator segments at ASCII word
/// boundaries (a word character is `[A-Za-z0-9_]`). A word qualifies when
/// it equals its own uppercase form and contains at least one A-Z letter,
/// which admits words like `A1` while excluding pure digits. Separators
/// and non-qualifying words pass through verbatim, so concatenating the
/// segments reconstructs the input with only qualifying words altered.
pub fn replace_uppercase_words(text: &str, family: Option<FontFamily>) -> String {
    let Some(family) = family else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len());
    for segment in split_word_runs(text) {
        if qualifies(segment) {
            out.push_str(&family.restyle_word(segment));
        } else {
            out.push_str(segment);
        }
    }
    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn qualifies(segment: &str) -> bool {
    !segment.is_empty()
        && segment == segment.to_uppercase()
        && segment.chars().any(|ch| ch.is_ascii_uppercase())
}

/// Alternating runs of word and non-word characters, in order.
fn split_word_runs(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let first_is_word = rest.chars().next().map(is_word_char)?;
        let end = rest
            .find(|ch: char| is_word_char(ch) != first_is_word)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(run)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_uppercase_words_and_leaves_the_rest() {
        assert_eq!(
            replace_uppercase_words("HELLO world FOO", Some(FontFamily::Bold)),
            "𝗛𝗘𝗟𝗟𝗢 world 𝗙𝗢𝗢"
        );
    }

    #[test]
    fn no_style_is_identity() {
        assert_eq!(replace_uppercase_words("HELLO world", None), "HELLO world");
    }

    #[test]
    fn word_with_digit_still_qualifies() {
        // "A1" equals its own uppercase form and contains a letter.
        assert_eq!(
            replace_uppercase_words("A1 BC", Some(FontFamily::SerifBold)),
            "𝐀1 𝐁𝐂"
        );
    }

    #[test]
    fn pure_digits_and_punctuation_do_not_qualify() {
        assert_eq!(
            replace_uppercase_words("42 ... 7", Some(FontFamily::Bold)),
            "42 ... 7"
        );
    }

    #[test]
    fn mixed_case_words_pass_through() {
        assert_eq!(
            replace_uppercase_words("McDONALD Ok", Some(FontFamily::Bold)),
            "McDONALD Ok"
        );
    }

    #[test]
    fn separators_survive_verbatim() {
        assert_eq!(
            replace_uppercase_words("AB, CD!  EF", Some(FontFamily::Italic)),
            "𝘈𝘉, 𝘊𝘋!  𝘌𝘍"
        );
    }

    #[test]
    fn cryptic_family_keeps_unmapped_characters() {
        // Digits have no cryptic glyph and stay put inside the word.
        assert_eq!(
            replace_uppercase_words("B2B", Some(FontFamily::CrypticItalic)),
            "𐌁2𐌁"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(replace_uppercase_words("", Some(FontFamily::Bold)), "");
    }

    #[test]
    fn word_runs_alternate_and_reassemble() {
        let text = "AB, cd! ";
        let runs: Vec<&str> = split_word_runs(text).collect();
        assert_eq!(runs, vec!["AB", ", ", "cd", "! "]);
        assert_eq!(runs.concat(), text);
    }
}
