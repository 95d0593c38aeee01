// this_file: crates/filigree-glyphs/src/families.rs

//! Per-family glyph tables.
//!
//! Seven of the eight families map both cases of a-z into the Mathematical
//! Alphanumeric Symbols block, so the table is two code-point offsets rather
//! than 52 entries. Cryptic italic is the odd one out: an uppercase-only
//! grab bag of Old Italic, Cherokee, and Latin Extended letters kept as a
//! literal match.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The styled font families a glyph table exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    /// Mathematical bold script
    Cursive,
    /// Mathematical bold fraktur
    Gothic,
    /// Mathematical sans-serif bold
    Bold,
    /// Mathematical sans-serif italic
    Italic,
    /// Mathematical sans-serif bold italic
    BoldItalic,
    /// Mathematical serif bold
    SerifBold,
    /// Mathematical serif bold italic
    SerifBoldItalic,
    /// Old Italic and friends, uppercase only
    CrypticItalic,
}

/// All families, in the order the original style menus listed them.
pub const ALL_FAMILIES: [FontFamily; 8] = [
    FontFamily::Cursive,
    FontFamily::Gothic,
    FontFamily::Bold,
    FontFamily::Italic,
    FontFamily::BoldItalic,
    FontFamily::SerifBold,
    FontFamily::SerifBoldItalic,
    FontFamily::CrypticItalic,
];

impl FontFamily {
    /// Styled replacement for `ch`, or `None` when the table has no entry.
    ///
    /// Tables cover ASCII letters only; digits, punctuation, and anything
    /// already styled fall outside every table and should pass through.
    pub fn styled(self, ch: char) -> Option<char> {
        match self {
            Self::Cursive => offset_alphabetic(ch, 0x1D4D0, 0x1D4EA),
            Self::Gothic => offset_alphabetic(ch, 0x1D56C, 0x1D586),
            Self::Bold => offset_alphabetic(ch, 0x1D5D4, 0x1D5EE),
            Self::Italic => offset_alphabetic(ch, 0x1D608, 0x1D622),
            Self::BoldItalic => offset_alphabetic(ch, 0x1D63C, 0x1D656),
            Self::SerifBold => offset_alphabetic(ch, 0x1D400, 0x1D41A),
            Self::SerifBoldItalic => offset_alphabetic(ch, 0x1D468, 0x1D482),
            Self::CrypticItalic => cryptic_italic(ch),
        }
    }

    /// Restyle a whole word character by character, keeping unmapped
    /// characters as they are.
    pub fn restyle_word(self, word: &str) -> String {
        word.chars().map(|ch| self.styled(ch).unwrap_or(ch)).collect()
    }

    /// The kebab-case name used in profiles and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cursive => "cursive",
            Self::Gothic => "gothic",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold-italic",
            Self::SerifBold => "serif-bold",
            Self::SerifBoldItalic => "serif-bold-italic",
            Self::CrypticItalic => "cryptic-italic",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FAMILIES
            .iter()
            .copied()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}

/// Returned when a family name does not match any table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFamily(pub String);

impl fmt::Display for UnknownFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown font family: {}", self.0)
    }
}

impl std::error::Error for UnknownFamily {}

/// Map a-z/A-Z by offset into a contiguous styled alphabet.
fn offset_alphabetic(ch: char, upper_base: u32, lower_base: u32) -> Option<char> {
    let code = match ch {
        'A'..='Z' => upper_base + (ch as u32 - 'A' as u32),
        'a'..='z' => lower_base + (ch as u32 - 'a' as u32),
        _ => return None,
    };
    char::from_u32(code)
}

fn cryptic_italic(ch: char) -> Option<char> {
    Some(match ch {
        'A' => '𐌀',
        'B' => '𐌁',
        'C' => '𐌂',
        'D' => '𐌃',
        'E' => '𐌄',
        'F' => '𐌅',
        'G' => 'Ᏽ',
        'H' => '𐋅',
        'I' => '𐌉',
        'J' => 'Ꮭ',
        'K' => '𐌊',
        'L' => '𐌋',
        'M' => '𐌌',
        'N' => '𐌍',
        'O' => 'Ꝋ',
        'P' => '𐌐',
        'Q' => '𐌒',
        'R' => '𐌓',
        'S' => '𐌔',
        'T' => '𐌕',
        'U' => '𐌵',
        'V' => 'ᕓ',
        'W' => 'Ᏸ',
        'X' => '𐋄',
        'Y' => '𐌙',
        'Z' => 'Ɀ',
        _ => return None,
    })
}
