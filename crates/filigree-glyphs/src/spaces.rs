// this_file: crates/filigree-glyphs/src/spaces.rs

//! Named replacement characters for the ASCII space.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Unicode space that can stand in for U+0020.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceStyle {
    ThinSpace,
    HairSpace,
    FigureSpace,
    PunctuationSpace,
    EmQuad,
    EnQuad,
}

/// All space styles, menu order.
pub const ALL_SPACE_STYLES: [SpaceStyle; 6] = [
    SpaceStyle::ThinSpace,
    SpaceStyle::HairSpace,
    SpaceStyle::FigureSpace,
    SpaceStyle::PunctuationSpace,
    SpaceStyle::EmQuad,
    SpaceStyle::EnQuad,
];

impl SpaceStyle {
    /// The replacement character itself.
    pub fn character(self) -> char {
        match self {
            Self::ThinSpace => '\u{2009}',
            Self::HairSpace => '\u{200A}',
            Self::FigureSpace => '\u{2007}',
            Self::PunctuationSpace => '\u{2008}',
            Self::EmQuad => '\u{2001}',
            Self::EnQuad => '\u{2000}',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThinSpace => "thin-space",
            Self::HairSpace => "hair-space",
            Self::FigureSpace => "figure-space",
            Self::PunctuationSpace => "punctuation-space",
            Self::EmQuad => "em-quad",
            Self::EnQuad => "en-quad",
        }
    }
}

impl fmt::Display for SpaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceStyle {
    type Err = UnknownSpaceStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SPACE_STYLES
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownSpaceStyle(s.to_string()))
    }
}

/// Returned when a space-style name is not in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpaceStyle(pub String);

impl fmt::Display for UnknownSpaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown space style: {}", self.0)
    }
}

impl std::error::Error for UnknownSpaceStyle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_match_the_original_table() {
        assert_eq!(SpaceStyle::ThinSpace.character(), '\u{2009}');
        assert_eq!(SpaceStyle::HairSpace.character(), '\u{200A}');
        assert_eq!(SpaceStyle::FigureSpace.character(), '\u{2007}');
        assert_eq!(SpaceStyle::PunctuationSpace.character(), '\u{2008}');
        assert_eq!(SpaceStyle::EmQuad.character(), '\u{2001}');
        assert_eq!(SpaceStyle::EnQuad.character(), '\u{2000}');
    }

    #[test]
    fn every_replacement_is_whitespace() {
        for style in ALL_SPACE_STYLES {
            assert!(style.character().is_whitespace(), "{style}");
        }
    }

    #[test]
    fn names_round_trip() {
        for style in ALL_SPACE_STYLES {
            assert_eq!(style.as_str().parse::<SpaceStyle>(), Ok(style));
        }
        assert!("double-space".parse::<SpaceStyle>().is_err());
    }
}
