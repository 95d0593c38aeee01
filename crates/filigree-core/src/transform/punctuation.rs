// this_file: crates/filigree-core/src/transform/punctuation.rs

//! Comma and `!`/`?` substitution.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Replace every comma with `replacement`.
///
/// The replacement may be multiple characters. `None` or an empty string
/// is the identity.
pub fn replace_commas(text: &str, replacement: Option<&str>) -> String {
    match replacement {
        Some(style) if !style.is_empty() => text.replace(',', style),
        _ => text.to_string(),
    }
}

/// Replace every `!` and `?` with the pair's styled forms.
pub fn replace_punctuation(text: &str, pair: Option<&PunctuationPair>) -> String {
    match pair {
        Some(pair) => text
            .replace('!', &pair.exclamation)
            .replace('?', &pair.question),
        None => text.to_string(),
    }
}

/// Replacements for the two styled punctuation marks.
///
/// Persists as the original's comma-delimited form, `exclamation,question`.
/// Parsing requires the delimiter; either half may be empty, which deletes
/// that mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationPair {
    pub exclamation: String,
    pub question: String,
}

impl PunctuationPair {
    pub fn new(exclamation: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            exclamation: exclamation.into(),
            question: question.into(),
        }
    }
}

impl fmt::Display for PunctuationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.exclamation, self.question)
    }
}

impl FromStr for PunctuationPair {
    type Err = MalformedPair;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((exclamation, question)) => Ok(Self::new(exclamation, question)),
            None => Err(MalformedPair),
        }
    }
}

/// A punctuation spec without its delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedPair;

impl fmt::Display for MalformedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("punctuation pair needs the form \"exclamation,question\"")
    }
}

impl std::error::Error for MalformedPair {}

impl Serialize for PunctuationPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PunctuationPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
