// this_file: crates/filigree-core/src/config.rs

//! The complete set of user-chosen style options for one pipeline run.
//!
//! `StyleConfig` is a plain value: the pipeline borrows it and never
//! mutates it. Field names serialize in camelCase so a config round-trips
//! the JSON shape the original profile storage used. Deserialization is
//! forgiving at the boundary: out-of-range frequencies clamp to 0..=100,
//! negative or non-numeric spacing becomes 0, a malformed punctuation
//! pair degrades to no substitution, and empty or unknown style names
//! mean the style is off.

use crate::transform::punctuation::PunctuationPair;
use filigree_glyphs::{FontFamily, SpaceStyle};
use serde::{Deserialize, Deserializer, Serialize};

/// Where injected symbols come from, if anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolMode {
    /// No injection.
    #[default]
    #[serde(alias = "symbolButton1")]
    None,
    /// Draw from the built-in symbol pool.
    #[serde(alias = "symbolButton2")]
    Random,
    /// Draw from the characters of `custom_symbols`.
    #[serde(alias = "symbolButton3")]
    Custom,
}

/// Every user-selectable option for one transformation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Styled font for the first character, if any.
    #[serde(deserialize_with = "de_family")]
    pub first_letter_font: Option<FontFamily>,
    /// Style applied to fully-uppercase words, if any.
    #[serde(deserialize_with = "de_family")]
    pub uppercase_word_style: Option<FontFamily>,
    /// Replacement string for every comma, if any.
    #[serde(deserialize_with = "de_optional_string")]
    pub comma_style: Option<String>,
    /// Replacements for `!` and `?`, if any.
    #[serde(deserialize_with = "de_punctuation")]
    pub punctuation_style: Option<PunctuationPair>,
    /// Replacement for every ASCII space, if any.
    #[serde(deserialize_with = "de_space")]
    pub space_style: Option<SpaceStyle>,
    /// Symbol injection mode.
    pub symbol_mode: SymbolMode,
    /// Per-word insertion probability, percent.
    #[serde(deserialize_with = "de_frequency")]
    pub symbol_frequency: u8,
    /// Uniform draws with repeats, versus shuffle-bag sampling.
    pub allow_repeat_symbols: bool,
    /// Literal characters used when `symbol_mode` is `Custom`.
    pub custom_symbols: String,
    /// Reflow text to the fixed column budget.
    pub text_alignment_enabled: bool,
    /// Invisible padding line-pairs above and below the output.
    #[serde(deserialize_with = "de_spacing")]
    pub output_spacing: u32,
}

impl Default for StyleConfig {
    /// Matches the original application's reset-to-defaults: frequency 50,
    /// repeats allowed, every style off.
    fn default() -> Self {
        Self {
            first_letter_font: None,
            uppercase_word_style: None,
            comma_style: None,
            punctuation_style: None,
            space_style: None,
            symbol_mode: SymbolMode::None,
            symbol_frequency: 50,
            allow_repeat_symbols: true,
            custom_symbols: String::new(),
            text_alignment_enabled: false,
            output_spacing: 0,
        }
    }
}

impl StyleConfig {
    /// The space character separating injected symbols: the configured
    /// space style, or a plain space when none is selected.
    pub fn symbol_separator(&self) -> char {
        self.space_style.map_or(' ', SpaceStyle::character)
    }
}

/// Loose numeric value, the shapes the original cookie JSON could hold:
/// a number, or a number in a string (form controls stringify).
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseNumber {
    fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(f) => Some(*f as i64),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn de_frequency<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(value
        .and_then(|n| n.as_i64())
        .map_or(50, |n| n.clamp(0, 100) as u8))
}

fn de_spacing<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(value
        .and_then(|n| n.as_i64())
        .map_or(0, |n| n.max(0) as u32))
}

fn de_optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn de_family<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<FontFamily>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| s.parse().ok()))
}

fn de_space<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SpaceStyle>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| s.parse().ok()))
}

fn de_punctuation<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<PunctuationPair>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| s.parse().ok()))
}
