// this_file: crates/filigree-core/src/lib.rs

//! Filigree Core: eight stages from plain text to fancy text.
//!
//! Text enters as the characters a user typed and exits as the styled
//! Unicode string they paste into a bio. Every render follows the same
//! fixed journey:
//!
//! 1. **First letter** - the opening character picks up a styled glyph
//! 2. **Uppercase words** - fully-uppercase words are restyled
//! 3. **Commas** - literal commas swap for a decorative string
//! 4. **Punctuation** - `!` and `?` swap for their styled forms
//! 5. **Symbol injection** - decorative symbols land between words
//! 6. **Spaces** - ASCII spaces become a chosen Unicode space
//! 7. **Line wrap** - minimum-raggedness reflow to 35 columns
//! 8. **Vertical padding** - invisible lines frame the result
//!
//! Every stage is a pure, total function: unset options mean identity,
//! unknown characters pass through, and nothing here touches shared
//! state. The only randomness, symbol injection, flows through the
//! [`RandomSource`] trait so callers can seed or stub it.
//!
//! ```rust
//! use filigree_core::{render, StyleConfig};
//! use filigree_glyphs::FontFamily;
//!
//! let config = StyleConfig {
//!     first_letter_font: Some(FontFamily::Cursive),
//!     ..StyleConfig::default()
//! };
//! assert_eq!(render("hello", &config), "𝓱ello");
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod rng;
pub mod transform;

pub use config::{StyleConfig, SymbolMode};
pub use error::{FiligreeError, Result};
pub use pipeline::{render, render_with};
pub use rng::{DefaultRng, RandomSource};
pub use transform::PunctuationPair;
