// this_file: crates/filigree-core/src/transform/mod.rs

//! The eight stages of the styling pipeline.
//!
//! Each transform is a stateless function from text (plus its style
//! selector) to text. An unset selector is always the identity transform,
//! and characters outside a glyph table pass through, so every stage is
//! total over all input.

pub mod first_letter;
pub mod punctuation;
pub mod spaces;
pub mod spacing;
pub mod symbols;
pub mod uppercase;
pub mod wrap;

pub use first_letter::replace_first_letter;
pub use punctuation::{replace_commas, replace_punctuation, PunctuationPair};
pub use spaces::replace_spaces;
pub use spacing::apply_spacing;
pub use symbols::add_symbols;
pub use uppercase::replace_uppercase_words;
pub use wrap::{wrap, LINE_BUDGET};
