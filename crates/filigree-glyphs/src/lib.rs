// this_file: crates/filigree-glyphs/src/lib.rs

//! Glyph data for the Filigree styling pipeline.
//!
//! Three kinds of constants live here, all read-only:
//!
//! - [`FontFamily`] - per-family mappings from plain ASCII letters to their
//!   styled Unicode replacements
//! - [`SpaceStyle`] - named replacement characters for the ASCII space
//! - [`SYMBOL_POOL`] - the decorative symbols sampled during injection
//!
//! Every table is a partial function: characters it does not know pass
//! through unchanged.

pub mod families;
pub mod spaces;
pub mod symbols;

pub use families::FontFamily;
pub use spaces::SpaceStyle;
pub use symbols::SYMBOL_POOL;
