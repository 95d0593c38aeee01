// this_file: crates/filigree-core/src/transform/spaces.rs

//! ASCII-space substitution.

use filigree_glyphs::SpaceStyle;

/// Replace every U+0020 with the style's space character.
///
/// Only the plain ASCII space is touched. Tabs, newlines, and the Unicode
/// spaces a style introduces are left alone, which is why symbol injection
/// runs before this stage in the pipeline.
pub fn replace_spaces(text: &str, style: Option<SpaceStyle>) -> String {
    match style {
        Some(style) => text.replace(' ', &style.character().to_string()),
        None => text.to_string(),
    }
}
