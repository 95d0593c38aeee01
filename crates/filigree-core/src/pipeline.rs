// this_file: crates/filigree-core/src/pipeline.rs

//! The engine that drives text through eight styling stages.
//!
//! The order is fixed and load-bearing: symbol injection runs before space
//! substitution so injected separators pick up the resolved space style,
//! wrapping runs after space substitution so it can detect the in-use
//! whitespace character, and vertical padding comes last so neither the
//! wrapper nor the injector ever sees it.

use crate::config::StyleConfig;
use crate::rng::{DefaultRng, RandomSource};
use crate::transform;

/// Run the full pipeline with the default random source.
pub fn render(text: &str, config: &StyleConfig) -> String {
    render_with(text, config, &mut DefaultRng::new())
}

/// Run the full pipeline with an injected random source.
///
/// Empty input short-circuits to empty output without touching any stage.
/// Every other input flows through, in order: first-letter, uppercase-word,
/// comma, punctuation, symbol injection, space substitution, line wrap,
/// vertical padding. Each stage is a total function, so rendering cannot
/// fail.
pub fn render_with(text: &str, config: &StyleConfig, rng: &mut dyn RandomSource) -> String {
    if text.is_empty() {
        return String::new();
    }

    log::debug!("stage: first-letter");
    let text = transform::replace_first_letter(text, config.first_letter_font);
    log::debug!("stage: uppercase-word");
    let text = transform::replace_uppercase_words(&text, config.uppercase_word_style);
    log::debug!("stage: comma");
    let text = transform::replace_commas(&text, config.comma_style.as_deref());
    log::debug!("stage: punctuation");
    let text = transform::replace_punctuation(&text, config.punctuation_style.as_ref());
    log::debug!("stage: symbol-injection");
    let text = transform::add_symbols(&text, config, rng);
    log::debug!("stage: space");
    let text = transform::replace_spaces(&text, config.space_style);
    log::debug!("stage: line-wrap");
    let text = transform::wrap(&text, config.text_alignment_enabled);
    log::debug!("stage: vertical-padding");
    transform::apply_spacing(&text, config.output_spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SymbolMode;
    use crate::rng::testing::ScriptedRng;
    use filigree_glyphs::{FontFamily, SpaceStyle};

    #[test]
    fn all_options_off_is_identity() {
        let config = StyleConfig::default();
        for text in ["", "hello", "HELLO, world!?", "a\nb\nc", "  spaced  "] {
            assert_eq!(render(text, &config), text);
        }
    }

    #[test]
    fn empty_input_short_circuits() {
        let config = StyleConfig {
            first_letter_font: Some(FontFamily::Cursive),
            output_spacing: 3,
            ..StyleConfig::default()
        };
        assert_eq!(render("", &config), "");
    }

    #[test]
    fn stages_compose_in_order() {
        let config = StyleConfig {
            first_letter_font: Some(FontFamily::Cursive),
            uppercase_word_style: Some(FontFamily::Bold),
            comma_style: Some("⸒".to_string()),
            punctuation_style: Some(transform::PunctuationPair::new("❕", "❔")),
            space_style: Some(SpaceStyle::ThinSpace),
            ..StyleConfig::default()
        };
        let out = render("hey THERE, you!", &config);
        assert_eq!(out, "𝓱ey\u{2009}𝗧𝗛𝗘𝗥𝗘⸒\u{2009}you❕");
    }

    #[test]
    fn injected_separators_match_the_space_style() {
        // Injection precedes space substitution, so both the injected
        // separators and the ordinary gaps come out styled.
        let config = StyleConfig {
            symbol_mode: SymbolMode::Custom,
            custom_symbols: "✿".to_string(),
            symbol_frequency: 100,
            space_style: Some(SpaceStyle::HairSpace),
            ..StyleConfig::default()
        };
        let mut rng = ScriptedRng::zeros();
        let out = render_with("a b", &config, &mut rng);
        assert_eq!(out, "a\u{200A}✿\u{200A}b\u{200A}✿");
        assert!(!out.contains(' '));
    }

    #[test]
    fn padding_is_applied_last() {
        let config = StyleConfig {
            text_alignment_enabled: true,
            output_spacing: 1,
            ..StyleConfig::default()
        };
        let out = render("hello world", &config);
        assert_eq!(out, "\u{1160}\nhello world\n\u{1160}");
    }

    #[test]
    fn wrap_sees_substituted_spaces() {
        let config = StyleConfig {
            space_style: Some(SpaceStyle::ThinSpace),
            text_alignment_enabled: true,
            ..StyleConfig::default()
        };
        let out = render("aaaa bbbb cccc dddd eeee ffff gggg hhhh", &config);
        assert_eq!(
            out,
            "aaaa\u{2009}bbbb\u{2009}cccc\u{2009}dddd\neeee\u{2009}ffff\u{2009}gggg\u{2009}hhhh"
        );
    }

    #[test]
    fn seeded_renders_are_reproducible() {
        let config = StyleConfig {
            symbol_mode: SymbolMode::Random,
            symbol_frequency: 100,
            ..StyleConfig::default()
        };
        let mut a = crate::rng::DefaultRng::seeded(9);
        let mut b = crate::rng::DefaultRng::seeded(9);
        let text = "decorate all of these words please";
        assert_eq!(
            render_with(text, &config, &mut a),
            render_with(text, &config, &mut b)
        );
    }
}
