// this_file: crates/filigree-cli/src/cli.rs

//! CLI argument definitions using Clap v4.
//!
//! Every form control of the original generator has a flag here, and the
//! profile dropdown becomes the `profile` subcommand family.

use clap::{Parser, Subcommand, ValueEnum};
use filigree_core::{PunctuationPair, SymbolMode};
use filigree_glyphs::{FontFamily, SpaceStyle};
use std::path::PathBuf;

/// Filigree - fancy Unicode text from the command line
#[derive(Parser, Debug)]
#[command(name = "filigree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform text with the configured styles
    #[command(alias = "r")]
    Render(Box<RenderArgs>),

    /// Manage saved style profiles
    #[command(alias = "p")]
    Profile(ProfileArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Input text (reads from stdin if omitted)
    pub text: Option<String>,

    /// Read input text from file
    #[arg(short = 'T', long = "text-file", conflicts_with = "text")]
    pub text_file: Option<PathBuf>,

    /// Start from a saved profile; flags below override its settings
    #[arg(short = 'p', long = "profile")]
    pub profile: Option<String>,

    /// Profile store file (default: $FILIGREE_PROFILES or
    /// ~/.config/filigree/profiles.json)
    #[arg(long = "store")]
    pub store: Option<PathBuf>,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Seed for symbol injection, for reproducible output
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,
}

/// Style flags shared by `render` and `profile save`.
///
/// Each flag is optional so a saved profile's settings show through
/// wherever the command line stays silent.
#[derive(Parser, Debug, Default)]
pub struct StyleArgs {
    /// Styled font for the first letter: cursive, gothic, bold, italic,
    /// bold-italic, serif-bold, serif-bold-italic, cryptic-italic
    #[arg(long = "first-letter-font")]
    pub first_letter_font: Option<FontFamily>,

    /// Styled font for fully-uppercase words (same names)
    #[arg(long = "uppercase-word-style")]
    pub uppercase_word_style: Option<FontFamily>,

    /// Replacement string for commas (empty clears it)
    #[arg(long = "comma-style")]
    pub comma_style: Option<String>,

    /// Replacements for ! and ? as "exclamation,question"
    #[arg(long = "punctuation-style")]
    pub punctuation_style: Option<PunctuationPair>,

    /// Unicode space replacing ASCII spaces: thin-space, hair-space,
    /// figure-space, punctuation-space, em-quad, en-quad
    #[arg(long = "space-style")]
    pub space_style: Option<SpaceStyle>,

    /// Symbol injection mode
    #[arg(long = "symbol-mode")]
    pub symbol_mode: Option<SymbolModeArg>,

    /// Per-word symbol insertion chance, percent (clamped to 0-100)
    #[arg(long = "symbol-frequency")]
    pub symbol_frequency: Option<i64>,

    /// Draw each symbol at most once per run (shuffle-bag sampling)
    #[arg(long = "no-repeat-symbols")]
    pub no_repeat_symbols: bool,

    /// Characters to inject (implies --symbol-mode custom)
    #[arg(long = "custom-symbols")]
    pub custom_symbols: Option<String>,

    /// Reflow lines to the 35-column budget
    #[arg(long = "align")]
    pub align: bool,

    /// Invisible padding line-pairs above and below the output
    #[arg(long = "spacing")]
    pub spacing: Option<i64>,
}

/// Arguments for the profile command
#[derive(Parser, Debug)]
pub struct ProfileArgs {
    /// Profile store file (default: $FILIGREE_PROFILES or
    /// ~/.config/filigree/profiles.json)
    #[arg(long = "store", global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Save the given style flags under a profile name
    Save {
        /// Profile name
        name: String,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// List saved profile names
    #[command(alias = "ls")]
    List,

    /// Print a profile's settings as JSON
    Show {
        /// Profile name
        name: String,
    },

    /// Delete a profile
    #[command(alias = "rm")]
    Delete {
        /// Profile name
        name: String,
    },

    /// Write one profile, or all of them, as a JSON file
    Export {
        /// Profile name (all profiles if omitted)
        name: Option<String>,

        /// Output file path (stdout if omitted)
        #[arg(short = 'o', long = "output-file")]
        output_file: Option<PathBuf>,
    },

    /// Merge profiles from a JSON file into the store
    Import {
        /// JSON file to read
        path: PathBuf,
    },
}

/// Symbol injection mode as a command-line value
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SymbolModeArg {
    /// No injection
    None,
    /// Draw from the built-in symbol pool
    Random,
    /// Draw from the --custom-symbols characters
    Custom,
}

impl From<SymbolModeArg> for SymbolMode {
    fn from(mode: SymbolModeArg) -> Self {
        match mode {
            SymbolModeArg::None => Self::None,
            SymbolModeArg::Random => Self::Random,
            SymbolModeArg::Custom => Self::Custom,
        }
    }
}

impl StyleArgs {
    /// Overlay these flags on a base configuration. Unset flags leave the
    /// base value alone; `--custom-symbols` without an explicit mode
    /// switches injection to custom.
    pub fn apply_to(&self, base: &mut filigree_core::StyleConfig) {
        if let Some(family) = self.first_letter_font {
            base.first_letter_font = Some(family);
        }
        if let Some(family) = self.uppercase_word_style {
            base.uppercase_word_style = Some(family);
        }
        if let Some(ref style) = self.comma_style {
            base.comma_style = Some(style.clone()).filter(|s| !s.is_empty());
        }
        if let Some(ref pair) = self.punctuation_style {
            base.punctuation_style = Some(pair.clone());
        }
        if let Some(style) = self.space_style {
            base.space_style = Some(style);
        }
        if let Some(mode) = self.symbol_mode {
            base.symbol_mode = mode.into();
        }
        if let Some(frequency) = self.symbol_frequency {
            base.symbol_frequency = frequency.clamp(0, 100) as u8;
        }
        if self.no_repeat_symbols {
            base.allow_repeat_symbols = false;
        }
        if let Some(ref symbols) = self.custom_symbols {
            base.custom_symbols = symbols.clone();
            if self.symbol_mode.is_none() {
                base.symbol_mode = SymbolMode::Custom;
            }
        }
        if self.align {
            base.text_alignment_enabled = true;
        }
        if let Some(spacing) = self.spacing {
            base.output_spacing = spacing.max(0) as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filigree_core::StyleConfig;

    #[test]
    fn unset_flags_keep_the_base_config() {
        let mut config = StyleConfig {
            first_letter_font: Some(FontFamily::Gothic),
            symbol_frequency: 80,
            ..StyleConfig::default()
        };
        StyleArgs::default().apply_to(&mut config);
        assert_eq!(config.first_letter_font, Some(FontFamily::Gothic));
        assert_eq!(config.symbol_frequency, 80);
    }

    #[test]
    fn flags_override_the_base_config() {
        let mut config = StyleConfig {
            first_letter_font: Some(FontFamily::Gothic),
            ..StyleConfig::default()
        };
        let style = StyleArgs {
            first_letter_font: Some(FontFamily::Cursive),
            symbol_frequency: Some(250),
            spacing: Some(-4),
            no_repeat_symbols: true,
            ..StyleArgs::default()
        };
        style.apply_to(&mut config);
        assert_eq!(config.first_letter_font, Some(FontFamily::Cursive));
        assert_eq!(config.symbol_frequency, 100);
        assert_eq!(config.output_spacing, 0);
        assert!(!config.allow_repeat_symbols);
    }

    #[test]
    fn custom_symbols_imply_custom_mode() {
        let mut config = StyleConfig::default();
        let style = StyleArgs {
            custom_symbols: Some("✿☆".to_string()),
            ..StyleArgs::default()
        };
        style.apply_to(&mut config);
        assert_eq!(config.symbol_mode, SymbolMode::Custom);
        assert_eq!(config.custom_symbols, "✿☆");
    }

    #[test]
    fn empty_comma_style_clears_a_profile_value() {
        let mut config = StyleConfig {
            comma_style: Some("⸒".to_string()),
            ..StyleConfig::default()
        };
        let style = StyleArgs {
            comma_style: Some(String::new()),
            ..StyleArgs::default()
        };
        style.apply_to(&mut config);
        assert_eq!(config.comma_style, None);
    }

    #[test]
    fn cli_parses_a_full_render_invocation() {
        let cli = Cli::try_parse_from([
            "filigree",
            "render",
            "hello world",
            "--first-letter-font",
            "cursive",
            "--space-style",
            "thin-space",
            "--symbol-mode",
            "random",
            "--symbol-frequency",
            "75",
            "--seed",
            "42",
        ])
        .unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.text.as_deref(), Some("hello world"));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.style.first_letter_font, Some(FontFamily::Cursive));
        assert_eq!(args.style.space_style, Some(SpaceStyle::ThinSpace));
        assert_eq!(args.style.symbol_frequency, Some(75));
    }
}
