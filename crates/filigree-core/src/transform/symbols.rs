// this_file: crates/filigree-core/src/transform/symbols.rs

//! Probabilistic decoration of words with symbols.

use crate::config::{StyleConfig, SymbolMode};
use crate::rng::RandomSource;
use filigree_glyphs::SYMBOL_POOL;

/// Insert decorative symbols between the words of `text`.
///
/// Words are runs of non-space characters split on runs of ASCII spaces;
/// other whitespace (newlines, tabs) stays embedded in its word, so hard
/// line breaks survive injection. Each word independently receives a
/// symbol with probability `symbol_frequency`/100, inserted after the word
/// and wrapped in the configured space character. The final word never
/// carries a trailing separator.
///
/// With repeats allowed every draw is uniform over the whole pool; without
/// them draws come from a shuffle bag that refills only once every symbol
/// has been used.
pub fn add_symbols(text: &str, config: &StyleConfig, rng: &mut dyn RandomSource) -> String {
    let pool: Vec<String> = match config.symbol_mode {
        SymbolMode::None => return text.to_string(),
        SymbolMode::Random => SYMBOL_POOL.iter().map(|s| (*s).to_string()).collect(),
        SymbolMode::Custom => config
            .custom_symbols
            .chars()
            .map(String::from)
            .collect(),
    };
    if pool.is_empty() {
        return text.to_string();
    }

    let words: Vec<&str> = text.split(' ').filter(|word| !word.is_empty()).collect();
    if words.is_empty() {
        return text.to_string();
    }

    let chance = f64::from(config.symbol_frequency) / 100.0;
    let sep = config.symbol_separator();
    let mut bag = ShuffleBag::new(pool.len());
    let mut out = String::with_capacity(text.len() * 2);

    for (index, word) in words.iter().enumerate() {
        out.push_str(word);
        if rng.next_f64() < chance {
            let symbol = if config.allow_repeat_symbols {
                &pool[rng.pick(pool.len())]
            } else {
                &pool[bag.draw(rng)]
            };
            out.push(sep);
            out.push_str(symbol);
        }
        if index < words.len() - 1 {
            out.push(sep);
        }
    }
    out
}

/// Without-replacement sampling over pool indices, refilled on exhaustion.
struct ShuffleBag {
    pool_len: usize,
    remaining: Vec<usize>,
}

impl ShuffleBag {
    fn new(pool_len: usize) -> Self {
        Self {
            pool_len,
            remaining: (0..pool_len).collect(),
        }
    }

    fn draw(&mut self, rng: &mut dyn RandomSource) -> usize {
        if self.remaining.is_empty() {
            self.remaining = (0..self.pool_len).collect();
        }
        let slot = rng.pick(self.remaining.len());
        self.remaining.swap_remove(slot)
    }
}
