// this_file: crates/filigree-glyphs/src/symbols.rs

//! The decorative symbol pool.
//!
//! Sixty-four small ornaments, many built from combining marks, sampled by
//! the symbol injector. The pool is canonical and never mutated; sampling
//! works on copies.

/// Decorative symbols available in random mode.
pub const SYMBOL_POOL: &[&str] = &[
    "˚", "𐙚", "𓏲", "ִֶָ𓂃",
    "ᡣ", "𐭩", "۶", "ৎ",
    "࿔", "𝜗", "࣪˖", "་༘࿐",
    "𓆰𓆪", "𓍢ִ໋", "͙֒ ", "࣪ ˖",
    "˙⊹", "⸝⸝ ۫", "︵", "﹏",
    "፧", "‹ ‹ ˊ", "❜ ፧", "ゞ",
    "𐔌⩩", "〲", "𓂃", "─┄",
    "┈", "✱", "♯", "⌇",
    "◟ ݁", "✦‍    *", "冫", " ٫̷ ",
    "彡", "᭧", "..̲ ̲", "៹",
    " ̼", ".͟.", "ᝰ", " ⭇ ",
    "  ݁ ", "𓂅", "❜", "‿",
    "𒂟", "⊰", "ノ", "˖∿",
    "༯", "╭", "'", "˒",
    "◜", "⠀❚⠀", "⧽", "៸",
    "᭤", "°﹒", "' •", "⧼ ",];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_has_the_expected_size() {
        assert_eq!(SYMBOL_POOL.len(), 64);
    }

    #[test]
    fn no_symbol_is_empty() {
        assert!(SYMBOL_POOL.iter().all(|s| !s.is_empty()));
    }
}
