// this_file: crates/filigree-core/src/transform/wrap.rs

//! Minimum-raggedness line wrapping.
//!
//! Reflows each hard line of the input to a fixed column budget by solving
//! the classic dynamic program over break points: a candidate line's cost
//! is the square of its unused width, infeasible lines are excluded, and
//! the break sequence minimizing total cost wins. Squared slack spreads
//! words evenly across lines instead of the greedy wrap's long-then-short
//! stair-step.
//!
//! Width is measured in Unicode scalar values, so styled astral glyphs
//! count the same as the plain letters they replaced. Display width of the
//! thinner space styles is not modeled; the budget is a column count, not
//! a pixel measure.

/// Target column width, sized for social-media display.
pub const LINE_BUDGET: usize = 35;

/// Reflow `text` to the column budget, or return it unchanged when
/// wrapping is disabled.
///
/// Existing `\n` breaks are hard boundaries: every input line is wrapped
/// independently and lines are never merged. Within a line, words are
/// separated by runs of whitespace; the first whitespace character seen in
/// the line becomes the rejoining separator, which is uniform because the
/// space-substitution stage has already run.
pub fn wrap(text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    text.split('\n')
        .map(wrap_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str) -> String {
    let sep = line
        .chars()
        .find(|ch| ch.is_whitespace())
        .unwrap_or(' ')
        .to_string();
    let words: Vec<&str> = line
        .split(char::is_whitespace)
        .filter(|word| !word.is_empty())
        .collect();

    if words.len() <= 1 {
        return words.concat();
    }

    let widths: Vec<usize> = words.iter().map(|word| word.chars().count()).collect();
    let total: usize = widths.iter().sum::<usize>() + words.len() - 1;
    if total <= LINE_BUDGET {
        return words.join(&sep);
    }

    let breaks = optimal_breaks(&widths);
    let mut lines = Vec::with_capacity(breaks.len());
    for pair in breaks.windows(2) {
        lines.push(words[pair[0]..pair[1]].join(&sep));
    }
    lines.join("\n")
}

/// Break positions `0 = b0 < b1 < .. = n` minimizing total squared slack.
///
/// `dp[k]` is the cheapest cost of breaking the first `k` words into
/// lines; `prev[k]` records the start of the line that achieves it. The
/// scan over candidate line starts runs right to left and stops at the
/// first infeasible segment, since widening the segment further only keeps
/// it infeasible. A single word wider than the budget is still allowed as
/// its own line, with saturated (zero) slack, so the routine is total.
fn optimal_breaks(widths: &[usize]) -> Vec<usize> {
    let n = widths.len();
    let mut dp = vec![u64::MAX; n + 1];
    let mut prev = vec![0usize; n + 1];
    dp[0] = 0;

    for k in 1..=n {
        let mut width = 0usize;
        for i in (0..k).rev() {
            width = if i == k - 1 {
                widths[i]
            } else {
                width + 1 + widths[i]
            };
            let over_budget = width > LINE_BUDGET;
            if over_budget && i < k - 1 {
                break;
            }
            let slack = (LINE_BUDGET.saturating_sub(width)) as u64;
            let cost = dp[i].saturating_add(slack * slack);
            if cost < dp[k] {
                dp[k] = cost;
                prev[k] = i;
            }
            if over_budget {
                break;
            }
        }
    }

    let mut breaks = vec![n];
    let mut at = n;
    while at > 0 {
        at = prev[at];
        breaks.push(at);
    }
    breaks.reverse();
    breaks
}
