/// Pair enumeration for a round-robin ranking session.
///
/// Public functions accept `item_ids: &[i64]` and return `Pair` (i64, i64).
/// Internal functions use `usize` indices for efficient array indexing.
use crate::types::{IndexedPair, Pair};

/// Number of unordered pairs over `n` items: n·(n−1)/2.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Enumerate every unordered pair of `item_ids` exactly once.
///
/// Canonical nested iteration — outer index ascending, inner index always
/// greater than outer — so the output is reproducible from the input order
/// alone. This order is the presentation order. Zero or one item yields an
/// empty vector; the presenter is expected to render "nothing to rank".
pub fn enumerate_pairs(item_ids: &[i64]) -> Vec<Pair> {
    enumerate_pairs_indexed(item_ids.len())
        .into_iter()
        .map(|(i, j)| (item_ids[i], item_ids[j]))
        .collect()
}

pub(crate) fn enumerate_pairs_indexed(num_items: usize) -> Vec<IndexedPair> {
    let mut pairs = Vec::with_capacity(pair_count(num_items));
    for i in 0..num_items {
        for j in (i + 1)..num_items {
            pairs.push((i, j));
        }
    }
    pairs
}
