//! Assorted utilities and helpers.

/// Cut operations needed to produce `pieces` pieces: a rod left whole has
/// zero cuts, and an empty plan has none either.
#[inline]
pub fn number_of_cuts(pieces: usize) -> usize {
    pieces.saturating_sub(1)
}

/// Exhaustive optimum over every ordered partition of `length`.
///
/// Runs in `O(2^length)` and is only meant as a reference for small inputs
/// (tests and the scaling probe's verification step).
///
/// # Panics
/// Panics if `prices` has fewer than `length` entries.
pub fn brute_force_profit(length: usize, prices: &[u64]) -> u64 {
    assert!(
        prices.len() >= length,
        "price table shorter than rod length"
    );
    fn go(remaining: usize, prices: &[u64]) -> u64 {
        (1..=remaining)
            .map(|piece| prices[piece - 1].saturating_add(go(remaining - piece, prices)))
            .max()
            .unwrap_or(0)
    }
    go(length, prices)
}
