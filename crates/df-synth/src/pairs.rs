//! Uniform sampling of ordered pairs `u < v` without replacement.
//!
//! Pairs are ranked row-major: rank 0 is `(0, 1)`, rank `n - 2` is
//! `(0, n - 1)`, rank `n - 1` is `(1, 2)`, and so on. Sampling ranks and
//! unranking them avoids materializing all `C(n, 2)` pairs.

use df_core::pair_count;
use rand::Rng;

/// Number of ranks that precede row `u`.
fn row_offset(n: u64, u: u64) -> u64 {
    u * (2 * n - u - 1) / 2
}

/// Map a rank in `0..C(n, 2)` to its pair `(u, v)` with `u < v`.
pub fn unrank(num_nodes: usize, rank: u64) -> (u32, u32) {
    let n = num_nodes as u64;
    debug_assert!(rank < pair_count(num_nodes));

    // Largest row u with row_offset(u) <= rank.
    let (mut lo, mut hi) = (0u64, n - 2);
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if row_offset(n, mid) <= rank {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    let u = lo;
    let v = u + 1 + (rank - row_offset(n, u));
    (u as u32, v as u32)
}

/// Draw `amount` distinct pairs uniformly from all `C(num_nodes, 2)` pairs.
///
/// Callers guarantee `amount <= C(num_nodes, 2)`.
pub fn sample_pairs<R: Rng + ?Sized>(
    rng: &mut R,
    num_nodes: usize,
    amount: usize,
) -> Vec<(u32, u32)> {
    let total = pair_count(num_nodes) as usize;
    rand::seq::index::sample(rng, total, amount)
        .into_iter()
        .map(|rank| unrank(num_nodes, rank as u64))
        .collect()
}
