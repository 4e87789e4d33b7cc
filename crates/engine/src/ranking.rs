//! Top-N / bottom-N selection over keyed metrics.

use std::cmp::Ordering;

/// Selects the `n` entries with the largest metric values, descending.
///
/// The sort is stable, so entries with exactly equal metrics keep their
/// relative input order; for metrics produced by the grouping module that
/// is first-seen order, which makes rankings reproducible run to run. If
/// fewer than `n` entries exist, all of them are returned, sorted. The
/// input is not mutated.
pub fn top_n<K: Clone>(metrics: &[(K, f64)], n: usize) -> Vec<(K, f64)> {
    let mut ranked: Vec<(K, f64)> = metrics.to_vec();
    // Stable sort, NaN-safe via the Ordering::Equal fallback
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

/// Selects the `n` entries with the smallest metric values, ascending.
///
/// Same stability and clamping behavior as [`top_n`].
pub fn bottom_n<K: Clone>(metrics: &[(K, f64)], n: usize) -> Vec<(K, f64)> {
    let mut ranked: Vec<(K, f64)> = metrics.to_vec();
    ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}
