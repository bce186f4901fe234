//! Small numerically-stable math utilities used across probability code.

use statrs::function::gamma::ln_gamma;

/// Stable `log(sum(exp(xs)))` via the max-shift trick.
///
/// Returns `NEG_INFINITY` for an empty slice or when every entry is `-inf`.
#[inline]
pub fn logsumexp(xs: &[f64]) -> f64 {
    let mut m = f64::NEG_INFINITY;
    for &x in xs {
        if x > m {
            m = x;
        }
    }
    if !m.is_finite() {
        return m;
    }
    let mut s = 0.0;
    for &x in xs {
        s += (x - m).exp();
    }
    m + s.ln()
}

/// Below this length a plain sequential sum is accurate enough and faster.
const PAIRWISE_BASE: usize = 32;

/// Pairwise (tree) summation.
///
/// The reduction order depends only on the slice layout, never on thread
/// count or scheduling, so parallel producers that write into an
/// index-ordered buffer get bit-identical totals on every run. Rounding
/// error grows as O(log n) rather than O(n).
pub fn pairwise_sum(xs: &[f64]) -> f64 {
    if xs.len() <= PAIRWISE_BASE {
        return xs.iter().sum();
    }
    let mid = xs.len() / 2;
    pairwise_sum(&xs[..mid]) + pairwise_sum(&xs[mid..])
}

/// `ln(n choose k)` via log-gamma: `ln Γ(n+1) - ln Γ(k+1) - ln Γ(n-k+1)`.
///
/// Callers must guarantee `k <= n`.
#[inline]
pub fn ln_choose(n: u64, k: u64) -> f64 {
    debug_assert!(k <= n);
    let n1 = (n as f64) + 1.0;
    let k1 = (k as f64) + 1.0;
    let nk1 = ((n - k) as f64) + 1.0;
    ln_gamma(n1) - ln_gamma(k1) - ln_gamma(nk1)
}
