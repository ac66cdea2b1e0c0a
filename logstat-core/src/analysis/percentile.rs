/// Interpolated percentile over samples already sorted ascending.
///
/// The target rank is `k = (n - 1) * pct / 100`. When `k` lands on an index
/// that sample is returned as-is; otherwise the result is linearly
/// interpolated between the two bracketing order statistics. `pct` is clamped
/// to `0..=100`. Returns `None` for an empty slice.
pub fn percentile(sorted: &[f64], pct: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let k = (sorted.len() - 1) as f64 * (pct.clamp(0.0, 100.0) / 100.0);
    let f = k.floor();
    let c = k.ceil();

    if f == c {
        return Some(sorted[k as usize]);
    }

    Some(sorted[f as usize] * (c - k) + sorted[c as usize] * (k - f))
}

/// Rounds to two decimal places, ties to even.
///
/// Values too large to scale by 100 are returned unchanged; at that magnitude
/// there are no fractional digits left to round.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / 100.0
}
