//! Order statistics over trap counts.
//!
//! Note: `percentile` sorts the input slice in place.

pub fn sort_f64(values: &mut [f64]) {
    values.sort_unstable_by(f64::total_cmp);
}

/// Percentile of an ascending slice, interpolating linearly between the two
/// order statistics around position `(n - 1) * p`. `p` is clamped to [0, 1].
pub fn percentile_sorted(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let p = p.clamp(0.0, 1.0);
    let pos = (values.len() - 1) as f64 * p;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    values[lower] + (values[upper] - values[lower]) * frac
}

pub fn percentile(values: &mut [f64], p: f64) -> f64 {
    sort_f64(values);
    percentile_sorted(values, p)
}
