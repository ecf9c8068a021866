//! Linear min-max normalization onto the 0-100 score scale.
//!
//! Every "higher raw value is better" attribute goes through
//! [`linear_normalize`]; inverse attributes (price, price-per-credit)
//! reflect the input and reuse the same function, so the degenerate-case
//! semantics are identical in both directions.

/// Scale a raw attribute distribution linearly onto [0, 100].
///
/// The minimum input maps to 0 and the maximum to 100. A distribution with
/// no spread (max == min) carries no discriminating information, so every
/// value scores 100 rather than dividing by zero.
///
/// Inputs must already be free of NaN; missing values are imputed upstream.
pub fn linear_normalize(values: &[f64]) -> Vec<f64> {
    let Some((min, max)) = bounds(values) else {
        return Vec::new();
    };
    if max <= min {
        return vec![100.0; values.len()];
    }
    values
        .iter()
        .map(|v| 100.0 * (v - min) / (max - min))
        .collect()
}

/// Inverse scaling: the minimum input maps to 100 and the maximum to 0.
///
/// Implemented by reflecting the input through negation and reusing
/// [`linear_normalize`], so the all-equal case still scores everyone 100.
pub fn linear_normalize_inverse(values: &[f64]) -> Vec<f64> {
    let reflected: Vec<f64> = values.iter().map(|v| -v).collect();
    linear_normalize(&reflected)
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    let (min, max) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    Some((min, max))
}
