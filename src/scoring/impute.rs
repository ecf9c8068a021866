//! Missing-value repair.
//!
//! Numeric columns are repaired with the median of the same attribute
//! across the current load, never a cross-session or hardcoded default.
//! Which repair applies to which column is configuration
//! (`ImputePolicy`), not a hardcoded branch.

/// Median of a slice, ignoring nothing: callers pass only present values.
///
/// Returns `None` for an empty slice. Even-length inputs average the two
/// middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Fill the missing entries of a column with the median of the present
/// ones. Returns the repaired column plus the indices that were filled.
///
/// A column with no present values at all falls back to 0.0 for every
/// entry; the caller decides whether that is worth a warning.
pub fn fill_with_median(column: &[Option<f64>]) -> (Vec<f64>, Vec<usize>) {
    let present: Vec<f64> = column.iter().filter_map(|v| *v).collect();
    let fallback = median(&present).unwrap_or(0.0);
    fill_with(column, fallback)
}

/// Fill the missing entries of a column with zero.
pub fn fill_with_zero(column: &[Option<f64>]) -> (Vec<f64>, Vec<usize>) {
    fill_with(column, 0.0)
}

fn fill_with(column: &[Option<f64>], fill: f64) -> (Vec<f64>, Vec<usize>) {
    let mut repaired_at = Vec::new();
    let values = column
        .iter()
        .enumerate()
        .map(|(i, v)| match v {
            Some(v) => *v,
            None => {
                repaired_at.push(i);
                fill
            }
        })
        .collect();
    (values, repaired_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_length() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn median_of_even_length_averages_middle_pair() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn median_of_empty_is_none() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn fill_with_median_repairs_only_missing_entries() {
        let column = vec![Some(10.0), None, Some(30.0)];
        let (values, repaired) = fill_with_median(&column);
        assert_eq!(values, vec![10.0, 20.0, 30.0]);
        assert_eq!(repaired, vec![1]);
    }

    #[test]
    fn fill_with_median_on_all_missing_falls_back_to_zero() {
        let column = vec![None, None];
        let (values, repaired) = fill_with_median(&column);
        assert_eq!(values, vec![0.0, 0.0]);
        assert_eq!(repaired, vec![0, 1]);
    }

    #[test]
    fn fill_with_zero_never_uses_the_cohort() {
        let column = vec![Some(80.0), None];
        let (values, repaired) = fill_with_zero(&column);
        assert_eq!(values, vec![80.0, 0.0]);
        assert_eq!(repaired, vec![1]);
    }
}
