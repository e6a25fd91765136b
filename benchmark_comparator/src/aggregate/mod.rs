//!
//! Reduction of repeated samples to a representative value.
//!


pub mod sample_set;

///
/// The statistical median. An even number of values yields the lower of the two middle ones,
/// so the result is always an observed sample.
///
/// Returns `None` for an empty slice.
///
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(sorted[(sorted.len() - 1) / 2])
}

///
/// The arithmetic mean, `None` for an empty slice.
///
pub fn arithmetic_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / (values.len() as f64))
}

///
/// The geometric mean of positive values, `None` if the slice is empty or has a non-positive value.
///
/// Computed in the logarithmic domain to avoid overflowing on long series.
///
pub fn geometric_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() || values.iter().any(|value| *value <= 0.0) {
        return None;
    }
    let log_sum: f64 = values.iter().map(|value| value.ln()).sum();
    Some((log_sum / (values.len() as f64)).exp())
}
