/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to the nearest integer, ties to even: 62.5 becomes 62, 87.5 becomes 88.
///
/// Every percentage shown to a user goes through here.
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}
