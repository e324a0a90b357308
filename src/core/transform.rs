use crate::utils::error::{PrepError, Result};

/// Keeps every strictly positive value and doubles it, in input order.
/// Non-positive values are dropped, not zeroed. Doubling is checked;
/// an overflowing value fails the whole run instead of being skipped.
pub fn double_positives(values: &[i64]) -> Result<Vec<i64>> {
    values
        .iter()
        .filter(|&&x| x > 0)
        .map(|&x| {
            x.checked_mul(2).ok_or_else(|| PrepError::ProcessingError {
                message: format!("doubling {} overflows i64", x),
            })
        })
        .collect()
}
