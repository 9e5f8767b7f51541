//! Baseline extension via compound monthly growth
//!
//! Historical baselines are usually shorter than the projection horizon.
//! Missing months are extrapolated by compounding a monthly growth rate from
//! the last known value.

use crate::error::ModelError;

/// Extend `baseline` to `target_len` months.
///
/// Indices inside the baseline are returned unchanged; beyond it, month `i`
/// becomes `baseline[last] * (1 + monthly_growth)^(i - last)`. An empty
/// baseline has no anchor to grow from and is rejected.
pub fn extend(
    baseline: &[f64],
    target_len: usize,
    monthly_growth: f64,
) -> Result<Vec<f64>, ModelError> {
    if baseline.is_empty() {
        return Err(ModelError::invalid("cannot extend an empty baseline"));
    }
    if !monthly_growth.is_finite() || monthly_growth < 0.0 {
        return Err(ModelError::invalid(format!(
            "monthly_growth must be >= 0, got {}",
            monthly_growth
        )));
    }

    let last = baseline.len() - 1;
    let anchor = baseline[last];
    let mut extended = Vec::with_capacity(target_len);
    for i in 0..target_len {
        if i < baseline.len() {
            extended.push(baseline[i]);
        } else {
            extended.push(anchor * (1.0 + monthly_growth).powi((i - last) as i32));
        }
    }
    Ok(extended)
}
