//! Linear trajectory generation
//!
//! Builds per-month churn and organic-share curves by linearly interpolating
//! between a start and an end value across the horizon.

use crate::error::ModelError;

/// Linearly spaced values from `start` to `end` inclusive.
///
/// `count == 1` returns `[start]`; `count == 0` is an error.
pub fn interpolate(start: f64, end: f64, count: usize) -> Result<Vec<f64>, ModelError> {
    if count < 1 {
        return Err(ModelError::invalid("interpolation count must be at least 1"));
    }
    if count == 1 {
        return Ok(vec![start]);
    }

    let step = (end - start) / (count - 1) as f64;
    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        values.push(start + step * i as f64);
    }
    // Pin the endpoint so it is exact regardless of step rounding
    values[count - 1] = end;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_curve() {
        let curve = interpolate(0.25, 0.25, 24).unwrap();
        assert_eq!(curve.len(), 24);
        assert!(curve.iter().all(|&v| v == 0.25));
    }

    #[test]
    fn test_endpoints_exact() {
        let curve = interpolate(0.25, 0.05, 24).unwrap();
        assert_eq!(curve[0], 0.25);
        assert_eq!(curve[23], 0.05);
    }

    #[test]
    fn test_midpoint() {
        let curve = interpolate(0.0, 1.0, 5).unwrap();
        assert_relative_eq!(curve[2], 0.5);
    }

    #[test]
    fn test_single_point_returns_start() {
        assert_eq!(interpolate(0.3, 0.9, 1).unwrap(), vec![0.3]);
    }

    #[test]
    fn test_zero_count_fails() {
        assert!(matches!(
            interpolate(0.0, 1.0, 0),
            Err(ModelError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_descending_curve_monotonic() {
        let curve = interpolate(0.25, 0.05, 24).unwrap();
        for w in curve.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }
}
