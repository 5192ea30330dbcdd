// src/valuation/discount.rs
use crate::error::{validation::*, LsmcResult};
use ndarray::Array1;

/// End-of-period discount factors: entry `i` is `(1 + r)^-(i + 1)`.
pub fn discount_factors(rate: f64, horizon: usize) -> LsmcResult<Array1<f64>> {
    validate_discount_rate("rate", rate)?;
    Ok(Array1::from_shape_fn(horizon, |i| {
        (1.0 + rate).powi(-(i as i32 + 1))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_period_factors() {
        let df = discount_factors(0.05, 10).unwrap();
        assert_eq!(df.len(), 10);
        assert!((df[0] - 1.0 / 1.05).abs() < 1e-15);
        assert!((df[9] - 1.05f64.powi(-10)).abs() < 1e-15);
        for i in 1..df.len() {
            assert!(df[i] < df[i - 1]);
        }
    }

    #[test]
    fn test_zero_rate() {
        let df = discount_factors(0.0, 4).unwrap();
        assert!(df.iter().all(|&d| d == 1.0));
    }

    #[test]
    fn test_invalid_rate() {
        assert!(discount_factors(f64::NAN, 4).is_err());
        assert!(discount_factors(-1.0, 4).is_err());
    }
}
