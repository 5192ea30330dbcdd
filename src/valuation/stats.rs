// src/valuation/stats.rs
use crate::error::{validation::*, LsmcError, LsmcResult};
use statrs::distribution::{ContinuousCDF, Normal};
use statrs::statistics::Statistics;

/// Standard error of the sample mean (`s / √n`); `None` below two samples.
pub fn standard_error<'a, I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();
    let n = iter.clone().count();
    if n < 2 {
        return None;
    }
    let sd = iter.std_dev();
    sd.is_finite().then(|| sd / (n as f64).sqrt())
}

/// Two-sided normal confidence interval around `mean`.
pub fn confidence_interval(mean: f64, std_err: f64, level: f64) -> LsmcResult<(f64, f64)> {
    validate_range("level", level, 0.0, 1.0)?;
    validate_non_negative("std_err", std_err)?;
    let normal = Normal::new(0.0, 1.0).map_err(|e| LsmcError::NumericalInstability {
        method: "confidence_interval".to_string(),
        reason: e.to_string(),
    })?;
    let z = normal.inverse_cdf(0.5 + 0.5 * level);
    Ok((mean - z * std_err, mean + z * std_err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_error() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        // sample sd = sqrt(2.5)
        let se = standard_error(xs.iter()).unwrap();
        assert!((se - (2.5f64).sqrt() / 5f64.sqrt()).abs() < 1e-12);
        assert!(standard_error([7.0].iter()).is_none());
    }

    #[test]
    fn test_confidence_interval_95() {
        let (lo, hi) = confidence_interval(10.0, 1.0, 0.95).unwrap();
        assert!((hi - 10.0 - 1.959964).abs() < 1e-4);
        assert!((10.0 - lo - 1.959964).abs() < 1e-4);
        assert!(confidence_interval(10.0, 1.0, 1.5).is_err());
    }
}
