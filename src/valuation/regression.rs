// src/valuation/regression.rs
//! Ordinary least squares with an intercept.
//!
//! Features and target are centred, the centred system is solved by SVD
//! for the minimum-norm solution, and the intercept restores the means:
//! ```text
//! β = argmin ‖(X - x̄)β - (y - ȳ)‖, smallest ‖β‖
//! α = ȳ - x̄·β
//! ```
//! A rank-deficient sample (including a single observation) therefore
//! never fails: slopes that the data cannot identify are zero, and with
//! one observation the fit reproduces that observation's target.

use crate::error::{LsmcError, LsmcResult};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// Relative singular-value cut-off for the centred design matrix.
const RCOND: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    pub intercept: f64,
    pub coefficients: Array1<f64>,
    /// Numerical rank of the centred design matrix
    pub rank: usize,
}

impl LinearRegression {
    /// Fit `target ≈ intercept + features · coefficients`, one row per sample.
    pub fn fit(features: ArrayView2<'_, f64>, target: ArrayView1<'_, f64>) -> LsmcResult<Self> {
        let (n, k) = features.dim();
        if n == 0 {
            return Err(LsmcError::RegressionFailure {
                reason: "empty sample".to_string(),
            });
        }
        if target.len() != n {
            return Err(LsmcError::ShapeMismatch {
                context: "regression target".to_string(),
                expected: (n, 1),
                found: (target.len(), 1),
            });
        }
        if features.iter().chain(target.iter()).any(|v| !v.is_finite()) {
            return Err(LsmcError::RegressionFailure {
                reason: "non-finite value in regression sample".to_string(),
            });
        }

        let x_mean = features.mean_axis(Axis(0)).ok_or_else(|| LsmcError::RegressionFailure {
            reason: "cannot average features".to_string(),
        })?;
        let y_mean = target.sum() / n as f64;

        let x = DMatrix::from_fn(n, k, |i, j| features[[i, j]] - x_mean[j]);
        let y = DVector::from_iterator(n, target.iter().map(|v| v - y_mean));

        let (coefficients, rank) = if x.amax() == 0.0 {
            // features constant across the sample (always so for one sample)
            (Array1::zeros(k), 0)
        } else {
            let svd = x.svd(true, true);
            let max_sv = svd.singular_values.iter().cloned().fold(0.0, f64::max);
            let eps = max_sv * RCOND;
            let rank = svd.singular_values.iter().filter(|&&s| s > eps).count();
            let beta = svd.solve(&y, eps).map_err(|e| LsmcError::RegressionFailure {
                reason: e.to_string(),
            })?;
            (Array1::from_iter(beta.iter().cloned()), rank)
        };
        let intercept = y_mean - x_mean.dot(&coefficients);

        if rank < k {
            log::warn!(
                "regression design is rank deficient (rank {} of {}, {} samples); using minimum-norm fit",
                rank,
                k,
                n
            );
        }

        Ok(LinearRegression {
            intercept,
            coefficients,
            rank,
        })
    }

    pub fn predict(&self, features: ArrayView2<'_, f64>) -> LsmcResult<Array1<f64>> {
        if features.ncols() != self.coefficients.len() {
            return Err(LsmcError::ShapeMismatch {
                context: "regression features".to_string(),
                expected: (features.nrows(), self.coefficients.len()),
                found: features.dim(),
            });
        }
        Ok(features.dot(&self.coefficients) + self.intercept)
    }

    /// Coefficient of determination on the given sample. A constant target
    /// scores 1.0 when reproduced exactly and 0.0 otherwise.
    pub fn r_squared(&self, features: ArrayView2<'_, f64>, target: ArrayView1<'_, f64>) -> LsmcResult<f64> {
        let fitted = self.predict(features)?;
        let y_mean = target.sum() / target.len() as f64;
        let ss_res: f64 = fitted.iter().zip(target.iter()).map(|(f, y)| (y - f).powi(2)).sum();
        let ss_tot: f64 = target.iter().map(|y| (y - y_mean).powi(2)).sum();
        if ss_tot == 0.0 {
            return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
        }
        Ok(1.0 - ss_res / ss_tot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_recovers_exact_plane() {
        let x = array![[1.0, 2.0], [2.0, 1.0], [3.0, 5.0], [4.0, 3.0], [5.0, 8.0]];
        let y = x.map_axis(Axis(1), |row| 3.0 + 2.0 * row[0] - 0.5 * row[1]);

        let fit = LinearRegression::fit(x.view(), y.view()).unwrap();
        assert!((fit.intercept - 3.0).abs() < 1e-9);
        assert!((fit.coefficients[0] - 2.0).abs() < 1e-9);
        assert!((fit.coefficients[1] + 0.5).abs() < 1e-9);
        assert_eq!(fit.rank, 2);
        assert!((fit.r_squared(x.view(), y.view()).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_residuals_average_to_zero() {
        let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [2.0, 0.5], [0.3, 2.0]];
        let y = array![1.0, 4.0, -2.0, 0.5, 3.0];

        let fit = LinearRegression::fit(x.view(), y.view()).unwrap();
        let fitted = fit.predict(x.view()).unwrap();
        let mean_resid = (&y - &fitted).sum() / y.len() as f64;
        assert!(mean_resid.abs() < 1e-12);
        let r2 = fit.r_squared(x.view(), y.view()).unwrap();
        assert!((0.0..=1.0).contains(&r2));
    }

    #[test]
    fn test_single_sample_interpolates() {
        let x = array![[42.0, 17.0]];
        let y = array![123.5];

        let fit = LinearRegression::fit(x.view(), y.view()).unwrap();
        assert_eq!(fit.rank, 0);
        assert_eq!(fit.coefficients, array![0.0, 0.0]);
        assert_eq!(fit.predict(x.view()).unwrap()[0], 123.5);
    }

    #[test]
    fn test_collinear_features() {
        // second column is a copy of the first
        let x = Array2::from_shape_fn((6, 2), |(i, _)| i as f64);
        let y = Array1::from_shape_fn(6, |i| 1.0 + 4.0 * i as f64);

        let fit = LinearRegression::fit(x.view(), y.view()).unwrap();
        assert_eq!(fit.rank, 1);
        // minimum norm splits the slope evenly
        assert!((fit.coefficients[0] - 2.0).abs() < 1e-9);
        assert!((fit.coefficients[1] - 2.0).abs() < 1e-9);
        assert!((fit.intercept - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_samples() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        assert!(LinearRegression::fit(x.view(), array![1.0].view()).is_err());
        assert!(LinearRegression::fit(x.view(), array![1.0, f64::NAN].view()).is_err());
        let empty = Array2::<f64>::zeros((0, 2));
        assert!(LinearRegression::fit(empty.view(), Array1::<f64>::zeros(0).view()).is_err());
    }
}
