// src/mc/paths.rs
//! Path Simulator
//!
//! Produces the joint price/opex state over the project horizon as two
//! `sims × horizon` matrices. Column 0 holds the initial levels; column `t`
//! is generated from column `t - 1` and fresh standard normal shocks.
//!
//! # Draw Order
//!
//! All shocks come from one generator, period-major:
//! ```text
//! for t in 1..horizon:
//!     Z_price[0..sims]   (one per simulation)
//!     Z_opex[0..sims]    (one per simulation)
//! ```
//! Reproducing a run requires the same seed and this exact order.

use crate::error::{validation::*, LsmcError, LsmcResult};
use crate::models::gbm::Gbm;
use crate::models::model::StateProcess;
use crate::models::ou_process::LogOuProcess;
use crate::rng;
use ndarray::{Array1, Array2, ArrayView1, Axis, Zip};
use rand::Rng;

/// Simulated price and operating-cost trajectories
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPaths {
    pub price: Array2<f64>,
    pub opex: Array2<f64>,
}

impl SimulatedPaths {
    pub fn horizon(&self) -> usize {
        self.price.ncols()
    }

    /// Price and opex observed across all simulations at `period`.
    pub fn state_at(&self, period: usize) -> LsmcResult<(ArrayView1<'_, f64>, ArrayView1<'_, f64>)> {
        if period >= self.horizon() {
            return Err(LsmcError::InvalidConfiguration {
                field: "period".to_string(),
                reason: format!("{} is outside horizon of {} periods", period, self.horizon()),
            });
        }
        Ok((self.price.column(period), self.opex.column(period)))
    }

    /// Both matrices must share one shape.
    pub fn check_shape(&self) -> LsmcResult<()> {
        if self.price.dim() != self.opex.dim() {
            return Err(LsmcError::ShapeMismatch {
                context: "opex paths".to_string(),
                expected: self.price.dim(),
                found: self.opex.dim(),
            });
        }
        Ok(())
    }
}

/// Advance every simulation of one process by one period.
fn step_column<M: StateProcess>(
    model: &M,
    prev: ArrayView1<'_, f64>,
    dt: f64,
    shocks: &Array1<f64>,
) -> Array1<f64> {
    Zip::from(prev)
        .and(shocks)
        .map_collect(|&x, &z| model.step(x, dt, z))
}

/// Simulate `sims` joint price/opex paths of `horizon` periods.
///
/// # Errors
///
/// Returns `LsmcError` for an empty sample, an empty horizon, or a
/// non-positive period length.
pub fn simulate_paths<R: Rng + ?Sized>(
    sims: usize,
    horizon: usize,
    dt: f64,
    price_model: &Gbm,
    opex_model: &LogOuProcess,
    rng: &mut R,
) -> LsmcResult<SimulatedPaths> {
    validate_paths(sims)?;
    validate_steps(horizon)?;
    validate_positive("period_length", dt)?;

    let mut price = Array2::<f64>::zeros((sims, horizon));
    let mut opex = Array2::<f64>::zeros((sims, horizon));
    price.column_mut(0).fill(price_model.initial());
    opex.column_mut(0).fill(opex_model.initial());

    for t in 1..horizon {
        let z_price = rng::normal_block(rng, sims);
        let next_price = step_column(price_model, price.column(t - 1), dt, &z_price);
        price.column_mut(t).assign(&next_price);

        let z_opex = rng::normal_block(rng, sims);
        let next_opex = step_column(opex_model, opex.column(t - 1), dt, &z_opex);
        opex.column_mut(t).assign(&next_opex);
    }

    log::debug!(
        "simulated {}x{} paths: terminal mean price {:.4}, terminal mean opex {:.4}",
        sims,
        horizon,
        price.column(horizon - 1).sum() / sims as f64,
        opex.column(horizon - 1).sum() / sims as f64,
    );

    Ok(SimulatedPaths { price, opex })
}

/// Per-period cross-sectional means, one entry per column.
pub fn period_means(matrix: &Array2<f64>) -> LsmcResult<Array1<f64>> {
    matrix
        .mean_axis(Axis(0))
        .ok_or_else(|| LsmcError::NumericalInstability {
            method: "period_means".to_string(),
            reason: "no simulations to average".to_string(),
        })
}
