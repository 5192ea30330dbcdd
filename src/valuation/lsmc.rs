// src/valuation/lsmc.rs
use super::discount::discount_factors;
use super::regression::LinearRegression;
use super::stats::standard_error;
use crate::cashflow::CashFlowSeries;
use crate::error::{validation::*, LsmcError, LsmcResult};
use crate::mc::paths::SimulatedPaths;
use crate::mc::payoffs::Payoff;
use ndarray::{s, stack, Array1, Axis};

/// Outcome of the sale-option valuation
#[derive(Debug, Clone, PartialEq)]
pub struct RealOptionValuation {
    pub enpv_without_option: f64,
    pub enpv_with_option: f64,
    pub option_value: f64,
    /// Share of simulations whose estimated continuation value is below the buyout
    pub exercise_fraction: f64,
    pub regression: LinearRegression,
    pub regression_r_squared: f64,
    /// Standard error of the per-simulation NPV (`None` with one simulation)
    pub npv_standard_error: Option<f64>,
}

fn mean(values: &Array1<f64>, what: &str) -> LsmcResult<f64> {
    let m = values.mean().ok_or_else(|| LsmcError::NumericalInstability {
        method: "lsmc".to_string(),
        reason: format!("no simulations to average for {}", what),
    })?;
    if !m.is_finite() {
        return Err(LsmcError::NumericalInstability {
            method: "lsmc".to_string(),
            reason: format!("{} mean is not finite", what),
        });
    }
    Ok(m)
}

/// Value the right to sell the project for `buyout` at `decision_period`.
///
/// # Algorithm
///
/// 1. Discount each period's after-tax cash flow to time zero.
/// 2. Continuation value per simulation: discounted cash flows from the
///    decision period onwards (inclusive).
/// 3. Regress continuation value on price and opex at the decision period.
/// 4. Per simulation take `max(predicted continuation, buyout)`.
/// 5. ENPV with option = mean(pre-decision PV) + mean(floored value) − CAPEX;
///    ENPV without = mean(full NPV) − CAPEX.
///
/// The buyout is compared against the model's predicted value as-is; it is
/// not discounted and realised continuation cash flows are not substituted.
pub fn value_sale_option(
    cash_flows: &CashFlowSeries,
    paths: &SimulatedPaths,
    rate: f64,
    decision_period: usize,
    buyout: f64,
    capex: f64,
) -> LsmcResult<RealOptionValuation> {
    validate_finite("buyout", buyout)?;
    validate_finite("capex", capex)?;

    let (sims, horizon) = (cash_flows.sims(), cash_flows.horizon());
    if paths.price.dim() != (sims, horizon) {
        return Err(LsmcError::ShapeMismatch {
            context: "paths vs cash flows".to_string(),
            expected: (sims, horizon),
            found: paths.price.dim(),
        });
    }
    if decision_period >= horizon {
        return Err(LsmcError::InvalidConfiguration {
            field: "decision_period".to_string(),
            reason: format!("{} must be before the horizon of {} periods", decision_period, horizon),
        });
    }

    let factors = discount_factors(rate, horizon)?;
    let discounted = &cash_flows.after_tax * &factors;

    let npv = discounted.sum_axis(Axis(1));
    let pre_decision = discounted.slice(s![.., ..decision_period]).sum_axis(Axis(1));
    let continuation = discounted.slice(s![.., decision_period..]).sum_axis(Axis(1));

    let (x_price, x_opex) = paths.state_at(decision_period)?;
    let features = stack(Axis(1), &[x_price, x_opex]).map_err(|e| LsmcError::ShapeMismatch {
        context: format!("regression features ({})", e),
        expected: (sims, 2),
        found: (x_price.len(), 2),
    })?;

    let regression = LinearRegression::fit(features.view(), continuation.view())?;
    let predicted = regression.predict(features.view())?;
    let r_squared = regression.r_squared(features.view(), continuation.view())?;

    let payoff = Payoff::SaleAtFixedPrice { buyout };
    // predictions are finite: fit() rejects non-finite samples, and f64::max would drop a NaN
    let floored = predicted.mapv(|cv| payoff.calculate(cv));
    let exercised = predicted.iter().filter(|&&cv| payoff.exercised(cv)).count();

    let enpv_with_option =
        mean(&pre_decision, "pre-decision value")? + mean(&floored, "exercise value")? - capex;
    let enpv_without_option = mean(&npv, "npv")? - capex;
    let option_value = enpv_with_option - enpv_without_option;

    log::debug!(
        "regression at period {}: intercept {:.4}, coefficients {:?}, r² {:.4}",
        decision_period,
        regression.intercept,
        regression.coefficients.to_vec(),
        r_squared
    );

    Ok(RealOptionValuation {
        enpv_without_option,
        enpv_with_option,
        option_value,
        exercise_fraction: exercised as f64 / sims as f64,
        regression,
        regression_r_squared: r_squared,
        npv_standard_error: standard_error(npv.iter()),
    })
}
