// src/cashflow/engine.rs
use super::schedule::{DepreciationSchedule, ProductionSchedule};
use crate::error::{validation::*, LsmcError, LsmcResult};
use crate::mc::paths::SimulatedPaths;
use ndarray::{Array1, Array2, Zip};

/// Royalty, tax and capital terms of the project.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiscalTerms {
    pub royalty_rate: f64,
    pub tax_rate: f64,
    pub capex: f64,
}

impl FiscalTerms {
    pub fn validate(&self) -> LsmcResult<()> {
        validate_range("royalty_rate", self.royalty_rate, 0.0, 1.0)?;
        validate_range("tax_rate", self.tax_rate, 0.0, 1.0)?;
        validate_finite("capex", self.capex)?;
        validate_non_negative("capex", self.capex)?;
        Ok(())
    }
}

/// Every intermediate of the cash-flow build-up, `sims × horizon` each.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowSeries {
    pub gross_revenue: Array2<f64>,
    pub royalty: Array2<f64>,
    pub net_revenue: Array2<f64>,
    pub before_tax: Array2<f64>,
    pub tax: Array2<f64>,
    pub after_tax: Array2<f64>,
    /// Depreciation charge per period (same for every simulation)
    pub depreciation: Array1<f64>,
}

impl CashFlowSeries {
    pub fn sims(&self) -> usize {
        self.after_tax.nrows()
    }

    pub fn horizon(&self) -> usize {
        self.after_tax.ncols()
    }
}

/// Build after-tax cash flows from simulated paths.
///
/// # Errors
///
/// `ShapeMismatch` if the price/opex matrices disagree, the production
/// schedule length differs from the horizon, or the depreciation schedule
/// is longer than the horizon.
pub fn compute_cash_flows(
    paths: &SimulatedPaths,
    production: &ProductionSchedule,
    depreciation: &DepreciationSchedule,
    terms: &FiscalTerms,
) -> LsmcResult<CashFlowSeries> {
    paths.check_shape()?;
    terms.validate()?;

    let (sims, horizon) = paths.price.dim();
    if production.len() != horizon {
        return Err(LsmcError::ShapeMismatch {
            context: "production schedule".to_string(),
            expected: (1, horizon),
            found: (1, production.len()),
        });
    }
    let charges = depreciation.charges(terms.capex, horizon)?;

    let gross_revenue = Zip::from(&paths.price)
        .and_broadcast(production.quantities())
        .map_collect(|&p, &q| p * q);
    let royalty = gross_revenue.mapv(|g| g * terms.royalty_rate);
    let net_revenue = &gross_revenue - &royalty;
    let before_tax = &net_revenue - &paths.opex;
    let tax = Zip::from(&before_tax)
        .and_broadcast(&charges)
        .map_collect(|&cf, &d| terms.tax_rate * (cf - d));
    let after_tax = &before_tax - &tax;

    log::debug!(
        "cash flows for {}x{}: mean after-tax total {:.4}, depreciation total {:.4}",
        sims,
        horizon,
        after_tax.sum() / sims as f64,
        charges.sum(),
    );

    Ok(CashFlowSeries {
        gross_revenue,
        royalty,
        net_revenue,
        before_tax,
        tax,
        after_tax,
        depreciation: charges,
    })
}
