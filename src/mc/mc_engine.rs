// src/mc/mc_engine.rs
use crate::cashflow::{compute_cash_flows, DepreciationSchedule, FiscalTerms, ProductionSchedule};
use crate::error::{validation::*, LsmcError, LsmcResult};
use crate::mc::paths::{period_means, simulate_paths, SimulatedPaths};
use crate::models::gbm::Gbm;
use crate::models::ou_process::LogOuProcess;
use crate::rng;
use crate::valuation::{value_sale_option, RealOptionValuation};

#[derive(Debug, Clone)]
pub struct RealOptionConfig {
    pub horizon: usize,
    pub sims: usize,
    pub seed: u64,
    pub rate: f64,
    pub buyout: f64,
    pub decision_period: usize,
    pub period_length: f64,
    pub price_0: f64,
    pub price_sigma: f64,
    pub royalty_rate: f64,
    pub opex_0: f64,
    pub opex_k: f64,
    pub opex_long_run: f64,
    pub opex_sigma: f64,
    pub quantity_start: f64,
    pub quantity_end: f64,
    pub capex: f64,
    pub tax_rate: f64,
    pub depreciation: Vec<f64>,
}

impl RealOptionConfig {
    /// Validate the valuation configuration
    pub fn validate(&self) -> LsmcResult<()> {
        validate_paths(self.sims)?;
        validate_steps(self.horizon)?;
        if self.decision_period >= self.horizon {
            return Err(LsmcError::InvalidConfiguration {
                field: "decision_period".to_string(),
                reason: format!("must be less than the horizon ({})", self.horizon),
            });
        }
        validate_discount_rate("rate", self.rate)?;
        validate_finite("buyout", self.buyout)?;
        validate_positive("period_length", self.period_length)?;
        validate_positive("price_0", self.price_0)?;
        validate_non_negative("price_sigma", self.price_sigma)?;
        validate_range("royalty_rate", self.royalty_rate, 0.0, 1.0)?;
        validate_positive("opex_0", self.opex_0)?;
        validate_finite("opex_k", self.opex_k)?;
        validate_positive("opex_long_run", self.opex_long_run)?;
        validate_non_negative("opex_sigma", self.opex_sigma)?;
        validate_positive("quantity_start", self.quantity_start)?;
        validate_positive("quantity_end", self.quantity_end)?;
        validate_finite("capex", self.capex)?;
        validate_non_negative("capex", self.capex)?;
        validate_range("tax_rate", self.tax_rate, 0.0, 1.0)?;

        DepreciationSchedule::new(self.depreciation.clone())?;
        if self.depreciation.len() > self.horizon {
            return Err(LsmcError::InvalidConfiguration {
                field: "depreciation".to_string(),
                reason: format!(
                    "schedule of {} periods exceeds the horizon ({})",
                    self.depreciation.len(),
                    self.horizon
                ),
            });
        }

        Ok(())
    }

    pub fn price_model(&self) -> Gbm {
        Gbm::new(self.price_0, 0.0, self.price_sigma)
    }

    pub fn opex_model(&self) -> LogOuProcess {
        LogOuProcess::new(self.opex_0, self.opex_k, self.opex_long_run, self.opex_sigma)
    }

    pub fn production(&self) -> LsmcResult<ProductionSchedule> {
        ProductionSchedule::log_decline(self.quantity_start, self.quantity_end, self.horizon)
    }

    pub fn depreciation_schedule(&self) -> LsmcResult<DepreciationSchedule> {
        DepreciationSchedule::new(self.depreciation.clone())
    }

    pub fn fiscal_terms(&self) -> FiscalTerms {
        FiscalTerms {
            royalty_rate: self.royalty_rate,
            tax_rate: self.tax_rate,
            capex: self.capex,
        }
    }
}

impl Default for RealOptionConfig {
    fn default() -> Self {
        RealOptionConfig {
            horizon: 10,
            sims: 1000,
            seed: 1,
            rate: 0.05,
            buyout: 100.0,
            decision_period: 5,
            period_length: 1.0,
            price_0: 50.0,
            price_sigma: 0.3,
            royalty_rate: 0.125,
            opex_0: 25.0,
            opex_k: 0.5,
            opex_long_run: 30.0,
            opex_sigma: 0.25,
            quantity_start: 10.0,
            quantity_end: 1.0,
            capex: 1250.0,
            tax_rate: 0.21,
            depreciation: DepreciationSchedule::macrs_seven_year().fractions().to_vec(),
        }
    }
}

/// Simulate the configured price and opex paths from a fresh generator.
pub fn simulate_config_paths(cfg: &RealOptionConfig) -> LsmcResult<SimulatedPaths> {
    cfg.validate()?;
    let mut rng = rng::seed_rng_from_u64(cfg.seed);
    simulate_paths(
        cfg.sims,
        cfg.horizon,
        cfg.period_length,
        &cfg.price_model(),
        &cfg.opex_model(),
        &mut rng,
    )
}

/// Least-squares Monte Carlo value of the option to sell the project
///
/// # Pipeline
///
/// ```text
/// seed ─► Path Simulator ─► Cash-Flow Engine ─► Valuation Engine
///          (price, opex)     (after-tax CF)      (ENPVs, option value)
/// ```
///
/// Deterministic for a given configuration: the same seed reproduces every
/// output bit for bit.
///
/// # Errors
///
/// Returns `LsmcError` for:
/// - Invalid configuration parameters
/// - Shape mismatches between stages
/// - Non-finite aggregates
pub fn run_real_option(cfg: &RealOptionConfig) -> LsmcResult<RealOptionValuation> {
    let paths = simulate_config_paths(cfg)?;
    if log::log_enabled!(log::Level::Debug) {
        let (price_means, opex_means) = (period_means(&paths.price)?, period_means(&paths.opex)?);
        log::debug!("mean price by period {:?}", price_means.to_vec());
        log::debug!("mean opex by period {:?}", opex_means.to_vec());
    }

    let cash_flows = compute_cash_flows(
        &paths,
        &cfg.production()?,
        &cfg.depreciation_schedule()?,
        &cfg.fiscal_terms(),
    )?;

    let valuation = value_sale_option(
        &cash_flows,
        &paths,
        cfg.rate,
        cfg.decision_period,
        cfg.buyout,
        cfg.capex,
    )?;

    log::info!(
        "{} sims, seed {}: ENPV without option {:.4}, with option {:.4}, option value {:.4}, exercised in {:.1}% of paths",
        cfg.sims,
        cfg.seed,
        valuation.enpv_without_option,
        valuation.enpv_with_option,
        valuation.option_value,
        100.0 * valuation.exercise_fraction
    );

    Ok(valuation)
}
