// src/cashflow/schedule.rs
use crate::error::{validation::*, LsmcError, LsmcResult};
use crate::math_utils::logspace;
use ndarray::Array1;

/// Seven-year MACRS fractions. Sums to 1.0 up to float rounding.
pub const MACRS_SEVEN_YEAR: [f64; 8] = [
    0.1429, 0.2449, 0.1749, 0.1249, 0.0893, 0.0892, 0.0893, 0.0446,
];

const SCHEDULE_TOLERANCE: f64 = 1e-9;

/// Extraction quantity per period, identical for every simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionSchedule {
    quantities: Array1<f64>,
}

impl ProductionSchedule {
    pub fn new(quantities: Array1<f64>) -> LsmcResult<Self> {
        for &q in quantities.iter() {
            validate_finite("quantity", q)?;
            validate_non_negative("quantity", q)?;
        }
        Ok(ProductionSchedule { quantities })
    }

    /// Logarithmic decline from `start` to `end` over `periods` periods.
    pub fn log_decline(start: f64, end: f64, periods: usize) -> LsmcResult<Self> {
        validate_positive("quantity_start", start)?;
        validate_positive("quantity_end", end)?;
        Self::new(logspace(start, end, periods))
    }

    pub fn quantities(&self) -> &Array1<f64> {
        &self.quantities
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

/// Fractions of CAPEX deductible in each of the first periods.
#[derive(Debug, Clone, PartialEq)]
pub struct DepreciationSchedule {
    fractions: Vec<f64>,
}

impl DepreciationSchedule {
    pub fn new(fractions: Vec<f64>) -> LsmcResult<Self> {
        for &f in &fractions {
            validate_range("depreciation_fraction", f, 0.0, 1.0)?;
        }
        let total: f64 = fractions.iter().sum();
        if total > 1.0 + SCHEDULE_TOLERANCE {
            return Err(LsmcError::InvalidParameters {
                parameter: "depreciation".to_string(),
                value: total,
                constraint: "fractions must sum to at most 1.0".to_string(),
            });
        }
        Ok(DepreciationSchedule { fractions })
    }

    pub fn macrs_seven_year() -> Self {
        DepreciationSchedule {
            fractions: MACRS_SEVEN_YEAR.to_vec(),
        }
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn total_fraction(&self) -> f64 {
        self.fractions.iter().sum()
    }

    /// Depreciation charge per period over `horizon` periods; periods past
    /// the end of the schedule get zero.
    pub fn charges(&self, capex: f64, horizon: usize) -> LsmcResult<Array1<f64>> {
        if self.fractions.len() > horizon {
            return Err(LsmcError::ShapeMismatch {
                context: "depreciation schedule".to_string(),
                expected: (1, horizon),
                found: (1, self.fractions.len()),
            });
        }
        Ok(Array1::from_shape_fn(horizon, |t| {
            self.fractions.get(t).map_or(0.0, |f| capex * f)
        }))
    }
}
