//! # real-option-lsmc: Least-Squares Monte Carlo for a Deferred Sale Option
//!
//! Values the right, but not the obligation, to sell a mining interest for a
//! fixed price on one future date, following the single-date Longstaff-Schwartz
//! procedure described by Smith (2005).
//!
//! ## Pipeline
//!
//! - **Path Simulator** (`mc::paths`): widget price as driftless GBM, operating
//!   cost as a mean-reverting process in log space
//! - **Cash-Flow Engine** (`cashflow`): revenue, royalty, opex, MACRS
//!   depreciation and income tax to after-tax cash flow
//! - **Valuation Engine** (`valuation`): discounting, the cross-sectional
//!   regression at the decision date, and expected NPV with/without the option
//!
//! ## Quick Start
//!
//! ```rust
//! use real_option_lsmc::mc::mc_engine::{run_real_option, RealOptionConfig};
//!
//! let config = RealOptionConfig {
//!     sims: 200,
//!     buyout: 100.0,       // sale price at the decision date
//!     decision_period: 5,  // sell at the end of year 5
//!     ..Default::default()
//! };
//!
//! let valuation = run_real_option(&config).expect("Valid configuration");
//! println!("Option value: {:.1}", valuation.option_value);
//! assert!(valuation.option_value >= -1e-9);
//! ```
//!
//! ## References
//!
//! - Smith, J. E. "Alternative Approaches for Solving Real-Options Problems."
//!   Decision Analysis 2(2), 2005, 89-102.
//! - Longstaff, F. A. and Schwartz, E. S. "Valuing American options by
//!   simulation: a simple least-squares approach." Review of Financial
//!   Studies 14(1), 2001, 113-147.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod models;
pub mod mc;
pub mod cashflow;
pub mod valuation;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{LsmcError, LsmcResult};
pub use mc::mc_engine::{run_real_option, RealOptionConfig};
pub use valuation::RealOptionValuation;
