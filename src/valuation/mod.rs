//! Valuation Engine
//!
//! Discounts the after-tax cash flows, fits the Longstaff-Schwartz
//! cross-sectional regression at the decision period and aggregates the
//! expected NPVs with and without the sale option.

pub mod discount;
pub mod regression;
pub mod stats;
pub mod lsmc;

pub use lsmc::{value_sale_option, RealOptionValuation};
pub use regression::LinearRegression;
