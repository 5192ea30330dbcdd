//! Cash-Flow Engine
//!
//! Turns simulated price/opex paths into after-tax project cash flows:
//! ```text
//! gross     = price × quantity_t
//! royalty   = gross × royalty_rate
//! net       = gross − royalty
//! btcf      = net − opex
//! tax       = tax_rate × (btcf − capex × depreciation_t)
//! atcf      = btcf − tax
//! ```
//! Tax is not floored, so a period whose before-tax cash flow falls below
//! its depreciation charge produces a tax credit.

pub mod schedule;
pub mod engine;

pub use engine::{compute_cash_flows, CashFlowSeries, FiscalTerms};
pub use schedule::{DepreciationSchedule, ProductionSchedule};
