// src/output.rs
use crate::valuation::RealOptionValuation;
use std::io::{self, Write};

/// Write the three-line valuation report.
pub fn write_report<W: Write>(
    out: &mut W,
    decision_period: usize,
    valuation: &RealOptionValuation,
) -> io::Result<()> {
    writeln!(
        out,
        "The ENPV of the project without the option is ${:.1}",
        valuation.enpv_without_option
    )?;
    writeln!(
        out,
        "The ENPV of the project with the option is ${:.1}",
        valuation.enpv_with_option
    )?;
    writeln!(
        out,
        "The value of the option to sell in year {} is ${:.1}",
        decision_period, valuation.option_value
    )?;
    Ok(())
}
