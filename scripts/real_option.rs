// scripts/real_option.rs
//! Values the option to sell the widget mine at the end of year 5.
//!
//! Prints the three-line report to stdout. Set `RUST_LOG=info` (or `debug`)
//! for timing and pipeline diagnostics on stderr.

use real_option_lsmc::math_utils::Timer;
use real_option_lsmc::mc::mc_engine::{run_real_option, RealOptionConfig};
use real_option_lsmc::output;
use real_option_lsmc::valuation::stats::confidence_interval;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    let cfg = RealOptionConfig::default();

    let mut timer = Timer::new();
    timer.start();
    let valuation = match run_real_option(&cfg) {
        Ok(v) => v,
        Err(e) => {
            log::error!("valuation failed: {}", e);
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    log::info!("valuation finished in {:.2} ms", timer.elapsed_ms());

    if let Some(se) = valuation.npv_standard_error {
        match confidence_interval(valuation.enpv_without_option, se, 0.95) {
            Ok((lo, hi)) => log::info!("95% interval for ENPV without option: [{:.2}, {:.2}]", lo, hi),
            Err(e) => log::warn!("could not compute interval: {}", e),
        }
    }
    log::info!(
        "regression r² {:.4}, sale exercised in {:.1}% of paths",
        valuation.regression_r_squared,
        100.0 * valuation.exercise_fraction
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = output::write_report(&mut out, cfg.decision_period, &valuation) {
        eprintln!("error: failed to write report: {}", e);
        process::exit(1);
    }
}
