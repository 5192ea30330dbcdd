// src/rng.rs
//! Random Number Generation for the Path Simulator
//!
//! # Reproducibility
//!
//! The whole valuation is a deterministic function of one seed. A single
//! generator is created per run and owned by the simulation phase; every
//! shock is drawn from it in a fixed order (see `mc::paths`).
//!
//! `Pcg64Mcg` is used instead of `StdRng` because its output stream is
//! part of its definition: the same seed yields the same shocks on every
//! platform and `rand` release.
//!
//! # Normal Shocks
//!
//! Standard normal variates come from `rand_distr::StandardNormal`
//! (Ziggurat sampling), so each draw consumes a variable number of
//! uniforms. Draw order is therefore the only thing that pins the stream.

use ndarray::Array1;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use rand_pcg::Pcg64Mcg;

/// Generator type used by the simulation phase
pub type SimRng = Pcg64Mcg;

pub fn seed_rng_from_u64(seed: u64) -> SimRng {
    Pcg64Mcg::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Draw `n` independent standard normal shocks, in order.
pub fn normal_block<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Array1<f64> {
    Array1::from_shape_fn(n, |_| get_normal_draw(rng))
}
