// src/models/gbm.rs
use super::model::StateProcess;
use std::f64;

/// Geometric Brownian motion for the commodity price.
///
/// With `mu = 0` and `dt = 1` a step is `x * exp(-σ²/2 + σZ)`, so the price
/// is a martingale in expectation.
#[derive(Debug, Clone)]
pub struct Gbm {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(s0: f64, mu: f64, sigma: f64) -> Self {
        Gbm { s0, mu, sigma }
    }

    pub fn exact_step(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        s_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt + self.sigma * dt.sqrt() * normal_draw).exp()
    }
}

impl StateProcess for Gbm {
    fn initial(&self) -> f64 {
        self.s0
    }

    fn step(&self, x: f64, dt: f64, z: f64) -> f64 {
        self.exact_step(x, dt, z)
    }
}
