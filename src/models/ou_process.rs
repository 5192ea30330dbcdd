// src/models/ou_process.rs
use super::model::StateProcess;
use std::f64;

/// Ornstein-Uhlenbeck process on the logarithm of a positive level
/// (operating cost). The level itself stays strictly positive for any
/// finite shock.
///
/// ```text
/// ln x_{t+dt} = ln x_t + κ (ln L - ln x_t) dt + σ √dt Z
/// ```
#[derive(Debug, Clone)]
pub struct LogOuProcess {
    pub x0: f64,
    pub kappa: f64,
    pub long_run: f64,
    pub sigma: f64,
}

impl LogOuProcess {
    pub fn new(x0: f64, kappa: f64, long_run: f64, sigma: f64) -> Self {
        LogOuProcess {
            x0,
            kappa,
            long_run,
            sigma,
        }
    }

    /// Mean of `ln x` after `periods` discrete steps of length `dt`.
    pub fn expected_log_level(&self, periods: usize, dt: f64) -> f64 {
        let ln_lr = self.long_run.ln();
        let decay = (1.0 - self.kappa * dt).powi(periods as i32);
        ln_lr + (self.x0.ln() - ln_lr) * decay
    }
}

impl StateProcess for LogOuProcess {
    fn initial(&self) -> f64 {
        self.x0
    }

    fn step(&self, x: f64, dt: f64, z: f64) -> f64 {
        let ln_x = x.ln();
        (ln_x + self.kappa * (self.long_run.ln() - ln_x) * dt + self.sigma * dt.sqrt() * z).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverts_towards_long_run() {
        let ou = LogOuProcess::new(25.0, 0.5, 30.0, 0.25);
        let next = ou.step(25.0, 1.0, 0.0);
        assert!(next > 25.0 && next < 30.0);
        // halfway in log space
        assert!((next - (25.0f64 * 30.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_positive_under_extreme_shocks() {
        let ou = LogOuProcess::new(25.0, 0.5, 30.0, 0.25);
        let mut x = 25.0;
        for _ in 0..50 {
            x = ou.step(x, 1.0, -8.0);
            assert!(x > 0.0);
        }
    }

    #[test]
    fn test_expected_log_level() {
        let ou = LogOuProcess::new(25.0, 0.5, 30.0, 0.25);
        assert!((ou.expected_log_level(0, 1.0) - 25f64.ln()).abs() < 1e-12);
        let one = ou.expected_log_level(1, 1.0);
        assert!((one - ou.step(25.0, 1.0, 0.0).ln()).abs() < 1e-12);
        assert!((ou.expected_log_level(60, 1.0) - 30f64.ln()).abs() < 1e-9);
    }
}
