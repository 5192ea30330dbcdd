// src/models/model.rs
/// One-factor state process advanced one period at a time from an
/// externally supplied standard normal shock.
pub trait StateProcess {
    fn initial(&self) -> f64;
    fn step(&self, x: f64, dt: f64, z: f64) -> f64;
}
