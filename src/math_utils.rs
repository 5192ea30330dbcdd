// src/math_utils.rs
use ndarray::Array1;

/// `n` points spaced evenly on a log scale from `start` to `end`, inclusive.
///
/// Equivalent to `10^linspace(log10(start), log10(end), n)`; both endpoints
/// must be positive.
pub fn logspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    let (lo, hi) = (start.log10(), end.log10());
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, 10f64.powf(lo)),
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            Array1::from_shape_fn(n, |i| {
                let exponent = if i == n - 1 { hi } else { lo + step * i as f64 };
                10f64.powf(exponent)
            })
        }
    }
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logspace_decline() {
        let q = logspace(10.0, 1.0, 10);
        assert_eq!(q.len(), 10);
        assert!((q[0] - 10.0).abs() < 1e-12);
        assert!((q[9] - 1.0).abs() < 1e-12);
        for i in 1..q.len() {
            assert!(q[i] < q[i - 1], "quantity should decline at {}", i);
            // constant ratio between neighbours
            assert!((q[i] / q[i - 1] - 10f64.powf(-1.0 / 9.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_logspace_edges() {
        assert_eq!(logspace(10.0, 1.0, 0).len(), 0);
        let single = logspace(10.0, 1.0, 1);
        assert!((single[0] - 10.0).abs() < 1e-12);
    }
}
