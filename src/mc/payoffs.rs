//! Exercise Payoffs
//!
//! The sale option is exercisable on a single date. At that date the holder
//! compares the estimated value of keeping the project against the fixed
//! buyout price and takes the larger:
//!
//! ```text
//! value = max(Ĉ, buyout)
//! ```
//!
//! `Ĉ` is the regression estimate of the continuation value, not the
//! path's own realised continuation cash flow.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payoff {
    /// Sell the interest for `buyout` on the decision date
    SaleAtFixedPrice { buyout: f64 },
}

impl Payoff {
    /// Value taken at the decision date given an estimated continuation value
    pub fn calculate(&self, continuation: f64) -> f64 {
        match self {
            Payoff::SaleAtFixedPrice { buyout } => continuation.max(*buyout),
        }
    }

    /// Whether the holder sells; ties keep the project.
    pub fn exercised(&self, continuation: f64) -> bool {
        match self {
            Payoff::SaleAtFixedPrice { buyout } => continuation < *buyout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_floor() {
        let payoff = Payoff::SaleAtFixedPrice { buyout: 100.0 };
        assert_eq!(payoff.calculate(80.0), 100.0);
        assert_eq!(payoff.calculate(140.0), 140.0);
        assert_eq!(payoff.calculate(-20.0), 100.0);
        assert!(payoff.exercised(80.0));
        assert!(!payoff.exercised(100.0));
        assert!(!payoff.exercised(140.0));
    }
}
