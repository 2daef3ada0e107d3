//! Ready-made residual terms.
//!
//! Most callers will write their own terms; these cover the common shapes
//! and double as worked examples of the [`ResidualTerm`] contract.

use libm::sqrt;

use crate::{ResidualTerm, TermError};

/// Always evaluates to the same value, whatever `x` is.
#[derive(Debug, Clone, Copy)]
pub struct Constant(pub f64);

impl ResidualTerm for Constant {
    fn evaluate(&self, _x: f64) -> Result<f64, TermError> {
        Ok(self.0)
    }
}

/// `slope * x + intercept`.
#[derive(Debug, Clone, Copy)]
pub struct Affine {
    /// Coefficient on `x`.
    pub slope: f64,
    /// Value at `x = 0`.
    pub intercept: f64,
}

impl ResidualTerm for Affine {
    fn evaluate(&self, x: f64) -> Result<f64, TermError> {
        Ok(self.slope * x + self.intercept)
    }
}

/// `sqrt(x) - target`, e.g. one measurement's error when fitting a
/// square-root model. Negative `x` is outside the domain.
#[derive(Debug, Clone, Copy)]
pub struct SqrtDeviation {
    /// The measured value `sqrt(x)` is compared against.
    pub target: f64,
}

impl ResidualTerm for SqrtDeviation {
    fn evaluate(&self, x: f64) -> Result<f64, TermError> {
        if x < 0.0 {
            return Err(TermError::OutOfDomain { x });
        }
        Ok(sqrt(x) - self.target)
    }
}
