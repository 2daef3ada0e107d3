use crate::TermError;

/// One scalar function contributing to a composite sum.
///
/// Implementations should be referentially transparent: the same `x` gives
/// the same answer every time. The contract places no precondition on `x`
/// (it may be non-finite); each term decides its own valid domain and
/// reports a [`TermError`] outside it.
pub trait ResidualTerm {
    /// Evaluate this term at the point `x`.
    ///
    /// On error, callers must not assume any value was computed.
    fn evaluate(&self, x: f64) -> Result<f64, TermError>;
}

/// Any suitable closure is a residual term, so ad-hoc terms
/// don't need a named type.
impl<F> ResidualTerm for F
where
    F: Fn(f64) -> Result<f64, TermError>,
{
    fn evaluate(&self, x: f64) -> Result<f64, TermError> {
        self(x)
    }
}
