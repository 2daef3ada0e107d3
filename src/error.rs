/// Errors a residual term can report when evaluated.
///
/// The evaluator never inspects these beyond recording them; the taxonomy
/// exists so concrete terms have something structured to return.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[cfg_attr(not(feature = "unstable-exhaustive"), non_exhaustive)]
pub enum TermError {
    /// The evaluation point is outside this term's domain.
    #[error("input {x} is outside this term's domain")]
    OutOfDomain {
        /// The offending evaluation point.
        x: f64,
    },
    /// The term's math produced a NaN or infinity it doesn't want summed.
    #[error("evaluation did not produce a finite value")]
    NotFinite,
    /// Anything else a user-defined term wants to report.
    #[error("{0}")]
    Custom(String),
}
