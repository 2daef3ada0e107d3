use crate::TermError;

/// Data from one evaluation run over the whole registry.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
#[cfg_attr(not(feature = "unstable-exhaustive"), non_exhaustive)]
pub struct EvalOutcome {
    /// Sum of every term that evaluated successfully.
    pub(crate) total: f64,
    /// Which terms failed, and how.
    pub(crate) failures: Vec<TermFailure>,
}

/// One term that reported an error during evaluation.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub struct TermFailure {
    /// The term's index, in registration order.
    pub index: usize,
    /// What the term reported.
    pub error: TermError,
}

impl EvalOutcome {
    /// Sum of every term that evaluated successfully.
    ///
    /// Plain floating-point addition in registration order; if a term
    /// successfully returns a NaN or infinity, it propagates into the total.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Which terms failed, and how. Empty when every term succeeded.
    pub fn failures(&self) -> &[TermFailure] {
        &self.failures
    }

    /// Did every registered term evaluate successfully?
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Did any term fail?
    pub fn is_partial(&self) -> bool {
        !self.is_complete()
    }
}
