//! Sums many independently-authored residual terms at a point.
//!
//! A residual term is a scalar function of one variable, the kind of thing a
//! least-squares objective is built out of. Callers define their own terms
//! (anything implementing [`ResidualTerm`]), register them with a
//! [`ResidualEvaluator`], then ask for the total at some point `x`.
//!
//! The evaluator borrows its terms rather than owning them, so a term can be
//! registered with several evaluators at once. The borrow checker enforces
//! that every registered term outlives the evaluator.

pub use crate::error::TermError;
pub use crate::evaluator::ResidualEvaluator;
pub use crate::outcome::{EvalOutcome, TermFailure};
pub use crate::term::ResidualTerm;
pub use crate::trace::{EvalTrace, SilentTrace, StderrTrace};

/// Errors a term can report.
mod error;
/// The registry and summation engine.
mod evaluator;
/// What an evaluation run produced.
mod outcome;
/// The one-method contract every residual term implements.
mod term;
/// Ready-made terms for common shapes of residual.
pub mod terms;
/// Per-term diagnostic output.
mod trace;
