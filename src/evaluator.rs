use crate::outcome::{EvalOutcome, TermFailure};
use crate::term::ResidualTerm;
use crate::trace::{EvalTrace, SilentTrace};

/// Registry of residual terms, summed on demand.
///
/// Terms are borrowed, not owned: registering a term never moves or clones
/// it, and dropping the evaluator leaves every term untouched. `'t` is the
/// shortest lifetime among the registered terms.
#[derive(Default)]
pub struct ResidualEvaluator<'t> {
    /// Registration order is summation order, and the index
    /// reported in traces and failures.
    residuals: Vec<&'t dyn ResidualTerm>,
}

impl<'t> ResidualEvaluator<'t> {
    /// An evaluator with nothing registered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a term. Returns the number of registered terms,
    /// counting this one.
    ///
    /// Appends always succeed. The same term may be registered twice;
    /// it will be summed twice.
    pub fn add_residual_term(&mut self, term: &'t dyn ResidualTerm) -> usize {
        self.residuals.push(term);
        self.residuals.len()
    }

    /// Sum every registered term at `x`, silently.
    ///
    /// An empty registry totals `0.0`. A failing term contributes nothing to
    /// the total; its index and error land in the outcome's failure list and
    /// evaluation continues with the remaining terms.
    pub fn eval(&self, x: f64) -> EvalOutcome {
        self.eval_traced(x, &mut SilentTrace)
    }

    /// Like [`eval`](Self::eval), but emits one record per successful term
    /// (index, value, running total) to the given trace.
    pub fn eval_traced(&self, x: f64, trace: &mut dyn EvalTrace) -> EvalOutcome {
        let mut total = 0.0;
        let mut failures = Vec::new();
        for (index, term) in self.residuals.iter().enumerate() {
            match term.evaluate(x) {
                Ok(value) => {
                    total += value;
                    trace.record(index, value, total);
                }
                Err(error) => failures.push(TermFailure { index, error }),
            }
        }
        EvalOutcome { total, failures }
    }

    /// How many terms are registered.
    pub fn len(&self) -> usize {
        self.residuals.len()
    }

    /// Is anything registered?
    pub fn is_empty(&self) -> bool {
        self.residuals.is_empty()
    }
}

impl std::fmt::Debug for ResidualEvaluator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResidualEvaluator")
            .field("terms", &self.residuals.len())
            .finish()
    }
}
