/// Destination for per-term diagnostic records.
///
/// The evaluator emits one record per successfully evaluated term. This is an
/// observability side channel, not part of the functional contract; swap in
/// whatever destination suits you, or use [`SilentTrace`] for none.
pub trait EvalTrace {
    /// A term at `index` (registration order) evaluated to `value`,
    /// bringing the sum so far to `running_total`.
    fn record(&mut self, index: usize, value: f64, running_total: f64);
}

/// Discards every record. The default for [`eval`](crate::ResidualEvaluator::eval).
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentTrace;

impl EvalTrace for SilentTrace {
    fn record(&mut self, _index: usize, _value: f64, _running_total: f64) {}
}

/// Writes each record to stderr, one line per term.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrTrace;

impl EvalTrace for StderrTrace {
    fn record(&mut self, index: usize, value: f64, running_total: f64) {
        eprintln!("Computed residuals[{index}]={value}, total={running_total}");
    }
}

/// Collects records in memory. Handy in tests for asserting
/// evaluation order without capturing stderr.
impl EvalTrace for Vec<(usize, f64, f64)> {
    fn record(&mut self, index: usize, value: f64, running_total: f64) {
        self.push((index, value, running_total));
    }
}
