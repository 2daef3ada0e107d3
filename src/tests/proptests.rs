use proptest::prelude::*;

use crate::ResidualEvaluator;
use crate::terms::{Affine, Constant};

proptest! {
    #[test]
    fn total_matches_a_plain_left_fold(
        constants in prop::collection::vec(-1e6f64..1e6, 0..50),
    ) {
        let terms: Vec<Constant> = constants.iter().copied().map(Constant).collect();
        let mut evaluator = ResidualEvaluator::new();
        for term in &terms {
            evaluator.add_residual_term(term);
        }

        let outcome = evaluator.eval(0.0);
        prop_assert!(outcome.is_complete());
        // Same additions in the same order, so the totals are identical,
        // not merely close.
        let expected = constants.iter().fold(0.0, |acc, c| acc + c);
        prop_assert_eq!(outcome.total(), expected);
    }

    #[test]
    fn registration_count_is_the_sequence_1_to_n(n in 0usize..200) {
        let term = Constant(0.0);
        let mut evaluator = ResidualEvaluator::new();
        for expected in 1..=n {
            prop_assert_eq!(evaluator.add_residual_term(&term), expected);
        }
        prop_assert_eq!(evaluator.len(), n);
    }

    #[test]
    fn affine_terms_evaluate_at_the_given_point(
        slope in -1e3f64..1e3,
        intercept in -1e3f64..1e3,
        x in -1e3f64..1e3,
    ) {
        let line = Affine { slope, intercept };
        let mut evaluator = ResidualEvaluator::new();
        evaluator.add_residual_term(&line);
        prop_assert_eq!(evaluator.eval(x).total(), slope * x + intercept);
    }

    #[test]
    fn eval_twice_agrees(
        constants in prop::collection::vec(-1e6f64..1e6, 0..20),
        x in -1e6f64..1e6,
    ) {
        let terms: Vec<Constant> = constants.iter().copied().map(Constant).collect();
        let mut evaluator = ResidualEvaluator::new();
        for term in &terms {
            evaluator.add_residual_term(term);
        }
        prop_assert_eq!(evaluator.eval(x), evaluator.eval(x));
    }
}
