use std::fmt::Display;

use scoring_model::Translations;
use serde::{Deserialize, Serialize};

/// One independently scored aspect of mapping quality.
///
/// A dimension is constructed over the [`Translations`] it measures and
/// starts out unevaluated. [`Dimension::evaluate`] computes its
/// [`Reporting`] and hands the dimension back, so construction, evaluation
/// and reading the outcome fit in a single expression.
///
/// Implementations read their translations and write nothing but their own
/// outcome.
pub trait Dimension {
    /// The stable identifier of this dimension.
    fn name(&self) -> &'static str;

    /// The translations this dimension measures.
    fn translations(&self) -> &Translations;

    /// Computes the outcome of this dimension and returns the dimension.
    ///
    /// Evaluating again over the same translations yields the same outcome.
    fn evaluate(&mut self) -> &dyn Dimension;

    /// The outcome computed by the last [`Dimension::evaluate`], or `None` if
    /// the dimension has not been evaluated yet.
    fn reporting(&self) -> Option<&Reporting>;

    /// Proposed selections that the solution also makes.
    fn correct_reporting(&self) -> Option<usize> {
        self.reporting().map(|reporting| reporting.correct_reporting)
    }

    /// The greatest number of correct selections achievable.
    fn correct_ceiling_reporting(&self) -> Option<usize> {
        self.reporting()
            .map(|reporting| reporting.correct_ceiling_reporting)
    }

    /// Proposed selections that the solution does not make.
    fn incorrect_reporting(&self) -> Option<usize> {
        self.reporting().map(|reporting| reporting.incorrect_reporting)
    }
}

/// The outcome of evaluating a [`Dimension`] over reporting fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reporting {
    /// Proposed selections that the solution also makes.
    pub correct_reporting: usize,
    /// The greatest number of correct selections achievable.
    pub correct_ceiling_reporting: usize,
    /// Proposed selections that the solution does not make.
    pub incorrect_reporting: usize,
}

impl Reporting {
    /// The stand-alone score of this outcome: correct selections net of
    /// incorrect ones, relative to the ceiling.
    ///
    /// The score is at most `1.0` and may be negative. It is `None` when the
    /// ceiling is zero, as there was nothing to get right.
    pub fn result(&self) -> Option<f64> {
        if self.correct_ceiling_reporting == 0 {
            return None;
        }

        let net = self.correct_reporting as f64 - self.incorrect_reporting as f64;
        Some(net / self.correct_ceiling_reporting as f64)
    }
}

impl Display for Reporting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "correct: {}/{}, incorrect: {}",
            self.correct_reporting, self.correct_ceiling_reporting, self.incorrect_reporting
        )?;

        match self.result() {
            Some(result) => write!(f, ", result: {result:.2}"),
            None => write!(f, ", result: n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporting(correct: usize, ceiling: usize, incorrect: usize) -> Reporting {
        Reporting {
            correct_reporting: correct,
            correct_ceiling_reporting: ceiling,
            incorrect_reporting: incorrect,
        }
    }

    #[test]
    fn it_scores_a_perfect_outcome_as_one() {
        assert_eq!(reporting(3, 3, 0).result(), Some(1.0));
    }

    #[test]
    fn it_penalizes_incorrect_selections() {
        assert_eq!(reporting(1, 2, 1).result(), Some(0.0));
        assert_eq!(reporting(0, 2, 1).result(), Some(-0.5));
    }

    #[test]
    fn it_has_no_result_without_a_ceiling() {
        assert_eq!(reporting(0, 0, 4).result(), None);
        assert_eq!(Reporting::default().result(), None);
    }

    #[test]
    fn it_displays_counts_and_result() {
        assert_eq!(
            reporting(1, 2, 0).to_string(),
            "correct: 1/2, incorrect: 0, result: 0.50"
        );
        assert_eq!(
            reporting(0, 0, 2).to_string(),
            "correct: 0/0, incorrect: 2, result: n/a"
        );
    }

    #[test]
    fn it_serializes_counts_by_name() {
        let value = serde_json::to_value(reporting(2, 3, 1)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "correct_reporting": 2,
                "correct_ceiling_reporting": 3,
                "incorrect_reporting": 1
            })
        );
    }
}
