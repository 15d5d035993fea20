//! Binary confusion counts for a single binarization of the scores.

use serde::{Deserialize, Serialize};

use crate::metrics::f1_score::calculate_f1_from_counts;
use crate::metrics::mcc::matthews_corrcoef;
use crate::metrics::precision_recall::{calculate_precision, calculate_recall};

/// True/false positive/negative counts of a binary prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    /// Count outcomes of `predicted` against `labels`.
    ///
    /// Extra elements of the longer slice are ignored; callers validate lengths.
    pub fn from_predictions(labels: &[bool], predicted: &[bool]) -> Self {
        let mut counts = Self::default();
        for (&actual, &pred) in labels.iter().zip(predicted) {
            counts.record(actual, pred);
        }
        counts
    }

    /// Count outcomes when every score strictly above `threshold` is predicted positive.
    pub fn at_threshold(labels: &[bool], scores: &[f64], threshold: f64) -> Self {
        let mut counts = Self::default();
        for (&actual, &score) in labels.iter().zip(scores) {
            counts.record(actual, score > threshold);
        }
        counts
    }

    fn record(&mut self, actual: bool, predicted: bool) {
        match (actual, predicted) {
            (true, true) => self.true_positives += 1,
            (false, true) => self.false_positives += 1,
            (false, false) => self.true_negatives += 1,
            (true, false) => self.false_negatives += 1,
        }
    }

    /// Total number of samples counted.
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    pub fn precision(&self) -> f64 {
        calculate_precision(self.true_positives, self.false_positives)
    }

    pub fn recall(&self) -> f64 {
        calculate_recall(self.true_positives, self.false_negatives)
    }

    pub fn f1(&self) -> f64 {
        calculate_f1_from_counts(self.true_positives, self.false_positives, self.false_negatives)
    }

    /// Raw Matthews correlation coefficient in [-1, 1].
    pub fn mcc(&self) -> f64 {
        matthews_corrcoef(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_predictions() {
        let labels = [true, true, false, false, true];
        let predicted = [true, false, true, false, true];
        let counts = ConfusionCounts::from_predictions(&labels, &predicted);

        assert_eq!(counts.true_positives, 2);
        assert_eq!(counts.false_negatives, 1);
        assert_eq!(counts.false_positives, 1);
        assert_eq!(counts.true_negatives, 1);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_at_threshold_is_strict() {
        let labels = [true, true, false, false];
        let scores = [0.9, 0.6, 0.4, 0.1];

        // 0.4 itself is not above the threshold
        let counts = ConfusionCounts::at_threshold(&labels, &scores, 0.4);
        assert_eq!(counts.true_positives, 2);
        assert_eq!(counts.false_positives, 0);
        assert_eq!(counts.true_negatives, 2);
        assert_eq!(counts.f1(), 1.0);
        assert_eq!(counts.mcc(), 1.0);
    }

    #[test]
    fn test_precision_recall_from_counts() {
        let counts = ConfusionCounts {
            true_positives: 8,
            false_positives: 2,
            true_negatives: 5,
            false_negatives: 3,
        };
        assert!((counts.precision() - 0.8).abs() < 1e-10);
        assert!((counts.recall() - 8.0 / 11.0).abs() < 1e-10);
    }
}
