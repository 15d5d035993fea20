//! F1 Score calculation.

use crate::metrics::precision_recall::{calculate_precision, calculate_recall};

/// Calculate F1 score from precision and recall.
///
/// F1 score is the harmonic mean of precision and recall:
/// F1 = 2 × (Precision × Recall) / (Precision + Recall)
///
/// # Arguments
///
/// * `precision` - Precision value (0.0 to 1.0)
/// * `recall` - Recall value (0.0 to 1.0)
///
/// # Returns
///
/// Returns the F1 score (0.0 to 1.0). Returns 0.0 if both precision and recall are 0.
///
/// # Example
///
/// ```
/// use mcc_f1::metrics::f1_score::calculate_f1_score;
///
/// let f1 = calculate_f1_score(0.8, 0.6);
/// assert!((f1 - 0.6857).abs() < 0.001);
/// ```
#[must_use]
pub fn calculate_f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        return 0.0;
    }

    let f1 = 2.0 * (precision * recall) / (precision + recall);

    debug_assert!(
        (0.0..=1.0).contains(&f1),
        "F1 must be between 0 and 1, got {f1} (precision={precision}, recall={recall})"
    );

    f1
}

/// Calculate F1 score directly from TP, FP, and FN counts.
///
/// # Example
///
/// ```
/// use mcc_f1::metrics::f1_score::calculate_f1_from_counts;
///
/// let f1 = calculate_f1_from_counts(8, 2, 3);
/// assert!((f1 - 0.7619).abs() < 0.001);
/// ```
#[must_use]
pub fn calculate_f1_from_counts(
    true_positives: usize,
    false_positives: usize,
    false_negatives: usize,
) -> f64 {
    let precision = calculate_precision(true_positives, false_positives);
    let recall = calculate_recall(true_positives, false_negatives);
    calculate_f1_score(precision, recall)
}
