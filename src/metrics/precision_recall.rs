//! Precision and Recall calculation.

/// Calculate precision from confusion matrix values
///
/// Precision = TP / (TP + FP)
///
/// Returns 0.0 when nothing was predicted positive.
///
/// # Examples
///
/// ```
/// # use mcc_f1::metrics::precision_recall::calculate_precision;
/// let precision = calculate_precision(80, 20);
/// assert_eq!(precision, 0.8);
/// ```
#[must_use]
pub fn calculate_precision(tp: usize, fp: usize) -> f64 {
    let denominator = tp + fp;
    if denominator == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let precision = (tp as f64) / (denominator as f64);

    debug_assert!(
        (0.0..=1.0).contains(&precision),
        "Precision must be between 0 and 1, got {precision}"
    );

    precision
}

/// Calculate recall from confusion matrix values
///
/// Recall = TP / (TP + FN)
///
/// Returns 0.0 when there are no actual positives.
///
/// # Examples
///
/// ```
/// # use mcc_f1::metrics::precision_recall::calculate_recall;
/// let recall = calculate_recall(80, 20);
/// assert_eq!(recall, 0.8);
/// ```
#[must_use]
pub fn calculate_recall(tp: usize, fn_: usize) -> f64 {
    let denominator = tp + fn_;
    if denominator == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let recall = (tp as f64) / (denominator as f64);

    debug_assert!(
        (0.0..=1.0).contains(&recall),
        "Recall must be between 0 and 1, got {recall}"
    );

    recall
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_precision_perfect() {
        assert_eq!(calculate_precision(100, 0), 1.0);
    }

    #[test]
    fn test_calculate_precision_no_predictions() {
        assert_eq!(calculate_precision(0, 0), 0.0);
    }

    #[test]
    fn test_calculate_precision_typical() {
        assert!((calculate_precision(8, 2) - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_calculate_recall_no_ground_truth() {
        assert_eq!(calculate_recall(0, 0), 0.0);
    }

    #[test]
    fn test_calculate_recall_typical() {
        assert!((calculate_recall(8, 3) - 8.0 / 11.0).abs() < 1e-10);
    }
}
