//! Matthews correlation coefficient.

use crate::metrics::confusion::ConfusionCounts;

/// Binary Matthews correlation coefficient.
///
/// `MCC = (TP*TN - FP*FN) / sqrt((TP+FP)(TP+FN)(TN+FP)(TN+FN))`
///
/// Returns 0.0 when the denominator is zero, i.e. when either the labels or the
/// predictions contain a single class.
///
/// # Example
///
/// ```
/// use mcc_f1::metrics::confusion::ConfusionCounts;
/// use mcc_f1::metrics::mcc::matthews_corrcoef;
///
/// let counts = ConfusionCounts::from_predictions(
///     &[true, true, false, false],
///     &[true, false, false, false],
/// );
/// assert!((matthews_corrcoef(&counts) - 0.5773).abs() < 1e-3);
/// ```
#[must_use]
pub fn matthews_corrcoef(counts: &ConfusionCounts) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let (tp, fp, tn, fn_) = (
        counts.true_positives as f64,
        counts.false_positives as f64,
        counts.true_negatives as f64,
        counts.false_negatives as f64,
    );

    let denom_sq = (tp + fp) * (tp + fn_) * (tn + fp) * (tn + fn_);
    if denom_sq == 0.0 {
        return 0.0;
    }

    let mcc = (tp * tn - fp * fn_) / denom_sq.sqrt();
    // rounding can push a perfect correlation a hair past the bounds
    mcc.clamp(-1.0, 1.0)
}

/// Map a raw MCC in [-1, 1] onto [0, 1].
#[inline]
#[must_use]
pub fn normalize_mcc(mcc: f64) -> f64 {
    (mcc + 1.0) * 0.5
}
