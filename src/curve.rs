//! MCC-F1 curve generation.

use crate::error::{MccF1Error, Result};
use crate::metrics::confusion::ConfusionCounts;
use crate::metrics::mcc::normalize_mcc;
use crate::sweep::{validate_inputs, ScoreSweep, ThresholdSweep};
use crate::types::{CurvePoint, MccF1Curve};

/// Compute unit-normalized MCC and F1 at every threshold of the default sweep.
///
/// # Arguments
///
/// * `labels` - Ground truth, `true` for the positive class
/// * `scores` - Prediction scores aligned with `labels`
///
/// # Errors
///
/// Returns `InvalidInput` if the sequences are empty, differ in length,
/// contain non-finite scores, or the labels hold a single class.
///
/// # Example
///
/// ```
/// use mcc_f1::curve::generate_curve;
///
/// let curve = generate_curve(&[true, true, false, false], &[0.9, 0.6, 0.4, 0.1]).unwrap();
/// assert_eq!(curve.thresholds, vec![0.1, 0.4, 0.6, 0.9]);
/// assert_eq!(curve.mcc[1], 1.0);
/// assert_eq!(curve.f1[1], 1.0);
/// ```
pub fn generate_curve(labels: &[bool], scores: &[f64]) -> Result<MccF1Curve> {
    generate_curve_with(labels, scores, &ScoreSweep::default())
}

/// Compute the MCC-F1 curve at the thresholds produced by `sweep`.
///
/// At each threshold `t` the scores are binarized as `score > t`.
pub fn generate_curve_with(
    labels: &[bool],
    scores: &[f64],
    sweep: &dyn ThresholdSweep,
) -> Result<MccF1Curve> {
    validate_inputs(labels, scores)?;

    let positives = labels.iter().filter(|&&l| l).count();
    if positives == 0 || positives == labels.len() {
        return Err(MccF1Error::InvalidInput(format!(
            "labels must contain both classes, got {} positive of {}",
            positives,
            labels.len()
        )));
    }

    let pr = sweep.sweep(labels, scores)?;
    if pr.precision.len() != pr.thresholds.len() + 1 || pr.recall.len() != pr.precision.len() {
        return Err(MccF1Error::InvalidInput(format!(
            "sweep returned {} precision, {} recall and {} thresholds",
            pr.precision.len(),
            pr.recall.len(),
            pr.thresholds.len()
        )));
    }
    if let Some(t) = pr.thresholds.iter().find(|t| t.is_nan()) {
        return Err(MccF1Error::InvalidInput(format!("sweep returned threshold {}", t)));
    }

    let mut curve = MccF1Curve::with_capacity(pr.thresholds.len());
    for &threshold in &pr.thresholds {
        let counts = ConfusionCounts::at_threshold(labels, scores, threshold);
        curve.push(CurvePoint {
            mcc: normalize_mcc(counts.mcc()),
            f1: counts.f1(),
            threshold,
        });
    }

    tracing::debug!(
        samples = labels.len(),
        positives,
        points = curve.len(),
        "generated MCC-F1 curve"
    );

    Ok(curve)
}
