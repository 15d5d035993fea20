//! Precision-recall sweep over the distinct prediction scores.
//!
//! The curve generator only needs the thresholds of a sweep, but it takes them
//! through [`ThresholdSweep`] so callers can substitute their own provider.

use crate::error::{MccF1Error, Result};
use crate::metrics::precision_recall::{calculate_precision, calculate_recall};
use crate::types::PrCurve;

/// Provider of precision/recall/threshold triples for a set of predictions.
///
/// Implementations must return thresholds in ascending order, with
/// `precision` and `recall` exactly one element longer than `thresholds`.
pub trait ThresholdSweep: Send + Sync {
    fn sweep(&self, labels: &[bool], scores: &[f64]) -> Result<PrCurve>;
}

/// Sweep with one threshold per distinct score value.
///
/// At threshold `t` a sample counts as predicted positive when `score >= t`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSweep {
    /// Drop thresholds below the highest one that already reaches full recall.
    pub stop_at_full_recall: bool,
}

impl ScoreSweep {
    pub fn new(stop_at_full_recall: bool) -> Self {
        Self { stop_at_full_recall }
    }
}

impl ThresholdSweep for ScoreSweep {
    fn sweep(&self, labels: &[bool], scores: &[f64]) -> Result<PrCurve> {
        validate_inputs(labels, scores)?;

        let total_positives = labels.iter().filter(|&&l| l).count();
        if total_positives == 0 {
            return Err(MccF1Error::InvalidInput(
                "labels contain no positive samples".to_string(),
            ));
        }

        // Sort by descending score
        let mut indices: Vec<usize> = (0..scores.len()).collect();
        indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut tps = Vec::new();
        let mut fps = Vec::new();
        let mut thresholds = Vec::new();
        let mut tp = 0usize;
        let mut fp = 0usize;

        let mut i = 0;
        while i < indices.len() {
            let current_score = scores[indices[i]];
            while i < indices.len() && scores[indices[i]] == current_score {
                if labels[indices[i]] {
                    tp += 1;
                } else {
                    fp += 1;
                }
                i += 1;
            }

            tps.push(tp);
            fps.push(fp);
            thresholds.push(current_score);
        }

        let kept = if self.stop_at_full_recall {
            // tps is non-decreasing and ends at total_positives
            tps.iter()
                .position(|&t| t == total_positives)
                .map_or(tps.len(), |last| last + 1)
        } else {
            tps.len()
        };

        let mut precision: Vec<f64> = (0..kept)
            .rev()
            .map(|k| calculate_precision(tps[k], fps[k]))
            .collect();
        let mut recall: Vec<f64> = (0..kept)
            .rev()
            .map(|k| calculate_recall(tps[k], total_positives - tps[k]))
            .collect();
        let thresholds: Vec<f64> = thresholds[..kept].iter().rev().copied().collect();

        precision.push(1.0);
        recall.push(0.0);

        Ok(PrCurve {
            precision,
            recall,
            thresholds,
        })
    }
}

/// Compute the precision-recall curve with the default [`ScoreSweep`].
///
/// # Example
///
/// ```
/// use mcc_f1::sweep::precision_recall_curve;
///
/// let pr = precision_recall_curve(&[true, true, false, false], &[0.9, 0.6, 0.4, 0.1]).unwrap();
/// assert_eq!(pr.thresholds, vec![0.1, 0.4, 0.6, 0.9]);
/// assert_eq!(pr.precision.len(), 5);
/// ```
pub fn precision_recall_curve(labels: &[bool], scores: &[f64]) -> Result<PrCurve> {
    ScoreSweep::default().sweep(labels, scores)
}

/// Check that labels and scores are non-empty, aligned, and finite.
pub(crate) fn validate_inputs(labels: &[bool], scores: &[f64]) -> Result<()> {
    if labels.is_empty() {
        return Err(MccF1Error::InvalidInput("empty label sequence".to_string()));
    }
    if labels.len() != scores.len() {
        return Err(MccF1Error::InvalidInput(format!(
            "labels length {} != scores length {}",
            labels.len(),
            scores.len()
        )));
    }
    if let Some(pos) = scores.iter().position(|s| !s.is_finite()) {
        return Err(MccF1Error::InvalidInput(format!(
            "score at index {} is not finite: {}",
            pos, scores[pos]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_perfect_separator() {
        let labels = [true, true, false, false];
        let scores = [0.9, 0.6, 0.4, 0.1];
        let pr = precision_recall_curve(&labels, &scores).unwrap();

        assert_eq!(pr.thresholds, vec![0.1, 0.4, 0.6, 0.9]);
        assert_eq!(pr.precision.len(), pr.thresholds.len() + 1);
        assert_eq!(pr.recall.len(), pr.thresholds.len() + 1);

        // at threshold 0.1 everything is predicted positive
        assert!((pr.precision[0] - 0.5).abs() < 1e-12);
        assert_eq!(pr.recall[0], 1.0);
        // at threshold 0.6 both positives are retrieved and nothing else
        assert_eq!(pr.precision[2], 1.0);
        assert_eq!(pr.recall[2], 1.0);
        // at threshold 0.9 only one positive
        assert_eq!(pr.recall[3], 0.5);
        // terminal point
        assert_eq!(pr.precision[4], 1.0);
        assert_eq!(pr.recall[4], 0.0);
    }

    #[test]
    fn test_sweep_groups_tied_scores() {
        let labels = [true, false, true, false];
        let scores = [0.5, 0.5, 0.8, 0.2];
        let pr = precision_recall_curve(&labels, &scores).unwrap();

        assert_eq!(pr.thresholds, vec![0.2, 0.5, 0.8]);
        // at 0.5: the 0.8 and both 0.5 samples
        assert!((pr.precision[1] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(pr.recall[1], 1.0);
    }

    #[test]
    fn test_sweep_stop_at_full_recall() {
        let labels = [true, true, false, false];
        let scores = [0.9, 0.6, 0.4, 0.1];
        let pr = ScoreSweep::new(true).sweep(&labels, &scores).unwrap();

        // 0.6 is the highest threshold with full recall
        assert_eq!(pr.thresholds, vec![0.6, 0.9]);
        assert_eq!(pr.precision, vec![1.0, 1.0, 1.0]);
        assert_eq!(pr.recall, vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_sweep_requires_positive_labels() {
        let result = precision_recall_curve(&[false, false], &[0.2, 0.4]);
        assert!(matches!(result, Err(MccF1Error::InvalidInput(_))));
    }

    #[test]
    fn test_validate_inputs() {
        assert!(validate_inputs(&[], &[]).is_err());
        assert!(validate_inputs(&[true], &[0.1, 0.2]).is_err());
        assert!(validate_inputs(&[true, false], &[0.1, f64::NAN]).is_err());
        assert!(validate_inputs(&[true, false], &[0.1, f64::INFINITY]).is_err());
        assert!(validate_inputs(&[true, false], &[0.1, 0.2]).is_ok());
    }
}
