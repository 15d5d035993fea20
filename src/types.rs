//! Core data types for MCC-F1 curves and scores.

use serde::{Deserialize, Serialize};

/// A single point on the MCC-F1 curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Unit-normalized MCC, `(mcc + 1) / 2`.
    pub mcc: f64,
    /// F1 score.
    pub f1: f64,
    /// Score threshold; predictions are positive when `score > threshold`.
    pub threshold: f64,
}

impl CurvePoint {
    /// Euclidean distance to the point of perfect performance (1, 1).
    pub fn distance_to_perfect(&self) -> f64 {
        distance_to_perfect(self.mcc, self.f1)
    }
}

/// Distance from `(f1, mcc)` to the point of perfect performance (1, 1).
#[inline]
pub fn distance_to_perfect(mcc: f64, f1: f64) -> f64 {
    ((mcc - 1.0).powi(2) + (f1 - 1.0).powi(2)).sqrt()
}

/// MCC-F1 curve as three index-aligned sequences, in ascending threshold order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MccF1Curve {
    /// Unit-normalized MCC per threshold.
    pub mcc: Vec<f64>,
    /// F1 score per threshold.
    pub f1: Vec<f64>,
    /// Thresholds the predictions were binarized at.
    pub thresholds: Vec<f64>,
}

impl MccF1Curve {
    /// Create an empty curve with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mcc: Vec::with_capacity(capacity),
            f1: Vec::with_capacity(capacity),
            thresholds: Vec::with_capacity(capacity),
        }
    }

    /// Append one point.
    pub fn push(&mut self, point: CurvePoint) {
        self.mcc.push(point.mcc);
        self.f1.push(point.f1);
        self.thresholds.push(point.threshold);
    }

    /// Number of points on the curve.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Point at `index`, if any.
    pub fn point(&self, index: usize) -> Option<CurvePoint> {
        Some(CurvePoint {
            mcc: *self.mcc.get(index)?,
            f1: *self.f1.get(index)?,
            threshold: *self.thresholds.get(index)?,
        })
    }

    /// Iterate over the curve points.
    pub fn points(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.mcc
            .iter()
            .zip(&self.f1)
            .zip(&self.thresholds)
            .map(|((&mcc, &f1), &threshold)| CurvePoint { mcc, f1, threshold })
    }
}

/// Output of a precision-recall sweep.
///
/// `precision` and `recall` hold one more element than `thresholds`: the
/// terminal point (precision 1, recall 0) has no threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrCurve {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    pub thresholds: Vec<f64>,
}

/// One MCC subrange used by the reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subrange {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge, exclusive unless the subrange was closed on the right.
    pub upper: f64,
    /// Number of curve points assigned to this subrange.
    pub count: usize,
    /// Mean distance to (1, 1) of the assigned points; `None` when empty.
    pub mean_distance: Option<f64>,
}

impl Subrange {
    /// Whether no curve point fell into this subrange.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Result of reducing an MCC-F1 curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MccF1Score {
    /// MCC-F1 metric, `1 - grand_average / sqrt(2)`.
    pub metric: f64,
    /// Index of the curve point closest to (1, 1).
    pub best_index: usize,
    /// Threshold at `best_index`.
    pub best_threshold: f64,
    /// Unweighted mean of the non-empty subranges' mean distances.
    pub grand_average: f64,
    /// Per-point distance to (1, 1).
    pub distances: Vec<f64>,
    /// Subranges in ascending MCC order, empty ones included.
    pub subranges: Vec<Subrange>,
}

impl MccF1Score {
    /// Number of subranges holding at least one point.
    pub fn non_empty_subranges(&self) -> usize {
        self.subranges.iter().filter(|s| !s.is_empty()).count()
    }

    /// Get a formatted one-line report of the metric and best threshold.
    pub fn summary_string(&self) -> String {
        format!(
            "MCC-F1 metric = {:.2} Best Threshold = {:.2}",
            self.metric, self.best_threshold
        )
    }

    /// Print the one-line report to stdout.
    pub fn print_summary(&self) {
        println!("{}", self.summary_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_perfect() {
        assert_eq!(distance_to_perfect(1.0, 1.0), 0.0);
        assert!((distance_to_perfect(0.0, 0.0) - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((distance_to_perfect(0.5, 1.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_curve_push_and_points() {
        let mut curve = MccF1Curve::with_capacity(2);
        assert!(curve.is_empty());

        curve.push(CurvePoint { mcc: 0.5, f1: 0.0, threshold: 0.9 });
        curve.push(CurvePoint { mcc: 1.0, f1: 1.0, threshold: 0.4 });

        assert_eq!(curve.len(), 2);
        assert_eq!(curve.point(1).unwrap().threshold, 0.4);
        assert!(curve.point(2).is_none());

        let points: Vec<CurvePoint> = curve.points().collect();
        assert_eq!(points[0].mcc, 0.5);
        assert_eq!(points[1].distance_to_perfect(), 0.0);
    }

    #[test]
    fn test_summary_string() {
        let score = MccF1Score {
            metric: 0.4839,
            best_index: 1,
            best_threshold: 0.4,
            grand_average: 0.73,
            distances: vec![],
            subranges: vec![],
        };

        assert_eq!(score.summary_string(), "MCC-F1 metric = 0.48 Best Threshold = 0.40");
    }

    #[test]
    fn test_score_serializes() {
        let score = MccF1Score {
            metric: 1.0,
            best_index: 0,
            best_threshold: 0.5,
            grand_average: 0.0,
            distances: vec![0.0],
            subranges: vec![Subrange { lower: 1.0, upper: 1.0, count: 1, mean_distance: Some(0.0) }],
        };

        let json = serde_json::to_string(&score).unwrap();
        assert!(json.contains("\"best_index\":0"));
        assert_eq!(score.non_empty_subranges(), 1);
    }
}
