//! Main evaluation orchestrator for MCC-F1 scores.

use crate::config::MetricConfig;
use crate::curve::generate_curve_with;
use crate::error::Result;
use crate::reducer::reduce_curve;
use crate::report::MetricObserver;
use crate::sweep::ScoreSweep;
use crate::types::{MccF1Curve, MccF1Score};
use serde::{Deserialize, Serialize};

/// Curve and score of one evaluated classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MccF1Evaluation {
    pub curve: MccF1Curve,
    pub score: MccF1Score,
}

impl MccF1Evaluation {
    /// MCC-F1 metric of the curve.
    pub fn metric(&self) -> f64 {
        self.score.metric
    }

    /// Threshold of the curve point closest to (1, 1).
    pub fn best_threshold(&self) -> f64 {
        self.score.best_threshold
    }
}

/// Labels and scores of one named classifier in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierScores {
    pub name: String,
    pub labels: Vec<bool>,
    pub scores: Vec<f64>,
}

impl ClassifierScores {
    pub fn new(name: impl Into<String>, labels: Vec<bool>, scores: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            labels,
            scores,
        }
    }
}

/// Outcome of one classifier in [`evaluate_batch`].
#[derive(Debug)]
pub struct ClassifierEvaluation {
    pub name: String,
    pub result: Result<MccF1Evaluation>,
}

/// Evaluate a binary classifier's scores against ground truth.
///
/// Sweeps every distinct score as a threshold, builds the MCC-F1 curve and
/// reduces it to the MCC-F1 metric.
///
/// # Arguments
///
/// * `labels` - Ground truth, must contain both classes
/// * `scores` - Prediction scores aligned with `labels`
/// * `config` - Evaluation settings (default: `W = 100`, half-open subranges)
///
/// # Example
///
/// ```
/// use mcc_f1::evaluator::evaluate;
///
/// let labels = [true, true, false, false];
/// let scores = [0.9, 0.6, 0.4, 0.1];
///
/// let evaluation = evaluate(&labels, &scores, None).unwrap();
/// assert_eq!(evaluation.best_threshold(), 0.4);
/// assert!(evaluation.metric() > 0.0 && evaluation.metric() <= 1.0);
/// ```
pub fn evaluate(
    labels: &[bool],
    scores: &[f64],
    config: Option<MetricConfig>,
) -> Result<MccF1Evaluation> {
    let config = config.unwrap_or_default();
    config.validate()?;

    let sweep = ScoreSweep::new(config.stop_at_full_recall);
    let curve = generate_curve_with(labels, scores, &sweep)?;
    let score = reduce_curve(&curve, &config)?;

    Ok(MccF1Evaluation { curve, score })
}

/// Like [`evaluate`], notifying `observer` with the computed score.
pub fn evaluate_with_observer(
    labels: &[bool],
    scores: &[f64],
    config: Option<MetricConfig>,
    observer: &dyn MetricObserver,
) -> Result<MccF1Evaluation> {
    let evaluation = evaluate(labels, scores, config)?;
    observer.on_score(&evaluation.score, &evaluation.curve.thresholds);
    Ok(evaluation)
}

/// Evaluate several classifiers independently.
///
/// Each classifier is evaluated on its own; a failure is reported in its
/// entry and does not affect the others. Results keep the input order. With
/// the `parallel` feature the evaluations run on the rayon thread pool.
pub fn evaluate_batch(
    classifiers: &[ClassifierScores],
    config: Option<MetricConfig>,
) -> Vec<ClassifierEvaluation> {
    let config = config.unwrap_or_default();

    let evaluate_one = |classifier: &ClassifierScores| {
        let result = evaluate(&classifier.labels, &classifier.scores, Some(config.clone()));
        if let Err(err) = &result {
            tracing::warn!(classifier = %classifier.name, error = %err, "evaluation failed");
        }
        ClassifierEvaluation {
            name: classifier.name.clone(),
            result,
        }
    };

    #[cfg(feature = "parallel")]
    let evaluations: Vec<ClassifierEvaluation> = {
        use rayon::prelude::*;
        classifiers.par_iter().map(evaluate_one).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let evaluations: Vec<ClassifierEvaluation> = classifiers.iter().map(evaluate_one).collect();

    evaluations
}
