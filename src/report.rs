//! Reporting hooks for computed MCC-F1 scores
//!
//! The metric computation never prints. Callers that want the one-line
//! "MCC-F1 metric = .. Best Threshold = .." report pass an observer to
//! [`crate::evaluator::evaluate_with_observer`] or call
//! [`MccF1Score::summary_string`] themselves.

use std::sync::{Mutex, PoisonError};

use crate::types::MccF1Score;

/// Receives every score produced by an evaluation.
pub trait MetricObserver: Send + Sync {
    /// Called once per evaluated curve with the score and its thresholds.
    fn on_score(&self, score: &MccF1Score, thresholds: &[f64]);
}

/// Observer that emits the summary line through `tracing` at INFO level.
#[derive(Debug, Clone, Default)]
pub struct TracingReporter {
    /// Optional classifier name attached to each event
    pub label: Option<String>,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a classifier name to the emitted events
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

impl MetricObserver for TracingReporter {
    fn on_score(&self, score: &MccF1Score, _thresholds: &[f64]) {
        let classifier = self.label.as_deref().unwrap_or("");
        tracing::info!(
            classifier,
            metric = score.metric,
            best_index = score.best_index,
            best_threshold = score.best_threshold,
            "{}",
            score.summary_string()
        );
    }
}

/// Observer that keeps the summary lines it receives, in order.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    lines: Mutex<Vec<String>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary lines received so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl MetricObserver for CollectingReporter {
    fn on_score(&self, score: &MccF1Score, _thresholds: &[f64]) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(score.summary_string());
    }
}
