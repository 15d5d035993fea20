//! # mcc-f1
//!
//! A Rust library for the MCC-F1 curve and metric, a threshold-free summary of
//! a binary classifier that combines the unit-normalized Matthews Correlation
//! Coefficient (MCC) with the F1 score.
//!
//! This library provides:
//! - **Precision-recall sweep** over the distinct prediction scores
//! - **MCC-F1 curve**: unit-normalized MCC and F1 at every swept threshold
//! - **MCC-F1 metric**: `1 - grand_average / sqrt(2)`, where the grand average
//!   is the mean distance to the point of perfect performance (1, 1) taken
//!   over equal-width MCC subranges
//! - **Best threshold**: the curve point closest to (1, 1)
//!
//! ## Features
//!
//! - Pure, stateless functions that are safe to call from many threads
//! - Parallel batch evaluation of several classifiers (`parallel` feature)
//! - JSON configuration of the subrange count and boundary handling
//! - Optional reporting hooks built on `tracing`
//! - Polars DataFrame input and output
//!
//! ## Quick Start
//!
//! ```rust
//! use mcc_f1::evaluator::evaluate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let labels = [true, true, false, false];
//! let scores = [0.9, 0.6, 0.4, 0.1];
//!
//! // Evaluate with default settings (W = 100 subrange boundaries)
//! let evaluation = evaluate(&labels, &scores, None)?;
//!
//! println!("{}", evaluation.score.summary_string());
//! assert_eq!(evaluation.score.best_threshold, 0.4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Two-step use
//!
//! ```rust
//! use mcc_f1::{generate_curve, reduce};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let curve = generate_curve(&[true, false, true, false], &[0.8, 0.3, 0.6, 0.5])?;
//! let score = reduce(&curve.mcc, &curve.f1, &curve.thresholds, 100)?;
//! assert!(score.metric <= 1.0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod types;
pub mod config;
pub mod metrics;
pub mod sweep;
pub mod curve;
pub mod reducer;
pub mod report;
pub mod evaluator;
pub mod polars_utils;

// Re-export commonly used types and functions
pub use error::{MccF1Error, Result};
pub use types::{CurvePoint, MccF1Curve, MccF1Score, PrCurve, Subrange};
pub use config::{load_config_from_file, load_config_from_string, MetricConfig, DEFAULT_SUBRANGES};
pub use sweep::{precision_recall_curve, ScoreSweep, ThresholdSweep};
pub use curve::{generate_curve, generate_curve_with};
pub use reducer::{calculate_mcc_f1_metric, reduce, reduce_curve};
pub use report::{CollectingReporter, MetricObserver, TracingReporter};
pub use evaluator::{
    evaluate, evaluate_batch, evaluate_with_observer, ClassifierEvaluation, ClassifierScores,
    MccF1Evaluation,
};
