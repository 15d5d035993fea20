//! Per-threshold classification metrics used to build the MCC-F1 curve.

pub mod confusion;
pub mod mcc;
pub mod precision_recall;
pub mod f1_score;

pub use confusion::ConfusionCounts;
pub use mcc::{matthews_corrcoef, normalize_mcc};
pub use precision_recall::{calculate_precision, calculate_recall};
pub use f1_score::{calculate_f1_score, calculate_f1_from_counts};
