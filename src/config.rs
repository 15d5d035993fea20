//! Evaluation settings and JSON loading utilities.

use crate::error::{MccF1Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default number of subrange boundaries (`W`).
pub const DEFAULT_SUBRANGES: usize = 100;

/// Settings for building and reducing an MCC-F1 curve.
///
/// Every field has a default, so a JSON document only needs the fields it
/// overrides:
///
/// ```json
/// { "subranges": 50, "close_last_subrange": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricConfig {
    /// Number of boundary points `W`; the MCC range is split into `W - 1` subranges.
    pub subranges: usize,

    /// Close the last subrange on the right so the maximum MCC value is binned.
    ///
    /// Off by default, which drops the maximum MCC value from every subrange
    /// the same way published MCC-F1 results do.
    pub close_last_subrange: bool,

    /// Only sweep thresholds from the highest one reaching full recall upwards.
    pub stop_at_full_recall: bool,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            subranges: DEFAULT_SUBRANGES,
            close_last_subrange: false,
            stop_at_full_recall: false,
        }
    }
}

impl MetricConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of subrange boundaries `W`.
    pub fn with_subranges(mut self, subranges: usize) -> Self {
        self.subranges = subranges;
        self
    }

    /// Close the last subrange on the right.
    pub fn with_closed_last_subrange(mut self, close: bool) -> Self {
        self.close_last_subrange = close;
        self
    }

    /// Truncate the sweep at the highest threshold reaching full recall.
    pub fn with_stop_at_full_recall(mut self, stop: bool) -> Self {
        self.stop_at_full_recall = stop;
        self
    }

    /// Check that the settings can be used for a reduction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `subranges` is less than 2.
    pub fn validate(&self) -> Result<()> {
        if self.subranges < 2 {
            return Err(MccF1Error::InvalidConfig(format!(
                "subranges (W) must be at least 2, got {}",
                self.subranges
            )));
        }
        Ok(())
    }
}

/// Load a `MetricConfig` from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
///
/// # Example
///
/// ```no_run
/// use mcc_f1::config::load_config_from_file;
///
/// let config = load_config_from_file("mcc_f1.json").unwrap();
/// println!("Using W = {}", config.subranges);
/// ```
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<MetricConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: MetricConfig = serde_json::from_reader(reader)?;

    config.validate()?;

    Ok(config)
}

/// Load a `MetricConfig` from a JSON string.
///
/// # Example
///
/// ```
/// use mcc_f1::config::load_config_from_string;
///
/// let config = load_config_from_string(r#"{ "subranges": 10 }"#).unwrap();
/// assert_eq!(config.subranges, 10);
/// assert!(!config.close_last_subrange);
/// ```
pub fn load_config_from_string(json_str: &str) -> Result<MetricConfig> {
    let config: MetricConfig = serde_json::from_str(json_str)?;

    config.validate()?;

    Ok(config)
}
