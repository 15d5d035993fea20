//! Reduction of an MCC-F1 curve to the MCC-F1 metric and best threshold.
//!
//! The MCC range of the curve is split into `W - 1` equal-width subranges. The
//! distance of every point to (1, 1) is averaged within each subrange, and the
//! non-empty subranges' means are averaged again so that densely sampled parts
//! of the curve do not dominate. The metric compares that grand average to the
//! largest possible distance, `sqrt(2)`:
//!
//! `metric = 1 - grand_average / sqrt(2)`

use std::f64::consts::SQRT_2;

use crate::config::MetricConfig;
use crate::error::{MccF1Error, Result};
use crate::types::{distance_to_perfect, MccF1Curve, MccF1Score, Subrange};

/// Reduce an MCC-F1 curve using `W = subranges` and otherwise default settings.
///
/// # Example
///
/// ```
/// use mcc_f1::reducer::reduce;
///
/// let mcc = vec![1.0, 1.0, 1.0];
/// let f1 = vec![1.0, 1.0, 1.0];
/// let thresholds = vec![0.2, 0.5, 0.8];
///
/// let score = reduce(&mcc, &f1, &thresholds, 100).unwrap();
/// assert_eq!(score.metric, 1.0);
/// assert_eq!(score.best_index, 0);
/// ```
pub fn reduce(mcc: &[f64], f1: &[f64], thresholds: &[f64], subranges: usize) -> Result<MccF1Score> {
    let config = MetricConfig::new().with_subranges(subranges);
    calculate_mcc_f1_metric(mcc, f1, thresholds, &config)
}

/// Reduce a curve produced by [`crate::curve::generate_curve`].
pub fn reduce_curve(curve: &MccF1Curve, config: &MetricConfig) -> Result<MccF1Score> {
    calculate_mcc_f1_metric(&curve.mcc, &curve.f1, &curve.thresholds, config)
}

/// Compute the MCC-F1 metric and the index of the point closest to (1, 1).
///
/// # Arguments
///
/// * `mcc` - Unit-normalized MCC values in [0, 1]
/// * `f1` - F1 values in [0, 1], aligned with `mcc`
/// * `thresholds` - Thresholds aligned with `mcc`, used for reporting only
/// * `config` - Number of subrange boundaries and top-edge handling
///
/// # Errors
///
/// * `InvalidConfig` if `config.subranges < 2`
/// * `DegenerateInput` if the curve is empty or no subrange receives a point
/// * `InvalidInput` if the sequences differ in length or hold values outside [0, 1]
pub fn calculate_mcc_f1_metric(
    mcc: &[f64],
    f1: &[f64],
    thresholds: &[f64],
    config: &MetricConfig,
) -> Result<MccF1Score> {
    config.validate()?;
    validate_curve(mcc, f1, thresholds)?;

    let distances: Vec<f64> = mcc
        .iter()
        .zip(f1)
        .map(|(&m, &f)| distance_to_perfect(m, f))
        .collect();

    let min = mcc.iter().copied().fold(f64::INFINITY, f64::min);
    let max = mcc.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let subranges = if min == max {
        // every point shares one MCC value: a single closed subrange holds them all
        let total: f64 = distances.iter().sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = total / distances.len() as f64;
        vec![Subrange {
            lower: min,
            upper: max,
            count: distances.len(),
            mean_distance: Some(mean),
        }]
    } else {
        bin_distances(mcc, &distances, &linspace(min, max, config.subranges), config.close_last_subrange)
    };

    let means: Vec<f64> = subranges.iter().filter_map(|s| s.mean_distance).collect();
    if means.is_empty() {
        return Err(MccF1Error::DegenerateInput(
            "no MCC value falls into any subrange".to_string(),
        ));
    }

    #[allow(clippy::cast_precision_loss)]
    let grand_average = means.iter().sum::<f64>() / means.len() as f64;
    let metric = 1.0 - grand_average / SQRT_2;

    let best_index = first_argmin(&distances);

    tracing::debug!(
        points = mcc.len(),
        subranges = subranges.len(),
        non_empty = means.len(),
        grand_average,
        "reduced MCC-F1 curve"
    );

    Ok(MccF1Score {
        metric,
        best_index,
        best_threshold: thresholds[best_index],
        grand_average,
        distances,
        subranges,
    })
}

/// `num` evenly spaced values from `start` to `stop`, both inclusive.
///
/// Values are computed as `start + i * step` and the last one is set to
/// `stop` exactly.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let offset = i as f64 * step;
                    offset + start
                })
                .collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// Assign each point to the subrange `[edges[i], edges[i + 1])` containing its
/// MCC value and average the distances per subrange.
fn bin_distances(mcc: &[f64], distances: &[f64], edges: &[f64], close_last: bool) -> Vec<Subrange> {
    let bins = edges.len() - 1;
    let mut sums = vec![0.0f64; bins];
    let mut counts = vec![0usize; bins];

    for (&value, &distance) in mcc.iter().zip(distances) {
        let bin = edges
            .windows(2)
            .position(|w| value >= w[0] && value < w[1])
            .or_else(|| (close_last && value == edges[bins]).then_some(bins - 1));

        if let Some(i) = bin {
            sums[i] += distance;
            counts[i] += 1;
        }
    }

    (0..bins)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let mean_distance = (counts[i] > 0).then(|| sums[i] / counts[i] as f64);
            Subrange {
                lower: edges[i],
                upper: edges[i + 1],
                count: counts[i],
                mean_distance,
            }
        })
        .collect()
}

/// Index of the smallest value; the first one wins ties.
fn first_argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v < values[best] {
            best = i;
        }
    }
    best
}

fn validate_curve(mcc: &[f64], f1: &[f64], thresholds: &[f64]) -> Result<()> {
    if mcc.is_empty() {
        return Err(MccF1Error::DegenerateInput("MCC sequence is empty".to_string()));
    }
    if mcc.len() != f1.len() || mcc.len() != thresholds.len() {
        return Err(MccF1Error::InvalidInput(format!(
            "curve sequences differ in length: mcc {}, f1 {}, thresholds {}",
            mcc.len(),
            f1.len(),
            thresholds.len()
        )));
    }
    for (name, values) in [("mcc", mcc), ("f1", f1)] {
        if let Some(pos) = values.iter().position(|v| !(0.0..=1.0).contains(v)) {
            return Err(MccF1Error::InvalidInput(format!(
                "{} value at index {} is outside [0, 1]: {}",
                name, pos, values[pos]
            )));
        }
    }
    Ok(())
}
