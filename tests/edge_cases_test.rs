//! Comprehensive edge case and boundary condition tests.

use std::f64::consts::SQRT_2;

use mcc_f1::config::MetricConfig;
use mcc_f1::curve::generate_curve;
use mcc_f1::evaluator::evaluate;
use mcc_f1::reducer::{calculate_mcc_f1_metric, linspace, reduce};
use mcc_f1::types::distance_to_perfect;

fn thresholds_for(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / n as f64).collect()
}

// ============================================================================
// CURVE EDGE CASES
// ============================================================================

#[test]
fn test_single_distinct_score() {
    // One threshold, at which nothing is predicted positive
    let curve = generate_curve(&[true, false, true], &[0.5, 0.5, 0.5]).unwrap();

    assert_eq!(curve.thresholds, vec![0.5]);
    assert_eq!(curve.mcc, vec![0.5]);
    assert_eq!(curve.f1, vec![0.0]);

    // A single point is its own subrange
    let score = reduce(&curve.mcc, &curve.f1, &curve.thresholds, 100).unwrap();
    assert_eq!(score.best_index, 0);
    assert!((score.grand_average - distance_to_perfect(0.5, 0.0)).abs() < 1e-12);
}

#[test]
fn test_two_samples() {
    let evaluation = evaluate(&[false, true], &[0.3, 0.7], None).unwrap();

    // thresholds 0.3 (perfect split) and 0.7 (nothing positive)
    assert_eq!(evaluation.curve.thresholds, vec![0.3, 0.7]);
    assert_eq!(evaluation.curve.mcc, vec![1.0, 0.5]);
    assert_eq!(evaluation.curve.f1, vec![1.0, 0.0]);
    assert_eq!(evaluation.score.best_threshold, 0.3);
}

#[test]
fn test_negative_and_large_scores() {
    let labels = [true, false, true, false];
    let scores = [1e6, -3.5, 250.0, -1e6];

    let curve = generate_curve(&labels, &scores).unwrap();
    assert_eq!(curve.thresholds, vec![-1e6, -3.5, 250.0, 1e6]);
    assert_eq!(curve.mcc[1], 1.0);
}

#[test]
fn test_curve_values_in_unit_interval() {
    let labels: Vec<bool> = (0..50).map(|i| (i * 37) % 11 < 5).collect();
    let scores: Vec<f64> = (0..50).map(|i| ((i * 17) % 23) as f64 / 23.0).collect();

    let curve = generate_curve(&labels, &scores).unwrap();
    for point in curve.points() {
        assert!((0.0..=1.0).contains(&point.mcc), "mcc out of range: {}", point.mcc);
        assert!((0.0..=1.0).contains(&point.f1), "f1 out of range: {}", point.f1);
    }
    assert!(curve.thresholds.windows(2).all(|w| w[0] < w[1]));
}

// ============================================================================
// REDUCER EDGE CASES
// ============================================================================

#[test]
fn test_all_points_perfect_any_w() {
    let mcc = vec![1.0; 5];
    let f1 = vec![1.0; 5];
    let thresholds = thresholds_for(5);

    for w in [2, 3, 10, 100, 1000] {
        let score = reduce(&mcc, &f1, &thresholds, w).unwrap();
        assert_eq!(score.metric, 1.0, "W = {}", w);
        assert_eq!(score.best_index, 0);
    }
}

#[test]
fn test_all_points_worst() {
    let score = reduce(&[0.0; 4], &[0.0; 4], &thresholds_for(4), 100).unwrap();
    assert!(score.metric.abs() < 1e-12);
    assert!((score.grand_average - SQRT_2).abs() < 1e-12);
}

#[test]
fn test_degenerate_range_single_subrange() {
    let mcc = [0.7, 0.7, 0.7];
    let f1 = [0.1, 0.5, 0.9];
    let score = reduce(&mcc, &f1, &thresholds_for(3), 100).unwrap();

    assert_eq!(score.subranges.len(), 1);
    assert_eq!(score.subranges[0].count, 3);
    let expected = (distance_to_perfect(0.7, 0.1)
        + distance_to_perfect(0.7, 0.5)
        + distance_to_perfect(0.7, 0.9))
        / 3.0;
    assert!((score.grand_average - expected).abs() < 1e-12);
    assert_eq!(score.best_index, 2);
}

#[test]
fn test_narrow_cluster_leaves_empty_subranges() {
    // Most points packed into the bottom of the range; W = 50 leaves many empty
    let mcc = [0.500, 0.501, 0.502, 0.503, 0.504, 0.9];
    let f1 = [0.30, 0.35, 0.40, 0.45, 0.50, 0.95];
    let score = reduce(&mcc, &f1, &thresholds_for(6), 50).unwrap();

    assert_eq!(score.subranges.len(), 49);
    assert!(score.subranges.iter().filter(|s| s.is_empty()).count() > 40);

    // Manual computation over non-empty subranges only, the 0.9 point is the top edge
    let edges = linspace(0.5, 0.9, 50);
    let mut sums = vec![0.0; 49];
    let mut counts = vec![0usize; 49];
    for (&m, &f) in mcc.iter().zip(&f1) {
        for i in 0..49 {
            if m >= edges[i] && m < edges[i + 1] {
                sums[i] += distance_to_perfect(m, f);
                counts[i] += 1;
            }
        }
    }
    let means: Vec<f64> = (0..49).filter(|&i| counts[i] > 0).map(|i| sums[i] / counts[i] as f64).collect();
    let expected = means.iter().sum::<f64>() / means.len() as f64;

    assert_eq!(score.non_empty_subranges(), means.len());
    assert!((score.grand_average - expected).abs() < 1e-12);

    // Averaging over all 49 subranges would be far smaller
    let zero_filled = means.iter().sum::<f64>() / 49.0;
    assert!(score.grand_average > zero_filled * 5.0);
}

#[test]
fn test_closed_last_subrange_bins_every_point() {
    let mcc = [0.2, 0.4, 0.6, 0.8];
    let f1 = [0.2, 0.4, 0.6, 0.8];
    let config = MetricConfig::new().with_subranges(4).with_closed_last_subrange(true);
    let score = calculate_mcc_f1_metric(&mcc, &f1, &thresholds_for(4), &config).unwrap();

    let binned: usize = score.subranges.iter().map(|s| s.count).sum();
    assert_eq!(binned, 4);

    let open = reduce(&mcc, &f1, &thresholds_for(4), 4).unwrap();
    let binned_open: usize = open.subranges.iter().map(|s| s.count).sum();
    assert_eq!(binned_open, 3);
}

#[test]
fn test_best_index_tie_takes_first() {
    let mcc = [0.3, 0.8, 0.6, 0.8];
    let f1 = [0.3, 0.6, 0.8, 0.6];
    let score = reduce(&mcc, &f1, &thresholds_for(4), 10).unwrap();

    // points 1, 2 and 3 are equidistant from (1, 1)
    assert_eq!(score.best_index, 1);
}

#[test]
fn test_metric_bounds_with_large_w() {
    let mcc = [0.1, 0.35, 0.6, 0.85, 0.95];
    let f1 = [0.0, 0.2, 0.5, 0.7, 0.9];
    let score = reduce(&mcc, &f1, &thresholds_for(5), 10_000).unwrap();

    assert!(score.metric <= 1.0);
    assert!(score.metric >= 1.0 - SQRT_2);
    assert_eq!(score.subranges.len(), 9_999);
}
