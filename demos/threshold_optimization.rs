//! Example of picking an operating threshold from the MCC-F1 curve.

use mcc_f1::{
    calculate_mcc_f1_metric, generate_curve, load_config_from_string, precision_recall_curve,
    MetricConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Threshold Selection Example ===\n");

    let labels = vec![
        true, true, false, true, false, false, true, false, true, false, false, true,
    ];
    let scores = vec![
        0.81, 0.67, 0.58, 0.74, 0.22, 0.47, 0.39, 0.13, 0.92, 0.64, 0.31, 0.55,
    ];

    // Example 1: The underlying precision-recall sweep
    println!("1. Precision-Recall Sweep");
    let pr = precision_recall_curve(&labels, &scores)?;
    println!("   Threshold | Precision | Recall");
    println!("   ----------|-----------|-------");
    for (i, threshold) in pr.thresholds.iter().enumerate() {
        println!("   {:>9.2} | {:>9.4} | {:>6.4}", threshold, pr.precision[i], pr.recall[i]);
    }
    println!();

    // Example 2: MCC-F1 curve and the point closest to (1, 1)
    println!("2. Best Threshold on the MCC-F1 Curve");
    let curve = generate_curve(&labels, &scores)?;
    let config = MetricConfig::default();
    let score = calculate_mcc_f1_metric(&curve.mcc, &curve.f1, &curve.thresholds, &config)?;
    let best = curve.point(score.best_index).ok_or("best index out of range")?;
    println!("   Best threshold: {:.2}", best.threshold);
    println!("   Normalized MCC: {:.4}", best.mcc);
    println!("   F1 score:       {:.4}", best.f1);
    println!("   Distance:       {:.4}", score.distances[score.best_index]);
    println!();

    // Example 3: Effect of the subrange count
    println!("3. Subrange Count (W)");
    for w in [2, 5, 10, 50, 100, 500] {
        let config = MetricConfig::new().with_subranges(w);
        let score = calculate_mcc_f1_metric(&curve.mcc, &curve.f1, &curve.thresholds, &config)?;
        println!(
            "   W = {:>3}: metric = {:.4}, best threshold = {:.2}",
            w, score.metric, score.best_threshold
        );
    }
    println!();

    // Example 4: Settings from JSON
    println!("4. Settings From JSON");
    let config = load_config_from_string(r#"{ "subranges": 20, "close_last_subrange": true }"#)?;
    let score = calculate_mcc_f1_metric(&curve.mcc, &curve.f1, &curve.thresholds, &config)?;
    println!("   {:?}", config);
    println!("   {}", score.summary_string());
    println!();

    println!("=== Example Complete ===");

    Ok(())
}
