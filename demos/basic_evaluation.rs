//! Basic example of evaluating classifiers with the MCC-F1 metric.

use mcc_f1::{
    evaluate, evaluate_batch, evaluate_with_observer, ClassifierScores, MetricConfig,
    TracingReporter,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== MCC-F1 Evaluation Example ===\n");

    // Ground truth and prediction scores for a small test set
    let labels = vec![true, false, true, true, false, false, true, false, true, false];
    let scores = vec![0.92, 0.35, 0.71, 0.48, 0.52, 0.08, 0.88, 0.61, 0.43, 0.19];

    // Example 1: Single classifier with default settings
    println!("1. Single Classifier (W = 100)");
    let evaluation = evaluate(&labels, &scores, None)?;

    println!("   Threshold | Norm. MCC | F1 Score | Distance");
    println!("   ----------|-----------|----------|---------");
    for (i, point) in evaluation.curve.points().enumerate() {
        let marker = if i == evaluation.score.best_index { " <- best" } else { "" };
        println!(
            "   {:>9.2} | {:>9.4} | {:>8.4} | {:>8.4}{}",
            point.threshold, point.mcc, point.f1, evaluation.score.distances[i], marker
        );
    }
    println!();
    println!("   {}", evaluation.score.summary_string());
    println!(
        "   Non-empty subranges: {} of {}",
        evaluation.score.non_empty_subranges(),
        evaluation.score.subranges.len()
    );
    println!();

    // Example 2: Closing the last subrange keeps the top MCC value
    println!("2. Closed Last Subrange");
    let config = MetricConfig::new().with_closed_last_subrange(true);
    let closed = evaluate(&labels, &scores, Some(config))?;
    println!("   Half-open: {:.4}", evaluation.metric());
    println!("   Closed:    {:.4}", closed.metric());
    println!();

    // Example 3: Report through tracing
    println!("3. Reporting Through an Observer");
    let reporter = TracingReporter::with_label("example");
    evaluate_with_observer(&labels, &scores, None, &reporter)?;
    println!();

    // Example 4: Compare several classifiers
    println!("4. Comparing Classifiers");
    let classifiers = vec![
        ClassifierScores::new("model_a", labels.clone(), scores.clone()),
        ClassifierScores::new(
            "model_b",
            labels.clone(),
            vec![0.55, 0.45, 0.52, 0.50, 0.49, 0.40, 0.60, 0.51, 0.47, 0.44],
        ),
        ClassifierScores::new(
            "model_c",
            labels,
            vec![0.99, 0.10, 0.95, 0.90, 0.20, 0.05, 0.97, 0.15, 0.85, 0.12],
        ),
    ];

    for result in evaluate_batch(&classifiers, None) {
        match result.result {
            Ok(evaluation) => println!(
                "   {:<8} metric = {:.4}, best threshold = {:.2}",
                result.name,
                evaluation.metric(),
                evaluation.best_threshold()
            ),
            Err(err) => println!("   {:<8} failed: {}", result.name, err),
        }
    }
    println!();

    println!("=== Example Complete ===");

    Ok(())
}
