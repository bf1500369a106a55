//! Stream Preview Example
//!
//! Shows how the hyperplane drifts and how the class balance follows it.
//!
//! Run with: cargo run --example stream_preview

use moving_hyperplane::{GeneratorConfig, Label, MovingHyperplane, StreamGenerator};

fn main() -> anyhow::Result<()> {
    println!("=== Moving Hyperplane Stream Preview ===\n");

    let config = GeneratorConfig {
        seed: 2024,
        example_count: 2000,
        dimensions: 5,
        noise_fraction: 0.05,
        weights_per_round: 2,
        drift_magnitude: 1.0,
    };
    let mut generator = MovingHyperplane::new(config)?;

    println!("Columns: {}", generator.schema().columns().join(", "));
    println!("Initial weights: {:?}", generator.hyperplane().weights());
    println!("Initial threshold: {:.4}\n", generator.hyperplane().threshold());

    println!("First examples:");
    for example in generator.iter().take(5) {
        let features: Vec<String> = example
            .features
            .iter()
            .map(|x| format!("{:.3}", x))
            .collect();
        println!(
            "  {:>7}  {:<8}  [{}]",
            example.row.to_string(),
            example.label.as_str(),
            features.join(", ")
        );
    }

    println!("\nClass balance per window of 400 examples:");
    for window in 0..5 {
        let positives = generator
            .iter()
            .take(400)
            .filter(|e| e.label == Label::Positive)
            .count();
        println!(
            "  window {}: {:.1}% positive, threshold {:.4}",
            window,
            positives as f64 / 4.0,
            generator.hyperplane().threshold()
        );
    }

    println!("\nFinal weights: {:?}", generator.hyperplane().weights());
    println!("Rows emitted: {}", generator.rows_emitted());

    Ok(())
}
