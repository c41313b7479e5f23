//! Basic example demonstrating a full comparison run
//!
//! Run with: cargo run --example basic -p selection

use dataset::TableFrame;
use modelkit::{ridge_regressor, ModelUnit};
use selection::prelude::*;

fn main() -> Result<()> {
    println!("=== selection Basic Example ===\n");

    // 1. A small synthetic demand series: trend plus weekly promotion lift
    let t: Vec<f64> = (0..120).map(|i| i as f64).collect();
    let promo: Vec<f64> = (0..120).map(|i| ((i / 7) % 2) as f64).collect();
    let demand: Vec<f64> = (0..120)
        .map(|i| 40.0 + 1.2 * i as f64 + 8.0 * (((i / 7) % 2) as f64))
        .collect();
    let frame = TableFrame::from_columns(
        "demand",
        "demand",
        vec![
            ("t".to_string(), t),
            ("promo".to_string(), promo),
            ("demand".to_string(), demand),
        ],
    )?;
    println!("1. Dataset: '{}', {} rows", frame.name(), frame.len());

    // 2. Configure the run
    let config = ComparisonConfig::default()
        .search_method("grid")
        .cv_folds(5)
        .resamples(5)
        .seed(42);
    println!(
        "2. Config: {} search, {} folds, {} resamples\n",
        config.search_method, config.cv_folds, config.resamples
    );

    // 3. Compare the ridge regressor candidates
    let tmp = tempfile::tempdir()?;
    let layout = StorageLayout::new(tmp.path());
    let store = JsonModelStore::from_layout(&layout);
    let reporter = LogReporter::new(Role::Estimator);
    let descriptor = ridge_regressor()?;

    let report = ModelComparison::new(config)
        .compare_estimator(&frame, &descriptor, &store, &reporter)?;

    println!("3. Candidates on '{}':", report.dataset);
    for entry in &report.summary.entries {
        println!(
            "   {:14} loss {:>10.4}  bias {:>10.4}  variance {:>10.4}",
            entry.label, entry.loss, entry.bias, entry.variance
        );
    }
    for (label, reason) in &report.failures {
        println!("   {label:14} FAILED: {reason}");
    }

    println!("\n4. Winner: '{}'", report.winner);
    let key = descriptor.storage_key();
    println!("   persisted at {}", layout.model_path(&key).display());

    // 5. The persisted model can be reloaded and queried directly
    let restored: ModelUnit = store.load(&key)?;
    let next = restored.predict(&[vec![120.0, 0.0]])?;
    println!("   forecast for t = 120: {:.2}", next[0]);

    println!("\n=== Example Complete ===");
    Ok(())
}
