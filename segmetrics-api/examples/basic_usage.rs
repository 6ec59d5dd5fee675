//! Basic usage: score an image tree and page through the stored results

use segmetrics_api::{
    evaluate_paths, Config, Evaluator, ImageDirectory, ImageKind, JsonFileStore,
    DEFAULT_PER_PAGE,
};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = env::args().nth(1).unwrap_or_else(|| "imagens".to_string());
    let source = ImageDirectory::new(&root);

    // Method 1: one-off comparison of explicit files
    println!("=== Method 1: Convenience Function ===");
    let mask = source.dir(ImageKind::Mask).join("1.png");
    let segment = source.dir(ImageKind::Segmented).join("1.png");
    match evaluate_paths(&[mask], &[segment]) {
        Ok(records) => {
            for record in &records {
                println!(
                    "  {} vs {}: IoU {:.2}%, Dice {:.2}%",
                    record.mask_name, record.segment_name, record.iou, record.dice
                );
            }
        }
        Err(e) => println!("  skipped: {e}"),
    }

    // Method 2: whole tree, results replaced in the metric store
    println!("\n=== Method 2: Refresh ===");
    let evaluator = Evaluator::with_config(Config::builder().threads(Some(2)).build()?)?;
    let store = JsonFileStore::default();
    let result = evaluator.refresh(&source, &store)?;
    println!(
        "Scored {} pair(s), skipped {}, in {:.1}ms ({:?})",
        result.records.len(),
        result.skipped.len(),
        result.metadata.processing_time_ms,
        result.metadata.execution_mode
    );

    // Method 3: first page of the comparison view
    println!("\n=== Method 3: Comparison Page ===");
    let page = evaluator.comparison_page(&source, &store, 1, DEFAULT_PER_PAGE)?;
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
