//! Ordered-map insertion with and without a position hint
//!
//! Run with: cargo run --release --bin map_insert_hint -- [ELEMENTS] [--seed N]

use std_feature_demos::config::BenchConfig;
use std_feature_demos::hinted_insert::{generate_sorted_keys, run_benchmark};
use std_feature_demos::report;
use std_feature_demos::timing;
use std_feature_demos::DemoError;

const DEFAULT_ELEMENTS: usize = 10_000_000;

fn main() -> Result<(), DemoError> {
    let config = BenchConfig::from_env(DEFAULT_ELEMENTS)?;
    let mut rng = config.rng();

    report::section("Hinted vs Unhinted Ordered Insertion");

    let (keys, generate_time) = timing::time(|| generate_sorted_keys(config.elements, &mut rng));
    println!(
        "Generated and sorted {} random keys in {} ms\n",
        keys.len(),
        generate_time.as_millis()
    );

    let result = run_benchmark(&keys)?;
    println!(
        "Time taken for {} insertions with hint: {} ms",
        result.elements,
        result.with_hint.as_millis()
    );
    println!(
        "Time taken for {} insertions without hint: {} ms",
        result.elements,
        result.without_hint.as_millis()
    );

    let dropped = result.elements - result.distinct;
    if dropped > 0 {
        report::status_warn(&format!(
            "{} duplicate keys kept their first value",
            dropped
        ));
    }
    report::status_ok(&format!("Both maps hold the same {} entries", result.distinct));

    report::key_points(&[
        "A correct hint turns an O(log n) search into O(1) for sorted input",
        "A wrong hint only costs a fallback to ordinary insertion",
        "Duplicate keys keep the first value in both modes",
    ]);

    Ok(())
}
