//! BTreeMap vs HashMap: insert, lookup and erase
//!
//! Run with: cargo run --release --bin map_vs_hashmap -- [ELEMENTS] [--seed N]

use std_feature_demos::config::BenchConfig;
use std_feature_demos::map_compare::{compare, shuffled_keys};
use std_feature_demos::report;
use std_feature_demos::DemoError;

const DEFAULT_ELEMENTS: usize = 1_000_000;

fn main() -> Result<(), DemoError> {
    let config = BenchConfig::from_env(DEFAULT_ELEMENTS)?;
    let mut rng = config.rng();
    let keys = shuffled_keys(config.elements, &mut rng)?;

    report::section(&format!("Ordered vs Hash Maps ({} keys)", config.elements));

    let result = compare(&keys)?;

    for t in &result.timings {
        println!("{} insert duration: {:.6} seconds", t.name, t.insert.as_secs_f64());
    }
    for t in &result.timings {
        println!("{} find duration: {:.6} seconds", t.name, t.lookup.as_secs_f64());
    }
    for t in &result.timings {
        println!("{} erase duration: {:.6} seconds", t.name, t.erase.as_secs_f64());
    }

    println!();
    report::status_ok("All maps held identical pairs after insertion");

    report::key_points(&[
        "BTreeMap: O(log n) per operation, keys kept sorted",
        "HashMap: amortized O(1) per operation, no order",
        "FxHashMap: faster non-cryptographic hash for trusted keys",
    ]);

    Ok(())
}
