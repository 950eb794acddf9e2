//! Multiple values per key with equal_range
//!
//! Run with: cargo run --bin multimap

use std_feature_demos::multimap::MultiMap;
use std_feature_demos::report;

fn print_key(mm: &MultiMap<i32, i32>, key: i32) {
    println!("\nElements with key {}:", key);
    for (k, v) in mm.equal_range(&key) {
        println!("Key: {}, Value: {}", k, v);
    }
}

fn main() {
    report::section("MultiMap");
    let mut mm = MultiMap::new();

    mm.insert(1, 10);
    mm.insert(2, 20);
    mm.insert(2, 25); // same key
    mm.insert(3, 30);
    mm.insert(3, 35); // same key
    mm.insert(3, 40); // same key

    println!("All elements in the multimap:");
    for (k, v) in &mm {
        println!("Key: {}, Value: {}", k, v);
    }

    print_key(&mm, 2);
    print_key(&mm, 3);

    println!();
    if mm.equal_range(&4).next().is_none() {
        report::status_ok("Key 4 is absent: empty range");
    }
    println!("Values under key 3: {}", mm.count(&3));

    report::key_points(&[
        "insert never replaces: every value is kept",
        "Entries are ordered by key, then by insertion order",
        "equal_range yields all entries for one key, or nothing",
    ]);
}
