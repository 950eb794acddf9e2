//! Eight reductions in one parallel pass
//!
//! Run with: cargo run --bin parallel_reduction

use std_feature_demos::reduction::{reduce_parallel, reduce_with_threads, FLAGS, VALUES};
use std_feature_demos::report;
use std_feature_demos::DemoError;

fn main() -> Result<(), DemoError> {
    report::section("Parallel Reductions");
    println!(
        "Running on {} threads (rayon global pool)\n",
        rayon::current_num_threads()
    );

    let result = reduce_parallel(&VALUES, &FLAGS);

    println!("Sum = {}", result.sum);
    println!("Product = {}", result.product);
    println!("Difference = {}", result.diff);
    println!("Bitwise AND = 0x{:x}", result.bit_and);
    println!("Bitwise OR = 0x{:x}", result.bit_or);
    println!("Bitwise XOR = 0x{:x}", result.bit_xor);
    println!("Logical AND = {}", u8::from(result.log_and));
    println!("Logical OR = {}", u8::from(result.log_or));

    println!();
    report::section("Partition Independence");
    for threads in 1..=num_cpus::get().min(8) {
        let other = reduce_with_threads(&VALUES, &FLAGS, threads)?;
        if other == result {
            report::status_ok(&format!("{} thread(s): same result", threads));
        } else {
            report::status_warn(&format!("{} thread(s): {:?}", threads, other));
        }
    }

    report::key_points(&[
        "Each split folds into private accumulators starting from the identities",
        "Splits are combined with the operator's own join: +, *, &, |, ^, &&, ||",
        "Difference partials are joined by addition, so it always equals -sum",
    ]);

    Ok(())
}
