//! Selecting an implementation by type kind at compile time
//!
//! Run with: cargo run --bin enable_if

use std_feature_demos::overload::{describe, Classifier};
use std_feature_demos::report;

fn main() {
    report::section("Function Form");
    println!("{}", describe(10)); // integral implementation
    println!("{}", describe(10.5)); // floating-point implementation
    println!("{}", describe(42u64));
    // describe("test"); // error: `&str` has no NumericKind

    println!();
    report::section("Class Form");
    let int_class = Classifier::<i32>::new();
    println!("{}", int_class.display());

    let float_class = Classifier::<f64>::new();
    println!("{}", float_class.display());
    // Classifier::<String>::new(); // error: `String` has no NumericKind

    report::key_points(&[
        "Each numeric type names exactly one kind",
        "Implementations are written once per kind, not once per type",
        "A type without a kind has nothing to select and fails to build",
    ]);
}
