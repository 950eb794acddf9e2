//! Compile-time type predicates
//!
//! Run with: cargo run --bin type_traits

use std_feature_demos::class_type;
use std_feature_demos::report;
use std_feature_demos::type_traits::{Const, TraitReport, TypeTraits};

struct MyClass;
class_type!(MyClass);

fn check_type_traits<T: TypeTraits + ?Sized>(label: &str) {
    println!("{}:", label);
    println!("{}", TraitReport::of::<T>());
}

fn main() {
    report::section("Type Traits");

    check_type_traits::<i32>("i32");
    check_type_traits::<Const<i32>>("const i32");
    check_type_traits::<*const i32>("*const i32");
    check_type_traits::<[i32]>("[i32]");
    check_type_traits::<MyClass>("MyClass");

    report::key_points(&[
        "Every answer is an associated const, fixed when the program is built",
        "Predicates default to false; an impl opts in to the ones that hold",
        "Rust has no const-qualified types, so Const<T> marks one",
    ]);
}
