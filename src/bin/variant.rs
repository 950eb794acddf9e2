//! A tagged union: assign, get, get_if, holds and visit
//!
//! Run with: cargo run --bin variant

use std_feature_demos::report;
use std_feature_demos::variant::{PrintVisitor, Value};
use std_feature_demos::DemoError;

fn main() -> Result<(), DemoError> {
    report::section("Tagged Union");
    let mut var = Value::default();

    var.set(10); // store an i32
    let value: i32 = *var.get::<i32>()?;
    println!("Stored value is an int: {}", value);

    var.set(3.5); // now an f64
    let double_value: f64 = *var.get::<f64>()?;
    println!("Stored value is a double: {}", double_value);

    var.set("Hello"); // a String
    match var.get_if::<String>() {
        Some(text) => println!("Stored value is a string: {}", text),
        None => println!("Stored value is not a string!"),
    }

    var.set(3.5);
    if var.holds::<f64>() {
        println!("Stored value is a double: {}", var.get::<f64>()?);
    } else {
        println!("Stored value is not a double!");
    }

    var.set("Hello");
    println!("{}", var.visit(&PrintVisitor));

    println!();
    report::section("Wrong Alternative");
    var.set(10);
    if var.get_if::<String>().is_none() {
        report::status_ok("get_if::<String> on an i32 reports absent");
    }
    if let Err(err) = var.get::<String>() {
        report::status_warn(&err.to_string());
    }

    report::key_points(&[
        "Exactly one alternative is active at a time",
        "get fails on a mismatch, get_if and holds never fail",
        "visit calls the one handler for the active alternative",
    ]);

    Ok(())
}
