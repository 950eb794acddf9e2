//! Binding arguments with closures
//!
//! Run with: cargo run --bin bind

use std::cell::Cell;
use std_feature_demos::binding::{
    bind_back, bind_front, bind_member, bind_member_by_value, duplicate, flip,
    increment_all, increment_by_value, Counter,
};
use std_feature_demos::report;

fn greet(greeting: &str, name: &str) -> String {
    format!("{}, {}!", greeting, name)
}

fn main() {
    report::section("for_each with a bound increment");
    let mut vec = vec![1, 2, 3, 4, 5];
    let increment_value = 10;
    vec.iter_mut()
        .for_each(|element| increment_by_value(element, &increment_value));
    println!("{}", report::joined(&vec));

    println!();
    report::section("Bound by Reference");
    let mut values = vec![1, 2, 3, 4, 5];
    let increment = Cell::new(10);
    increment_all(&mut values, &increment, |inc| inc.set(inc.get() + 1));
    println!("Increment grows after each element: {}", report::joined(&values));
    println!("Increment afterwards: {}", increment.get());

    println!();
    report::section("Placeholders");
    let hello = bind_front(greet, "Hello");
    println!("bind(greet, \"Hello\", _1)(\"Ann\")   -> {}", hello("Ann"));
    let to_bob = bind_back(greet, "Bob");
    println!("bind(greet, _1, \"Bob\")(\"Hi\")      -> {}", to_bob("Hi"));
    let swapped = flip(greet);
    println!("bind(greet, _2, _1)(\"Cy\", \"Hey\")  -> {}", swapped("Cy", "Hey"));
    let square = duplicate(|a: i32, b: i32| a * b);
    println!("bind(mul, _1, _1)(7)               -> {}", square(7));

    println!();
    report::section("Member Functions");
    let mut counter = Counter::default();
    {
        let mut add = bind_member(&mut counter);
        for n in 1..=4 {
            add(n);
        }
    }
    println!("bind(&Counter::add, &c, _1) over 1..=4 -> total = {}", counter.total);
    let times = bind_member_by_value(&counter);
    counter.add(100);
    println!(
        "bind(&Counter::scaled, c, _1)(3) -> {} (copy taken before total became {})",
        times(3),
        counter.total
    );

    report::key_points(&[
        "A closure is the bound callable; its captures are the bound arguments",
        "Capture by value copies at bind time, capture by reference aliases",
        "Placeholder order is the order of the closure's parameters",
    ]);
}
