//! Intersection of sorted sequences
//!
//! Run with: cargo run --bin set_intersection

use std::collections::{BTreeSet, LinkedList};
use std_feature_demos::intersection::{set_intersection, set_intersection_by, Person};
use std_feature_demos::report;

fn example1() {
    report::section("Example 1: Intersection of Sets (Integers)");
    let set1 = BTreeSet::from([1, 2, 3, 4, 5]);
    let set2 = BTreeSet::from([3, 4, 5, 6, 7]);

    let intersection: BTreeSet<i32> = set_intersection(&set1, &set2).copied().collect();

    println!("Intersection: {}\n", report::joined(&intersection)); // 3 4 5
}

fn example2() {
    report::section("Example 2: Intersection of Lists (Strings)");
    let list1: LinkedList<String> = ["apple", "banana", "cherry", "date"]
        .into_iter()
        .map(String::from)
        .collect();
    let list2: LinkedList<String> = ["cherry", "date", "fig", "grape"]
        .into_iter()
        .map(String::from)
        .collect();

    let intersection: LinkedList<String> = set_intersection(&list1, &list2).cloned().collect();

    println!("Intersection: {}\n", report::joined(&intersection)); // cherry date
}

fn example3() {
    report::section("Example 3: Intersection of Custom Structs");
    let people1 = BTreeSet::from([
        Person::new("Alice", 30),
        Person::new("Bob", 25),
        Person::new("Charlie", 35),
    ]);
    let people2 = BTreeSet::from([
        Person::new("Bob", 25),
        Person::new("David", 40),
        Person::new("Alice", 30),
    ]);

    let intersection: BTreeSet<Person> = set_intersection(&people1, &people2).cloned().collect();

    println!("Intersection: {}\n", report::joined(&intersection)); // Alice (30) Bob (25)
}

fn example4() {
    report::section("Example 4: Intersection with Different Container Types");
    let vec1 = vec![1, 2, 3, 4, 5];
    let set1 = BTreeSet::from([4, 5, 6, 7, 8]);

    let intersection: Vec<i32> =
        set_intersection_by(vec1, &set1, |a: &i32, b: &&i32| a.cmp(*b)).collect();

    println!("Intersection: {}\n", report::joined(&intersection)); // 4 5
}

fn main() {
    example1();
    example2();
    example3();
    example4();

    report::key_points(&[
        "Both inputs must be sorted by the same ordering",
        "One linear merge pass, O(n + m)",
        "Elements are taken from the first sequence",
        "Any FromIterator container can receive the result",
    ]);
}
