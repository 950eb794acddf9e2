//! Hashing a custom record
//!
//! Run with: cargo run --bin hash_example

use std::collections::HashMap;
use std_feature_demos::record_hash::{field_hash, person_hash, word_count, Person};
use std_feature_demos::report;

fn main() {
    report::section("Combined Field Hash");
    let p = Person::new("John Doe", 30);
    println!("hash(name)            = {}", field_hash(&p.name));
    println!("hash(age)             = {}", field_hash(&p.age));
    println!("Hash value of Person is: {}", person_hash(&p));

    let same = Person::new("John Doe", 30);
    if person_hash(&same) == person_hash(&p) {
        report::status_ok("Equal records produce equal hashes");
    }

    println!();
    report::section("Person as a HashMap Key");
    let mut visits: HashMap<Person, u32> = HashMap::new();
    *visits.entry(p.clone()).or_insert(0) += 1;
    *visits.entry(same).or_insert(0) += 1;
    *visits.entry(Person::new("Jane Doe", 28)).or_insert(0) += 1;
    println!("Visits by {}: {}", p.name, visits[&p]);
    println!("Distinct people: {}", visits.len());

    println!();
    report::section("Word Count");
    let counts = word_count(["hello", "world", "world"]);
    println!("Count of 'hello': {}", counts.get("hello").copied().unwrap_or(0));
    println!("Count of 'world': {}", counts.get("world").copied().unwrap_or(0));

    report::key_points(&[
        "If a == b, then hash(a) must == hash(b)",
        "Combine field hashes with a rule that uses every field compared by ==",
        "A fixed-key hasher makes the printed value stable across runs",
    ]);
}
