//! Hashing a record by combining its field hashes.
//!
//! Rule: `hash(name) ^ (hash(age) << 1)`. Field hashes come from `FxHasher`,
//! whose output depends only on the input, so the combined value is the same
//! in every run and process.

use rustc_hash::FxHasher;
use std::collections::HashMap;
use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};

type FieldHasher = BuildHasherDefault<FxHasher>;

/// If a == b, then hash(a) must == hash(b): equality compares both fields, the
/// hash combines both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }
}

pub fn field_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    FieldHasher::default().hash_one(value)
}

pub fn person_hash(person: &Person) -> u64 {
    field_hash(&person.name) ^ (field_hash(&person.age) << 1)
}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(person_hash(self));
    }
}

pub fn word_count<'a, I>(words: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = HashMap::new();
    for word in words {
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    counts
}
