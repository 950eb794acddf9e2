// Standard Library Feature Demos
// Each module backs one demo binary in src/bin/. Modules share nothing except
// the error type and the console/timing helpers.

//! # Standard Library Feature Demos
//!
//! ## Collections
//! - [`hinted_insert`]: ordered-map insertion with and without a position hint
//! - [`multimap`]: duplicate keys with `equal_range`
//! - [`map_compare`]: `BTreeMap` vs `HashMap` vs `FxHashMap` timings
//! - [`intersection`]: merge-style intersection of sorted sequences
//!
//! ## Parallelism
//! - [`reduction`]: eight reductions in a single rayon pass
//!
//! ## Functions and types
//! - [`binding`]: partial application and argument reordering with closures
//! - [`overload`]: compile-time implementation selection by type kind
//! - [`type_traits`]: associated-const type predicates
//! - [`record_hash`]: explicit field-hash combination for a record
//! - [`variant`]: a closed tagged union with typed access and visitation

pub mod error;
pub mod report;
pub mod config;
pub mod timing;

pub mod hinted_insert;
pub mod reduction;
pub mod binding;
pub mod overload;
pub mod record_hash;
pub mod intersection;
pub mod multimap;
pub mod type_traits;
pub mod map_compare;
pub mod variant;

pub use error::DemoError;
