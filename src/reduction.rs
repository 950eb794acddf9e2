//! Eight reductions computed in one parallel pass.
//!
//! Each rayon split folds into a private [`Reductions`] starting from the
//! identities, and splits are joined with [`Reductions::combine`]. Every
//! operator is associative and commutative except subtraction: `diff` folds
//! `diff -= x` inside a split and partial results are combined by addition, so
//! the final difference is always `-sum` whatever the partitioning.

use crate::error::DemoError;
use rayon::prelude::*;

pub const INPUT_LEN: usize = 10;

pub const VALUES: [i64; INPUT_LEN] = [0xF, 0xE, 0xD, 0xC, 0xB, 0xA, 0x9, 0x8, 0x7, 0x6];

/// Sources for the logical reductions. The last entry is false.
pub const FLAGS: [bool; INPUT_LEN] = [true, true, true, true, true, true, true, true, true, false];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reductions {
    pub sum: i64,
    pub product: i64,
    pub diff: i64,
    pub bit_and: i64,
    pub bit_or: i64,
    pub bit_xor: i64,
    pub log_and: bool,
    pub log_or: bool,
}

impl Reductions {
    pub const fn identity() -> Self {
        Reductions {
            sum: 0,
            product: 1,
            diff: 0,
            bit_and: !0,
            bit_or: 0,
            bit_xor: 0,
            log_and: true,
            log_or: false,
        }
    }

    /// Fold one element into this partial result. Arithmetic wraps on overflow.
    pub fn accumulate(mut self, value: i64, flag: bool) -> Self {
        self.sum = self.sum.wrapping_add(value);
        self.product = self.product.wrapping_mul(value);
        self.diff = self.diff.wrapping_sub(value);
        self.bit_and &= value;
        self.bit_or |= value;
        self.bit_xor ^= value;
        self.log_and = self.log_and & flag;
        self.log_or = self.log_or | flag;
        self
    }

    /// Join two partial results.
    pub fn combine(self, other: Self) -> Self {
        Reductions {
            sum: self.sum.wrapping_add(other.sum),
            product: self.product.wrapping_mul(other.product),
            diff: self.diff.wrapping_add(other.diff),
            bit_and: self.bit_and & other.bit_and,
            bit_or: self.bit_or | other.bit_or,
            bit_xor: self.bit_xor ^ other.bit_xor,
            log_and: self.log_and && other.log_and,
            log_or: self.log_or || other.log_or,
        }
    }
}

impl Default for Reductions {
    fn default() -> Self {
        Self::identity()
    }
}

/// Reduce on the global rayon pool.
pub fn reduce_parallel(values: &[i64], flags: &[bool]) -> Reductions {
    values
        .par_iter()
        .zip(flags.par_iter())
        .fold(Reductions::identity, |acc, (&value, &flag)| {
            acc.accumulate(value, flag)
        })
        .reduce(Reductions::identity, Reductions::combine)
}

/// Reduce on a dedicated pool of `threads` workers, splitting down to one element.
pub fn reduce_with_threads(
    values: &[i64],
    flags: &[bool],
    threads: usize,
) -> Result<Reductions, DemoError> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    Ok(pool.install(|| {
        values
            .par_iter()
            .zip(flags.par_iter())
            .with_max_len(1)
            .fold(Reductions::identity, |acc, (&value, &flag)| {
                acc.accumulate(value, flag)
            })
            .reduce(Reductions::identity, Reductions::combine)
    }))
}

/// Single-threaded left fold, the reference result.
pub fn reduce_sequential(values: &[i64], flags: &[bool]) -> Reductions {
    values
        .iter()
        .zip(flags)
        .fold(Reductions::identity(), |acc, (&value, &flag)| {
            acc.accumulate(value, flag)
        })
}
