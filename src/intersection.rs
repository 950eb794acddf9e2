//! Intersection of two sorted sequences by a single merge scan.
//!
//! Both inputs must be sorted by the comparator in use. The output keeps the
//! first sequence's elements, in order, with each value appearing
//! `min(count in a, count in b)` times. O(n + m), no hashing, no sorting.

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FusedIterator, Peekable};

pub struct Intersection<I, J, F>
where
    I: Iterator,
    J: Iterator,
{
    a: Peekable<I>,
    b: Peekable<J>,
    cmp: F,
}

impl<I, J, F> Iterator for Intersection<I, J, F>
where
    I: Iterator,
    J: Iterator,
    F: FnMut(&I::Item, &J::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let order = {
                let x = self.a.peek()?;
                let y = self.b.peek()?;
                (self.cmp)(x, y)
            };
            match order {
                Ordering::Less => {
                    self.a.next();
                }
                Ordering::Greater => {
                    self.b.next();
                }
                Ordering::Equal => {
                    self.b.next();
                    return self.a.next();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, a_upper) = self.a.size_hint();
        let (_, b_upper) = self.b.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (x, y) => x.or(y),
        };
        (0, upper)
    }
}

impl<I, J, F> FusedIterator for Intersection<I, J, F>
where
    I: FusedIterator,
    J: FusedIterator,
    F: FnMut(&I::Item, &J::Item) -> Ordering,
{
}

/// Intersection of two sequences sorted by `cmp`.
pub fn set_intersection_by<A, B, F>(a: A, b: B, cmp: F) -> Intersection<A::IntoIter, B::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(&A::Item, &B::Item) -> Ordering,
{
    Intersection {
        a: a.into_iter().peekable(),
        b: b.into_iter().peekable(),
        cmp,
    }
}

/// Intersection of two sequences sorted by `Ord`. Collect into any container:
///
/// ```
/// use std::collections::BTreeSet;
/// use std_feature_demos::intersection::set_intersection;
///
/// let a = BTreeSet::from([1, 2, 3, 4, 5]);
/// let b = BTreeSet::from([3, 4, 5, 6, 7]);
/// let both: Vec<i32> = set_intersection(&a, &b).copied().collect();
/// assert_eq!(both, vec![3, 4, 5]);
/// ```
pub fn set_intersection<A, B, T>(
    a: A,
    b: B,
) -> Intersection<A::IntoIter, B::IntoIter, impl FnMut(&T, &T) -> Ordering>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: Ord,
{
    set_intersection_by(a, b, |x: &T, y: &T| x.cmp(y))
}

/// Ordered by name only; `age` does not take part in comparisons.
#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Person {}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}
