//! Partial application and argument reordering with closures.
//!
//! A bound callable is a closure that captures the fixed arguments. Captures by
//! value copy the argument at bind time; captures by reference (`&Cell<_>`,
//! `&mut _`) alias it, so mutations made after binding are observed by the call.

use std::cell::Cell;

pub fn increment_by_value(element: &mut i32, increment: &i32) {
    *element += increment;
}

/// Fix the first argument: `bind(f, a, _1)`.
pub fn bind_front<A, B, R, F>(f: F, a: A) -> impl Fn(B) -> R
where
    F: Fn(A, B) -> R,
    A: Clone,
{
    move |b| f(a.clone(), b)
}

/// Fix the last argument: `bind(f, _1, b)`.
pub fn bind_back<A, B, R, F>(f: F, b: B) -> impl Fn(A) -> R
where
    F: Fn(A, B) -> R,
    B: Clone,
{
    move |a| f(a, b.clone())
}

/// Swap the two arguments: `bind(f, _2, _1)`.
pub fn flip<A, B, R, F>(f: F) -> impl Fn(B, A) -> R
where
    F: Fn(A, B) -> R,
{
    move |b, a| f(a, b)
}

/// Feed one call-site argument to both parameters: `bind(f, _1, _1)`.
pub fn duplicate<A, R, F>(f: F) -> impl Fn(A) -> R
where
    F: Fn(A, A) -> R,
    A: Clone,
{
    move |a| f(a.clone(), a)
}

/// Add `increment` to every element, reading the increment through the cell on
/// each call. `on_each` runs after every element and may change the increment.
pub fn increment_all<F>(values: &mut [i32], increment: &Cell<i32>, mut on_each: F)
where
    F: FnMut(&Cell<i32>),
{
    let bound = |element: &mut i32| increment_by_value(element, &increment.get());
    for element in values.iter_mut() {
        bound(element);
        on_each(increment);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    pub total: i64,
}

impl Counter {
    pub fn add(&mut self, n: i64) {
        self.total += n;
    }

    pub fn scaled(&self, factor: i64) -> i64 {
        self.total * factor
    }
}

/// Member binding with the object bound by reference: `bind(&Counter::add, &c, _1)`.
pub fn bind_member(counter: &mut Counter) -> impl FnMut(i64) + '_ {
    move |n| Counter::add(counter, n)
}

/// Member binding with the object copied at bind time: `bind(&Counter::scaled, c, _1)`.
pub fn bind_member_by_value(counter: &Counter) -> impl Fn(i64) -> i64 {
    let snapshot = counter.clone();
    move |factor| snapshot.scaled(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sub(a: i32, b: i32) -> i32 {
        a - b
    }

    fn describe(name: &str, age: u32) -> String {
        format!("{} is {}", name, age)
    }

    #[test]
    fn test_for_each_with_bound_increment() {
        let mut values = vec![1, 2, 3, 4, 5];
        let increment = 10;
        values
            .iter_mut()
            .for_each(|element| increment_by_value(element, &increment));
        assert_eq!(values, vec![11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_reference_binding_observes_mutation() {
        let mut values = vec![1, 2, 3];
        let increment = Cell::new(10);
        increment_all(&mut values, &increment, |inc| inc.set(inc.get() + 1));
        assert_eq!(values, vec![11, 13, 15]);
        assert_eq!(increment.get(), 13);
    }

    #[test]
    fn test_value_binding_is_a_copy() {
        let mut base = 10;
        let bound = bind_back(sub, base);
        base += 5;
        assert_eq!(bound(100), 90);
        assert_eq!(base, 15);
    }

    #[test]
    fn test_placeholder_order() {
        let swapped = flip(sub);
        assert_eq!(swapped(1, 10), 9);
        assert_eq!(flip(describe)(30, "Ann"), "Ann is 30");
        assert_eq!(duplicate(|a: i32, b: i32| a * b)(7), 49);
    }

    #[test]
    fn test_member_binding() {
        let mut counter = Counter::default();
        {
            let mut add = bind_member(&mut counter);
            add(5);
            add(7);
        }
        assert_eq!(counter.total, 12);

        let scaled = bind_member_by_value(&counter);
        counter.add(100);
        assert_eq!(scaled(2), 24);
        assert_eq!(counter.total, 112);
    }

    proptest! {
        #[test]
        fn prop_bound_equals_direct_call(a in -10_000i32..10_000, b in -10_000i32..10_000) {
            prop_assert_eq!(bind_front(sub, a)(b), sub(a, b));
            prop_assert_eq!(bind_back(sub, b)(a), sub(a, b));
            prop_assert_eq!(flip(sub)(b, a), sub(a, b));
            prop_assert_eq!(duplicate(sub)(a), sub(a, a));
        }
    }
}
