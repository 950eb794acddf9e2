//! Type predicates answered at compile time through associated constants.
//!
//! Every predicate defaults to `false`; an impl turns on the ones that hold.
//! `bool` and `char` are neither integral nor floating point here: Rust does
//! not treat them as numbers. Rust has no const-qualified types, so [`Const<T>`]
//! stands in for `const T`.

use std::fmt;
use std::marker::PhantomData;

pub trait TypeTraits {
    const IS_INTEGRAL: bool = false;
    const IS_FLOATING_POINT: bool = false;
    const IS_POINTER: bool = false;
    const IS_ARRAY: bool = false;
    const IS_CLASS: bool = false;
    const IS_CONST: bool = false;
}

macro_rules! integral {
    ($($t:ty),+ $(,)?) => {
        $(
            impl TypeTraits for $t {
                const IS_INTEGRAL: bool = true;
            }
        )+
    };
}

integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TypeTraits for f32 {
    const IS_FLOATING_POINT: bool = true;
}

impl TypeTraits for f64 {
    const IS_FLOATING_POINT: bool = true;
}

impl TypeTraits for bool {}
impl TypeTraits for char {}
impl TypeTraits for () {}

impl<T: ?Sized> TypeTraits for *const T {
    const IS_POINTER: bool = true;
}

impl<T: ?Sized> TypeTraits for *mut T {
    const IS_POINTER: bool = true;
}

impl<T, const N: usize> TypeTraits for [T; N] {
    const IS_ARRAY: bool = true;
}

impl<T> TypeTraits for [T] {
    const IS_ARRAY: bool = true;
}

/// Marks a struct (or enum) as a class type: `class_type!(MyClass);`
#[macro_export]
macro_rules! class_type {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::type_traits::TypeTraits for $t {
                const IS_CLASS: bool = true;
            }
        )+
    };
}

class_type!(String);

impl<T> TypeTraits for Vec<T> {
    const IS_CLASS: bool = true;
}

/// `const T`: same predicates as `T`, plus `IS_CONST`.
pub struct Const<T: ?Sized>(PhantomData<T>);

impl<T: TypeTraits + ?Sized> TypeTraits for Const<T> {
    const IS_INTEGRAL: bool = T::IS_INTEGRAL;
    const IS_FLOATING_POINT: bool = T::IS_FLOATING_POINT;
    const IS_POINTER: bool = T::IS_POINTER;
    const IS_ARRAY: bool = T::IS_ARRAY;
    const IS_CLASS: bool = T::IS_CLASS;
    const IS_CONST: bool = true;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitReport {
    pub is_integral: bool,
    pub is_floating_point: bool,
    pub is_pointer: bool,
    pub is_array: bool,
    pub is_class: bool,
    pub is_const: bool,
}

impl TraitReport {
    pub const fn of<T: TypeTraits + ?Sized>() -> Self {
        TraitReport {
            is_integral: T::IS_INTEGRAL,
            is_floating_point: T::IS_FLOATING_POINT,
            is_pointer: T::IS_POINTER,
            is_array: T::IS_ARRAY,
            is_class: T::IS_CLASS,
            is_const: T::IS_CONST,
        }
    }
}

impl fmt::Display for TraitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "is_integral: {}", self.is_integral)?;
        writeln!(f, "is_floating_point: {}", self.is_floating_point)?;
        writeln!(f, "is_pointer: {}", self.is_pointer)?;
        writeln!(f, "is_array: {}", self.is_array)?;
        writeln!(f, "is_class: {}", self.is_class)?;
        write!(f, "is_const: {}", self.is_const)
    }
}
