//! Compile-time selection between implementations by type kind.
//!
//! Each numeric primitive names exactly one kind through [`NumericKind::Kind`].
//! Implementations are written per kind ([`Describe<IntegralKind>`],
//! [`Describe<FloatingKind>`]) and [`describe`] picks the one matching the
//! argument's kind. A type with no kind has no implementation to pick, so the
//! call is rejected when the program is built:
//!
//! ```compile_fail
//! use std_feature_demos::overload::describe;
//! describe("test");
//! ```
//!
//! ```compile_fail
//! use std_feature_demos::overload::Classifier;
//! Classifier::<String>::new().display();
//! ```

use std::fmt::Display;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegralKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingKind;

pub trait Kind {
    /// Prefix used by the function form.
    const LABEL: &'static str;
    /// Sentence used by the class form.
    const TYPE_NAME: &'static str;
}

impl Kind for IntegralKind {
    const LABEL: &'static str = "Integral";
    const TYPE_NAME: &'static str = "Integral type";
}

impl Kind for FloatingKind {
    const LABEL: &'static str = "Floating point";
    const TYPE_NAME: &'static str = "Floating-point type";
}

pub trait NumericKind {
    type Kind: Kind;
}

macro_rules! numeric_kind {
    ($kind:ty => $($t:ty),+ $(,)?) => {
        $(
            impl NumericKind for $t {
                type Kind = $kind;
            }
        )+
    };
}

numeric_kind!(IntegralKind => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_kind!(FloatingKind => f32, f64);

/// One implementation per kind.
pub trait Describe<K> {
    fn describe(self) -> String;
}

impl<T> Describe<IntegralKind> for T
where
    T: NumericKind<Kind = IntegralKind> + Display,
{
    fn describe(self) -> String {
        format!("{}: {}", IntegralKind::LABEL, self)
    }
}

impl<T> Describe<FloatingKind> for T
where
    T: NumericKind<Kind = FloatingKind> + Display,
{
    fn describe(self) -> String {
        format!("{}: {}", FloatingKind::LABEL, self)
    }
}

/// Function form: dispatches to the implementation for `T`'s kind.
pub fn describe<T>(value: T) -> String
where
    T: NumericKind + Describe<<T as NumericKind>::Kind>,
{
    <T as Describe<T::Kind>>::describe(value)
}

/// Class form: only constructible for types with a kind.
pub struct Classifier<T> {
    _marker: PhantomData<T>,
}

impl<T: NumericKind> Classifier<T> {
    pub fn new() -> Self {
        Classifier { _marker: PhantomData }
    }

    pub fn display(&self) -> &'static str {
        <T::Kind as Kind>::TYPE_NAME
    }
}

impl<T: NumericKind> Default for Classifier<T> {
    fn default() -> Self {
        Self::new()
    }
}
