//! A tagged union over a closed set of alternatives.
//!
//! `Value` holds exactly one of `i32`, `f64` or `String`. Typed access goes
//! through the [`Alternative`] trait: [`Value::get`] fails with
//! [`DemoError::BadVariantAccess`] on a mismatch, [`Value::get_if`] and
//! [`Value::holds`] never fail. [`Value::visit`] calls exactly one method of a
//! [`Visitor`]; a visitor must implement all of them to compile.

use crate::error::DemoError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Double(f64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Double,
    Text,
}

impl ValueKind {
    pub fn type_name(self) -> &'static str {
        match self {
            ValueKind::Int => "i32",
            ValueKind::Double => "f64",
            ValueKind::Text => "String",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl Default for Value {
    // Like a default-constructed variant: the first alternative, value-initialized.
    fn default() -> Self {
        Value::Int(0)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

/// A type that is one of `Value`'s alternatives.
pub trait Alternative: Sized {
    const KIND: ValueKind;

    fn project(value: &Value) -> Option<&Self>;
    fn project_mut(value: &mut Value) -> Option<&mut Self>;
}

impl Alternative for i32 {
    const KIND: ValueKind = ValueKind::Int;

    fn project(value: &Value) -> Option<&Self> {
        match value {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }

    fn project_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl Alternative for f64 {
    const KIND: ValueKind = ValueKind::Double;

    fn project(value: &Value) -> Option<&Self> {
        match value {
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    fn project_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl Alternative for String {
    const KIND: ValueKind = ValueKind::Text;

    fn project(value: &Value) -> Option<&Self> {
        match value {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    fn project_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

pub trait Visitor {
    type Output;

    fn int(&self, value: i32) -> Self::Output;
    fn double(&self, value: f64) -> Self::Output;
    fn text(&self, value: &str) -> Self::Output;
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Double(_) => ValueKind::Double,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Replace the stored value; the active alternative follows the new value.
    pub fn set(&mut self, value: impl Into<Value>) {
        *self = value.into();
    }

    pub fn get<T: Alternative>(&self) -> Result<&T, DemoError> {
        T::project(self)
            .ok_or_else(|| DemoError::bad_variant_access(T::KIND.type_name(), self.kind().type_name()))
    }

    pub fn get_mut<T: Alternative>(&mut self) -> Result<&mut T, DemoError> {
        let actual = self.kind().type_name();
        T::project_mut(self).ok_or_else(|| DemoError::bad_variant_access(T::KIND.type_name(), actual))
    }

    pub fn get_if<T: Alternative>(&self) -> Option<&T> {
        T::project(self)
    }

    pub fn holds<T: Alternative>(&self) -> bool {
        self.kind() == T::KIND
    }

    pub fn visit<V: Visitor>(&self, visitor: &V) -> V::Output {
        match self {
            Value::Int(v) => visitor.int(*v),
            Value::Double(v) => visitor.double(*v),
            Value::Text(v) => visitor.text(v),
        }
    }
}

/// Renders the message the demo prints for each alternative.
pub struct PrintVisitor;

impl Visitor for PrintVisitor {
    type Output = String;

    fn int(&self, value: i32) -> String {
        format!("Stored value is an int: {}", value)
    }

    fn double(&self, value: f64) -> String {
        format!("Stored value is a double: {}", value)
    }

    fn text(&self, value: &str) -> String {
        format!("Stored value is a string: {}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl Visitor for Doubler {
        type Output = f64;

        fn int(&self, value: i32) -> f64 {
            f64::from(value) * 2.0
        }

        fn double(&self, value: f64) -> f64 {
            value * 2.0
        }

        fn text(&self, value: &str) -> f64 {
            value.len() as f64 * 2.0
        }
    }

    #[test]
    fn test_assign_and_get() {
        let mut var = Value::default();
        var.set(10);
        assert_eq!(var.get::<i32>().unwrap(), &10);

        var.set(3.5);
        assert_eq!(var.get::<f64>().unwrap(), &3.5);
        assert_eq!(var.kind(), ValueKind::Double);
    }

    #[test]
    fn test_get_wrong_alternative_fails() {
        let var = Value::from(10);
        match var.get::<String>() {
            Err(DemoError::BadVariantAccess { expected, actual }) => {
                assert_eq!(expected, "String");
                assert_eq!(actual, "i32");
            }
            other => panic!("expected bad variant access, got {:?}", other),
        }
    }

    #[test]
    fn test_get_if_does_not_fail() {
        let mut var = Value::from(10);
        assert_eq!(var.get_if::<String>(), None);
        assert!(!var.holds::<String>());

        var.set("Hello");
        assert_eq!(var.get_if::<String>().map(String::as_str), Some("Hello"));
        assert!(var.holds::<String>());
        assert!(!var.holds::<f64>());
    }

    #[test]
    fn test_get_mut() {
        let mut var = Value::from(1);
        *var.get_mut::<i32>().unwrap() += 41;
        assert_eq!(var, Value::Int(42));
        assert!(var.get_mut::<f64>().is_err());
    }

    #[test]
    fn test_visit_dispatches_active_alternative() {
        assert_eq!(Value::from(10).visit(&PrintVisitor), "Stored value is an int: 10");
        assert_eq!(Value::from(3.5).visit(&PrintVisitor), "Stored value is a double: 3.5");
        assert_eq!(Value::from("Hello").visit(&PrintVisitor), "Stored value is a string: Hello");
        assert_eq!(Value::from("abc").visit(&Doubler), 6.0);
        assert_eq!(Value::from(4).visit(&Doubler), 8.0);
    }
}
