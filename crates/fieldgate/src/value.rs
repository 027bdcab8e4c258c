// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Dynamically typed attribute values.

use std::fmt::Debug;
use std::sync::Arc;

/// A value stored in or produced by a [`FieldGate`](crate::FieldGate) attribute.
///
/// Attributes are dynamically typed: a single gate can hold strings, numbers,
/// lists, and callables side by side. Handlers inspect the variant they care
/// about and reject or transform the rest.
///
/// # Examples
///
/// ```
/// use fieldgate::Value;
///
/// let name = Value::from("Alice");
/// assert_eq!(name.as_str(), Some("Alice"));
///
/// let price = Value::from(123.456);
/// assert_eq!(price.as_f64(), Some(123.456));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// An owned string.
    Str(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A callable attribute; see [`Callable`].
    Fn(Callable),
}

impl Value {
    /// Returns the numeric content of an `Int` or `Float` value.
    ///
    /// Integer values are widened to `f64`; everything else returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldgate::Value;
    ///
    /// assert_eq!(Value::Int(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));
    /// assert_eq!(Value::from("2").as_f64(), None);
    /// ```
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            #[expect(clippy::cast_precision_loss, reason = "Widening for numeric policies; exactness is not part of the contract")]
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string content of a `Str` value, or `None` for other variants.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the callable content of a `Fn` value, or `None` for other variants.
    #[must_use]
    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Fn(callable) => Some(callable),
            _ => None,
        }
    }

    /// Returns the variant name, for use in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Fn(_) => "callable",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Self::Fn(value)
    }
}

/// A shareable callable held as an attribute value.
///
/// Callables carry a `Fn(&[Value]) -> Value` closure behind an `Arc`, so a
/// read handler can hand out a wrapped variant while the original stays in
/// the backing store.
///
/// # Examples
///
/// ```
/// use fieldgate::{Callable, Value};
///
/// let double = Callable::new(|args| {
///     let n = args.first().and_then(Value::as_f64).unwrap_or_default();
///     Value::Float(n * 2.0)
/// });
///
/// assert_eq!(double.call(&[Value::Float(21.0)]), Value::Float(42.0));
/// ```
#[derive(Clone)]
pub struct Callable(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl Callable {
    /// Wraps a closure as a callable attribute value.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the callable with the given arguments.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callable").finish()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_f64_widens_ints() {
        assert_eq!(Value::Int(-3).as_f64(), Some(-3.0));
        assert_eq!(Value::Null.as_f64(), None);
    }

    #[test]
    fn callable_equality_is_identity() {
        let a = Callable::new(|_| Value::Null);
        let b = Callable::new(|_| Value::Null);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn type_names_cover_all_variants() {
        let values = [
            Value::Null,
            Value::Bool(true),
            Value::Int(1),
            Value::Float(1.0),
            Value::from("x"),
            Value::List(Vec::new()),
            Value::Fn(Callable::new(|_| Value::Null)),
        ];
        let names: Vec<_> = values.iter().map(Value::type_name).collect();
        assert_eq!(names, ["null", "bool", "int", "float", "string", "list", "callable"]);
    }
}
