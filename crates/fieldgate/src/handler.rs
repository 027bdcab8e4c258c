// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Handler types dispatched on attribute reads, writes, and invocations.
//!
//! Handlers are shared closures registered per (attribute, operation) pair at
//! construction time. The registration is fixed for the lifetime of the gate;
//! there is no way to swap a handler on a live instance.

use std::fmt::Debug;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::gate::Fields;
use crate::value::{Callable, Value};

/// The operation an attribute handler intercepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Attribute read via [`FieldGate::get`](crate::FieldGate::get).
    Read,
    /// Attribute write via [`FieldGate::set`](crate::FieldGate::set).
    Write,
    /// Attribute invocation via [`FieldGate::invoke`](crate::FieldGate::invoke).
    Invoke,
}

impl Operation {
    /// Returns the lowercase operation name, for diagnostics and log fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Invoke => "invoke",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intercepts reads of a single attribute.
///
/// The handler receives the backing store and the attribute name and produces
/// the value the caller observes. It may return the raw value, a computed
/// value, or a wrapped [`Callable`] that interleaves side effects around the
/// original.
///
/// # Examples
///
/// ```
/// use fieldgate::{FieldGate, ReadHandler, Value};
///
/// let gate = FieldGate::builder()
///     .field("greeting", "hello")
///     .on_read("greeting", ReadHandler::new(|fields, name| {
///         let raw = fields.raw(name)?.as_str()?;
///         Some(Value::from(raw.to_uppercase()))
///     }))
///     .build()?;
///
/// assert_eq!(gate.get("greeting"), Some(Value::from("HELLO")));
/// # Ok::<(), fieldgate::ConfigurationError>(())
/// ```
#[derive(Clone)]
pub struct ReadHandler(Arc<dyn Fn(&Fields, &str) -> Option<Value> + Send + Sync>);

impl ReadHandler {
    /// Wraps a closure as a read handler.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Fields, &str) -> Option<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub(crate) fn read(&self, fields: &Fields, name: &str) -> Option<Value> {
        (self.0)(fields, name)
    }
}

impl Debug for ReadHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadHandler").finish()
    }
}

/// Intercepts writes to a single attribute.
///
/// The handler alone decides the outcome of the write: it either rejects the
/// proposed value with a [`ValidationError`], stores the value (possibly
/// transformed) via [`Fields::put`], or deliberately stores nothing. The gate
/// never touches the backing store on an intercepted write path, so a
/// rejection is guaranteed to leave the previous value in place.
///
/// # Examples
///
/// ```
/// use fieldgate::{FieldGate, Value, ValidationError, WriteHandler};
///
/// let mut gate = FieldGate::builder()
///     .on_write("age", WriteHandler::new(|fields, name, value| {
///         match value.as_f64() {
///             Some(n) if n >= 0.0 => {
///                 fields.put(name, value);
///                 Ok(())
///             }
///             _ => Err(ValidationError::for_attribute(name, "must be a non-negative number")),
///         }
///     }))
///     .build()?;
///
/// gate.set("age", 30_i64)?;
/// assert!(gate.set("age", -1_i64).is_err());
/// assert_eq!(gate.get("age"), Some(Value::Int(30)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct WriteHandler(Arc<dyn Fn(&mut Fields, &str, Value) -> Result<(), ValidationError> + Send + Sync>);

impl WriteHandler {
    /// Wraps a closure as a write handler.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Fields, &str, Value) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub(crate) fn write(&self, fields: &mut Fields, name: &str, value: Value) -> Result<(), ValidationError> {
        (self.0)(fields, name, value)
    }
}

impl Debug for WriteHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteHandler").finish()
    }
}

/// Wraps invocations of a single callable attribute.
///
/// The handler receives the resolved callable and the caller's arguments and
/// decides how to run them, typically interleaving side effects before or
/// after delegating.
///
/// # Examples
///
/// ```
/// use fieldgate::{Callable, FieldGate, InvokeHandler, Value};
///
/// let gate = FieldGate::builder()
///     .field("ping", Callable::new(|_| Value::from("pong")))
///     .on_invoke("ping", InvokeHandler::new(|callable, args| {
///         let result = callable.call(args);
///         // Side effects go here; the underlying result passes through.
///         result
///     }))
///     .build()?;
///
/// assert_eq!(gate.invoke("ping", &[])?, Value::from("pong"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct InvokeHandler(Arc<dyn Fn(&Callable, &[Value]) -> Value + Send + Sync>);

impl InvokeHandler {
    /// Wraps a closure as an invoke handler.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Callable, &[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub(crate) fn invoke(&self, callable: &Callable, args: &[Value]) -> Value {
        (self.0)(callable, args)
    }
}

impl Debug for InvokeHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvokeHandler").finish()
    }
}
