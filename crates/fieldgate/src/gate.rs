// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The gate type mediating every attribute read, write, and invocation.

use std::collections::HashMap;

use crate::builder::FieldGateBuilder;
use crate::error::{InvokeError, ValidationError};
use crate::handler::{InvokeHandler, ReadHandler, WriteHandler};
use crate::value::Value;

/// The backing store of named attribute values.
///
/// `Fields` is owned by a [`FieldGate`] and is never handed out for direct
/// mutation: outside of construction, the only mutable access is the
/// reference a write handler receives while its write is in flight.
#[derive(Clone, Debug, Default)]
pub struct Fields(HashMap<String, Value>);

impl Fields {
    /// Returns the stored value for an attribute, bypassing read handlers.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Stores a value for an attribute, replacing any previous value.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the number of stored attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no attributes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A container of named attributes with interception on every access.
///
/// Each read, write, and invocation is routed through the handler registered
/// for that (attribute, operation) pair at construction time. Attributes
/// without a handler fall through to the default policy: reads return the
/// stored value unchanged and writes store the proposed value unchanged.
///
/// The registry is fixed once [`build`](FieldGateBuilder::build) succeeds and
/// the backing store is only reachable through the gate, so every write to a
/// guarded attribute is guaranteed to have passed its handler.
///
/// # Quick Start
///
/// ```
/// use fieldgate::{FieldGate, Value, policy};
///
/// let mut user = FieldGate::builder()
///     .on_write("name", policy::min_length(3))
///     .on_write("email", policy::email())
///     .build()?;
///
/// user.set("name", "Alice")?;
/// assert!(user.set("email", "invalid@email").is_err());
/// assert_eq!(user.get("name"), Some(Value::from("Alice")));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Thread Safety
///
/// A gate is single-threaded by design: handlers run to completion inside
/// `set`/`get`/`invoke` and there are no internal locks. The registries are
/// read-only after construction; callers sharing a gate across threads must
/// serialize writes themselves.
#[derive(Debug)]
pub struct FieldGate {
    fields: Fields,
    reads: HashMap<String, ReadHandler>,
    writes: HashMap<String, WriteHandler>,
    invokes: HashMap<String, InvokeHandler>,
}

impl FieldGate {
    /// Creates a new builder for configuring a gate.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldgate::{FieldGate, policy};
    ///
    /// let gate = FieldGate::builder()
    ///     .field("price", 9.99)
    ///     .on_write("price", policy::currency("$"))
    ///     .build()?;
    /// # Ok::<(), fieldgate::ConfigurationError>(())
    /// ```
    #[must_use]
    pub fn builder() -> FieldGateBuilder {
        FieldGateBuilder::new()
    }

    pub(crate) fn new(
        fields: Fields,
        reads: HashMap<String, ReadHandler>,
        writes: HashMap<String, WriteHandler>,
        invokes: HashMap<String, InvokeHandler>,
    ) -> Self {
        Self {
            fields,
            reads,
            writes,
            invokes,
        }
    }

    /// Returns a read-only view of the backing store.
    ///
    /// Useful for inspecting stored values without going through read
    /// handlers.
    #[must_use]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Writes an attribute value through its write handler.
    ///
    /// With a handler registered for `name`, the handler alone decides the
    /// outcome: reject, transform-and-store, or deliberately store nothing.
    /// Without one, the value is stored unchanged (the documented
    /// pass-through default).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the write handler rejects the value;
    /// the backing value is unchanged in that case. Invalidity is only ever
    /// signalled through the error, never through a return value the caller
    /// could ignore.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldgate::{FieldGate, Value, policy};
    ///
    /// let mut gate = FieldGate::builder()
    ///     .on_write("name", policy::min_length(3))
    ///     .build()?;
    ///
    /// gate.set("name", "Alice")?;
    /// assert!(gate.set("name", "Al").is_err());
    /// assert_eq!(gate.get("name"), Some(Value::from("Alice")));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ValidationError> {
        let value = value.into();
        match self.writes.get(name) {
            Some(handler) => {
                let result = handler.write(&mut self.fields, name, value);
                if let Err(error) = &result {
                    tracing::debug!(
                        gate.attribute = name,
                        gate.operation = "write",
                        gate.activity = "rejected",
                        gate.reason = %error.reason,
                        "gate.event"
                    );
                }
                result
            }
            None => {
                tracing::debug!(
                    gate.attribute = name,
                    gate.operation = "write",
                    gate.activity = "passthrough",
                    "gate.event"
                );
                self.fields.put(name, value);
                Ok(())
            }
        }
    }

    /// Reads an attribute value through its read handler.
    ///
    /// With a handler registered for `name`, the handler's return value is
    /// the result; it may be computed or a wrapped callable rather than the
    /// raw stored value. Without one, the stored value is returned unchanged,
    /// or `None` if the attribute is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldgate::{FieldGate, Value};
    ///
    /// let mut gate = FieldGate::builder().build()?;
    /// gate.set("note", "pass-through")?;
    /// assert_eq!(gate.get("note"), Some(Value::from("pass-through")));
    /// assert_eq!(gate.get("missing"), None);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.reads.get(name) {
            Some(handler) => handler.read(&self.fields, name),
            None => self.fields.raw(name).cloned(),
        }
    }

    /// Invokes a callable attribute with the given arguments.
    ///
    /// Sugar over [`get`](Self::get) followed by calling the resolved
    /// [`Value::Fn`]: the read handler (if any) resolves the callable, then a
    /// registered invoke handler wraps the call with its side effects, or the
    /// callable runs directly.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError`] when the attribute is missing or does not
    /// resolve to a callable.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldgate::{Callable, FieldGate, Value};
    ///
    /// let gate = FieldGate::builder()
    ///     .field("ping", Callable::new(|_| Value::from("pong")))
    ///     .build()?;
    ///
    /// assert_eq!(gate.invoke("ping", &[])?, Value::from("pong"));
    /// assert!(gate.invoke("missing", &[]).is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, InvokeError> {
        let Some(Value::Fn(callable)) = self.get(name) else {
            return Err(InvokeError::new(name));
        };
        match self.invokes.get(name) {
            Some(handler) => Ok(handler.invoke(&callable, args)),
            None => Ok(callable.call(args)),
        }
    }
}
