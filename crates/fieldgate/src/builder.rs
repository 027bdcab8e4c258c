// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builder for configuring a gate's initial attributes and handler registry.

use std::collections::HashMap;

use crate::error::ConfigurationError;
use crate::gate::{FieldGate, Fields};
use crate::handler::{InvokeHandler, Operation, ReadHandler, WriteHandler};
use crate::value::Value;

/// Builder for a [`FieldGate`].
///
/// Collects initial attribute values and handler registrations, then
/// validates the registry as a whole in [`build`](Self::build). Registration
/// is intentionally a construction-time affair: a gate is never observable
/// with a partially applied registry.
///
/// # Examples
///
/// ```
/// use fieldgate::{FieldGate, policy};
///
/// let gate = FieldGate::builder()
///     .field("name", "unset")
///     .on_write("name", policy::min_length(3))
///     .on_write("email", policy::email())
///     .on_write("price", policy::currency("$"))
///     .build()?;
/// # Ok::<(), fieldgate::ConfigurationError>(())
/// ```
#[derive(Debug, Default)]
pub struct FieldGateBuilder {
    fields: Fields,
    reads: Vec<(String, ReadHandler)>,
    writes: Vec<(String, WriteHandler)>,
    invokes: Vec<(String, InvokeHandler)>,
}

impl FieldGateBuilder {
    /// Creates a builder with an empty backing store and no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an initial value for an attribute.
    ///
    /// Seeding bypasses write handlers; it defines the state the gate starts
    /// from, not a write against it. Seeding the same attribute twice keeps
    /// the last value.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.put(name, value);
        self
    }

    /// Registers a read handler for an attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldgate::{FieldGate, ReadHandler, Value};
    ///
    /// let gate = FieldGate::builder()
    ///     .on_read("version", ReadHandler::new(|_, _| Some(Value::Int(1))))
    ///     .build()?;
    ///
    /// assert_eq!(gate.get("version"), Some(Value::Int(1)));
    /// # Ok::<(), fieldgate::ConfigurationError>(())
    /// ```
    #[must_use]
    pub fn on_read(mut self, name: impl Into<String>, handler: ReadHandler) -> Self {
        self.reads.push((name.into(), handler));
        self
    }

    /// Registers a write handler for an attribute.
    #[must_use]
    pub fn on_write(mut self, name: impl Into<String>, handler: WriteHandler) -> Self {
        self.writes.push((name.into(), handler));
        self
    }

    /// Registers an invoke handler for a callable attribute.
    #[must_use]
    pub fn on_invoke(mut self, name: impl Into<String>, handler: InvokeHandler) -> Self {
        self.invokes.push((name.into(), handler));
        self
    }

    /// Builds the configured [`FieldGate`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if any (attribute, operation) pair was
    /// registered more than once. Registration is never silently overwritten;
    /// the first duplicate encountered in registration order is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldgate::{FieldGate, policy};
    ///
    /// let result = FieldGate::builder()
    ///     .on_write("name", policy::min_length(3))
    ///     .on_write("name", policy::min_length(5))
    ///     .build();
    ///
    /// assert!(result.is_err());
    /// ```
    pub fn build(self) -> Result<FieldGate, ConfigurationError> {
        let reads = Self::registry(self.reads, Operation::Read)?;
        let writes = Self::registry(self.writes, Operation::Write)?;
        let invokes = Self::registry(self.invokes, Operation::Invoke)?;
        Ok(FieldGate::new(self.fields, reads, writes, invokes))
    }

    fn registry<H>(entries: Vec<(String, H)>, operation: Operation) -> Result<HashMap<String, H>, ConfigurationError> {
        let mut registry = HashMap::with_capacity(entries.len());
        for (name, handler) in entries {
            if registry.insert(name.clone(), handler).is_some() {
                return Err(ConfigurationError::duplicate_handler(&name, operation));
            }
        }
        Ok(registry)
    }
}
