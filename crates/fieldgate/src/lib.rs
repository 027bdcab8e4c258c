// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Fieldgate
//!
//! Attribute interception with validation and transformation handlers.
//!
//! This crate provides [`FieldGate`], a container of named attributes that
//! routes every read, write, and invocation through handlers registered at
//! construction time, plus a [`policy`] toolkit of ready-made validators and
//! formatters.
//!
//! ## Quick Start
//!
//! ```
//! use fieldgate::{FieldGate, Value, policy};
//!
//! let mut user = FieldGate::builder()
//!     .on_write("name", policy::min_length(3))
//!     .on_write("email", policy::email())
//!     .build()?;
//!
//! user.set("name", "Alice")?;
//! assert_eq!(user.get("name"), Some(Value::from("Alice")));
//!
//! // Rejections leave the backing value untouched.
//! assert!(user.set("name", "Al").is_err());
//! assert_eq!(user.get("name"), Some(Value::from("Alice")));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Key Concepts
//!
//! - **Gate**: a [`FieldGate`] owns the backing store and a handler registry
//!   fixed at construction. The store is never exposed for direct mutation.
//! - **Handler**: a caller-supplied closure intercepting one operation on one
//!   attribute: [`ReadHandler`], [`WriteHandler`], or [`InvokeHandler`]. On
//!   the write path the handler alone mutates the store, which is what makes
//!   rejection-leaves-state-unchanged a structural guarantee.
//! - **Pass-through**: attributes with no registered handler behave like
//!   plain map entries, by documented default rather than by accident.
//!
//! ## Wrapping callables
//!
//! A read handler can resolve an attribute to a wrapped [`Callable`] that
//! interleaves side effects around the original, and
//! [`FieldGate::invoke`] will run it:
//!
//! ```
//! use fieldgate::{Callable, FieldGate, InvokeHandler, Value};
//!
//! let gate = FieldGate::builder()
//!     .field("place_order", Callable::new(|args| Value::Int(args.len() as i64)))
//!     .on_invoke("place_order", InvokeHandler::new(|callable, args| {
//!         let result = callable.call(args);
//!         tracing::info!(order.items = args.len(), "order placed, awaiting confirmation");
//!         result
//!     }))
//!     .build()?;
//!
//! let placed = gate.invoke("place_order", &[Value::from("Item A"), Value::from("Item B")])?;
//! assert_eq!(placed, Value::Int(2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Errors
//!
//! - [`ValidationError`]: a write handler rejected a value. Recoverable.
//! - [`ConfigurationError`]: ambiguous registration or an uncompilable
//!   policy pattern, raised at construction. Not recoverable by retry.
//! - [`InvokeError`]: invocation of a missing or non-callable attribute.

mod builder;
mod error;
mod gate;
mod handler;
pub mod policy;
mod value;

pub use builder::FieldGateBuilder;
pub use error::{ConfigurationError, InvokeError, ValidationError};
pub use gate::{FieldGate, Fields};
pub use handler::{InvokeHandler, Operation, ReadHandler, WriteHandler};
pub use value::{Callable, Value};
