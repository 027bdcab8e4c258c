// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Configurable write policies: validation and formatting handlers.
//!
//! Each constructor returns a [`WriteHandler`] ready to register with
//! [`FieldGateBuilder::on_write`](crate::FieldGateBuilder::on_write). The
//! policies are deliberately free of attribute-name assumptions; the same
//! `min_length` handler guards a user name, a password, or anything else the
//! caller attaches it to.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConfigurationError, ValidationError};
use crate::handler::WriteHandler;
use crate::value::Value;

/// Exactly one `@`, a non-whitespace local part, and a domain containing a dot.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("the built-in email pattern compiles"));

/// Rejects string values shorter than `min` characters.
///
/// Accepted values are stored unchanged. Non-string values are rejected: a
/// length policy on a non-string is a caller bug, not a pass.
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
#[must_use]
pub fn min_length(min: usize) -> WriteHandler {
    WriteHandler::new(move |fields, name, value| {
        let Value::Str(text) = &value else {
            return Err(expected(name, "a string", &value));
        };
        if text.chars().count() < min {
            return Err(ValidationError::for_attribute(
                name,
                format!("must be at least {min} characters long"),
            ));
        }
        fields.put(name, value);
        Ok(())
    })
}

/// Rejects string values that do not match `pattern`.
///
/// The pattern is compiled once, at registration time.
///
/// # Errors
///
/// Returns [`ConfigurationError`] if `pattern` is not a valid regular
/// expression; a handler with an uncompilable policy is a construction
/// failure, not a runtime one.
///
/// # Examples
///
/// ```
/// use fieldgate::{FieldGate, policy};
///
/// let mut gate = FieldGate::builder()
///     .on_write("sku", policy::matching(r"^[A-Z]{3}-\d{4}$")?)
///     .build()?;
///
/// gate.set("sku", "ABC-1234")?;
/// assert!(gate.set("sku", "abc-12").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn matching(pattern: &str) -> Result<WriteHandler, ConfigurationError> {
    let regex = Regex::new(pattern).map_err(|cause| ConfigurationError::invalid_pattern(pattern, cause))?;
    Ok(pattern_handler(regex))
}

/// Rejects string values that are not conventionally shaped email addresses.
///
/// The shape required is exactly one `@` separating a non-whitespace local
/// part from a domain that contains a `.`. This is a format gate, not a
/// deliverability check.
///
/// # Examples
///
/// ```
/// use fieldgate::{FieldGate, policy};
///
/// let mut gate = FieldGate::builder()
///     .on_write("email", policy::email())
///     .build()?;
///
/// gate.set("email", "a@b.com")?;
/// assert!(gate.set("email", "invalid@email").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn email() -> WriteHandler {
    pattern_handler(EMAIL.clone())
}

/// Formats numeric values as a currency string on write.
///
/// The stored value is a string: the symbol followed by the amount with
/// exactly two decimal digits, rounded with Rust's default float formatting
/// (round-half-to-even). Non-numeric values are rejected rather than passed
/// to the formatter.
///
/// # Examples
///
/// ```
/// use fieldgate::{FieldGate, Value, policy};
///
/// let mut gate = FieldGate::builder()
///     .on_write("price", policy::currency("$"))
///     .build()?;
///
/// gate.set("price", 123.456)?;
/// assert_eq!(gate.get("price"), Some(Value::from("$123.46")));
///
/// gate.set("price", Value::Int(0))?;
/// assert_eq!(gate.get("price"), Some(Value::from("$0.00")));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn currency(symbol: &str) -> WriteHandler {
    let symbol = symbol.to_owned();
    WriteHandler::new(move |fields, name, value| {
        let Some(amount) = value.as_f64() else {
            return Err(expected(name, "a number", &value));
        };
        fields.put(name, format!("{symbol}{amount:.2}"));
        Ok(())
    })
}

fn pattern_handler(regex: Regex) -> WriteHandler {
    WriteHandler::new(move |fields, name, value| {
        let Value::Str(text) = &value else {
            return Err(expected(name, "a string", &value));
        };
        if !regex.is_match(text) {
            return Err(ValidationError::for_attribute(
                name,
                format!("does not match pattern '{}'", regex.as_str()),
            ));
        }
        fields.put(name, value);
        Ok(())
    })
}

fn expected(name: &str, wanted: &str, got: &Value) -> ValidationError {
    ValidationError::for_attribute(name, format!("expected {wanted}, got {}", got.type_name()))
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Fields;

    fn apply(handler: &WriteHandler, name: &str, value: Value) -> Result<Option<Value>, ValidationError> {
        let mut fields = Fields::default();
        handler.write(&mut fields, name, value)?;
        Ok(fields.raw(name).cloned())
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let handler = min_length(3);
        let stored = apply(&handler, "name", Value::from("日本語")).expect("three characters pass");
        assert_eq!(stored, Some(Value::from("日本語")));
    }

    #[test]
    fn min_length_rejects_non_strings() {
        let handler = min_length(3);
        let error = apply(&handler, "name", Value::Int(12345)).expect_err("non-string should be rejected");
        assert!(error.reason.contains("expected a string"));
    }

    #[test]
    fn matching_rejects_bad_patterns_at_registration() {
        assert!(matching(r"([unclosed").is_err());
    }

    #[test]
    fn currency_formats_negative_amounts() {
        let handler = currency("$");
        let stored = apply(&handler, "price", Value::Float(-1.5)).expect("negative amounts format");
        assert_eq!(stored, Some(Value::from("$-1.50")));
    }

    #[test]
    fn currency_supports_other_symbols() {
        let handler = currency("€");
        let stored = apply(&handler, "price", Value::Float(2.0)).expect("formats");
        assert_eq!(stored, Some(Value::from("€2.00")));
    }
}
