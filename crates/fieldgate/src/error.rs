// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error types for gate construction and attribute operations.

use crate::handler::Operation;

/// A write handler rejected a proposed attribute value.
///
/// The backing value is left unchanged when this error is raised. Validation
/// failures are deterministic: retrying the same write with the same value
/// fails identically, so there is no retry machinery.
///
/// # Examples
///
/// ```
/// use fieldgate::ValidationError;
///
/// let error = ValidationError::for_attribute("name", "must be at least 3 characters long");
/// assert_eq!(error.attribute, "name");
/// ```
#[ohno::error]
#[display("invalid value for attribute '{attribute}': {reason}")]
pub struct ValidationError {
    /// The attribute whose write was rejected.
    pub attribute: String,
    /// Why the handler rejected the value.
    pub reason: String,
}

impl ValidationError {
    /// Creates a rejection for the named attribute.
    ///
    /// This is the constructor for write handlers supplied from outside the
    /// crate, including any custom policy built by callers.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldgate::ValidationError;
    ///
    /// let error = ValidationError::for_attribute("email", "missing domain");
    /// assert!(error.to_string().contains("email"));
    /// ```
    #[must_use]
    pub fn for_attribute(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(attribute, reason)
    }
}

/// Handler registration was ambiguous or a policy could not be configured.
///
/// Raised by [`FieldGateBuilder::build`](crate::FieldGateBuilder::build) when
/// a (name, operation) pair is registered twice, and by
/// [`policy::matching`](crate::policy::matching) when the supplied pattern
/// does not compile. Fatal to that construction call; retrying without fixing
/// the registration fails identically.
#[ohno::error]
pub struct ConfigurationError {}

impl ConfigurationError {
    /// Reports a second handler registered for the same attribute and operation.
    #[must_use]
    pub(crate) fn duplicate_handler(attribute: &str, operation: Operation) -> Self {
        Self::caused_by(format!(
            "duplicate {operation} handler registered for attribute '{attribute}'"
        ))
    }

    /// Reports a policy pattern that failed to compile.
    #[must_use]
    pub(crate) fn invalid_pattern(pattern: &str, cause: regex::Error) -> Self {
        Self::caused_by(format!("invalid policy pattern '{pattern}': {cause}"))
    }
}

/// An attribute could not be invoked.
///
/// Raised by [`FieldGate::invoke`](crate::FieldGate::invoke) when the named
/// attribute is missing or resolves to a non-callable value.
#[ohno::error]
#[display("attribute '{attribute}' cannot be invoked")]
pub struct InvokeError {
    /// The attribute that was not callable.
    pub attribute: String,
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_names_attribute_and_reason() {
        let error = ValidationError::for_attribute("name", "too short");
        let display = format!("{error}");
        assert!(display.contains("name"), "display should name the attribute, got: {display}");
        assert!(display.contains("too short"), "display should carry the reason, got: {display}");
    }

    #[test]
    fn duplicate_handler_names_the_slot() {
        let error = ConfigurationError::duplicate_handler("price", Operation::Write);
        let debug = format!("{error:?}");
        assert!(debug.contains("price"), "debug output should name the attribute, got: {debug}");
        assert!(debug.contains("write"), "debug output should name the operation, got: {debug}");
    }

    #[test]
    fn invoke_error_names_attribute() {
        let error = InvokeError::new("placeOrder");
        assert_eq!(error.attribute, "placeOrder");
        assert!(format!("{error}").contains("placeOrder"));
    }
}
