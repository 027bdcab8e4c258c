// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Integration tests for the built-in write policies.

use fieldgate::{FieldGate, Value, policy};

fn name_gate() -> FieldGate {
    FieldGate::builder()
        .on_write("name", policy::min_length(3))
        .build()
        .expect("builds")
}

#[test]
fn min_length_accepts_and_round_trips() {
    let mut gate = name_gate();

    for name in ["Ada", "Alice", "Montgomery"] {
        gate.set("name", name).expect("length >= 3 passes");
        assert_eq!(gate.get("name"), Some(Value::from(name)));
    }
}

#[test]
fn min_length_rejects_and_preserves_backing() {
    let mut gate = name_gate();

    for name in ["", "a", "Al"] {
        let error = gate.set("name", name).expect_err("length < 3 rejected");
        assert_eq!(error.attribute, "name");
        assert_eq!(gate.get("name"), None, "rejected write must not store anything");
    }

    gate.set("name", "Bob").expect("valid");
    gate.set("name", "x").expect_err("rejected");
    assert_eq!(gate.get("name"), Some(Value::from("Bob")), "previous value survives rejection");
}

#[test]
fn email_requires_a_domain_dot() {
    let mut gate = FieldGate::builder()
        .on_write("email", policy::email())
        .build()
        .expect("builds");

    gate.set("email", "a@b.com").expect("conventional address");
    assert_eq!(gate.get("email"), Some(Value::from("a@b.com")));

    let error = gate.set("email", "invalid@email").expect_err("no dot in domain");
    assert_eq!(error.attribute, "email");
    assert_eq!(gate.get("email"), Some(Value::from("a@b.com")));
}

#[test]
fn email_rejects_malformed_shapes() {
    let mut gate = FieldGate::builder()
        .on_write("email", policy::email())
        .build()
        .expect("builds");

    for address in ["plain", "two@@signs.com", "a@b@c.com", "spaced local@b.com", "@b.com", "a@"] {
        gate.set("email", address).expect_err("malformed address rejected");
    }

    assert_eq!(gate.get("email"), None);
}

#[test]
fn currency_formats_with_two_decimals() {
    let mut gate = FieldGate::builder()
        .on_write("price", policy::currency("$"))
        .build()
        .expect("builds");

    gate.set("price", 123.456).expect("numeric");
    assert_eq!(gate.get("price"), Some(Value::from("$123.46")));

    gate.set("price", Value::Int(0)).expect("integer amounts accepted");
    assert_eq!(gate.get("price"), Some(Value::from("$0.00")));

    gate.set("price", 7.0).expect("whole floats pad decimals");
    assert_eq!(gate.get("price"), Some(Value::from("$7.00")));
}

#[test]
fn currency_rejects_non_numeric_values() {
    let mut gate = FieldGate::builder()
        .on_write("price", policy::currency("$"))
        .build()
        .expect("builds");

    gate.set("price", 1.0).expect("numeric");

    let error = gate.set("price", "not a number").expect_err("strings rejected");
    assert_eq!(error.attribute, "price");
    assert!(error.reason.contains("expected a number"));

    // The previously formatted value is untouched by the rejection.
    assert_eq!(gate.get("price"), Some(Value::from("$1.00")));
}

#[test]
fn matching_applies_caller_patterns() {
    let mut gate = FieldGate::builder()
        .on_write("sku", policy::matching(r"^[A-Z]{3}-\d{4}$").expect("pattern compiles"))
        .build()
        .expect("builds");

    gate.set("sku", "ABC-1234").expect("matches");
    gate.set("sku", "abc-1234").expect_err("case mismatch");
    gate.set("sku", Value::Int(12)).expect_err("non-string");
}
