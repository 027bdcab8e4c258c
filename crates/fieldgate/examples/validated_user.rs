// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates guarding user-profile attributes with validation policies.
//!
//! Writes to `name` and `email` pass through their registered policies; the
//! first rejected write aborts the batch and the backing values stay intact.

use fieldgate::{FieldGate, ValidationError, policy};

fn apply_profile(user: &mut FieldGate) -> Result<(), ValidationError> {
    user.set("name", "Alice")?;
    user.set("email", "invalid@email")?; // Rejected: the domain has no dot.
    user.set("email", "alice@example.com")?; // Never reached.
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let mut user = FieldGate::builder()
        .on_write("name", policy::min_length(3))
        .on_write("email", policy::email())
        .build()?;

    match apply_profile(&mut user) {
        Ok(()) => println!("profile applied"),
        Err(error) => println!("profile rejected: {error}"),
    }

    println!("name  = {:?}", user.get("name"));
    println!("email = {:?}", user.get("email"));
    Ok(())
}
