// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates reformatting a value on write.
//!
//! The `price` attribute stores a currency string; callers write plain
//! numbers and never see the unformatted value again.

use fieldgate::{FieldGate, policy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut product = FieldGate::builder()
        .on_write("price", policy::currency("$"))
        .build()?;

    product.set("price", 123.456)?;
    println!("price = {:?}", product.get("price")); // "$123.46"

    product.set("price", 5_i64)?;
    println!("price = {:?}", product.get("price")); // "$5.00"

    Ok(())
}
