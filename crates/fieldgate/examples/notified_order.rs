// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates wrapping a callable attribute with a notification.
//!
//! The invoke handler runs the underlying order placement, then emits the
//! notification before handing the result back to the caller.

use fieldgate::{Callable, FieldGate, InvokeHandler, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let place_order = Callable::new(|args| {
        tracing::info!(order.items = args.len(), "placing order");
        Value::from("order-0001")
    });

    let service = FieldGate::builder()
        .field("place_order", place_order)
        .on_invoke("place_order", InvokeHandler::new(|callable, args| {
            let result = callable.call(args);
            tracing::info!("order placed successfully, awaiting confirmation");
            result
        }))
        .build()?;

    let receipt = service.invoke("place_order", &[Value::from("Item A"), Value::from("Item B")])?;
    println!("receipt = {receipt:?}");
    Ok(())
}
