//! Order Workflow
//!
//! This example walks an order through a restricted workflow.
//!
//! Key concepts:
//! - States declared with `to`/`from` restrictions
//! - Every transition returns a new machine; old ones stay valid
//! - Payloads travel with the state they were attached to
//! - Disallowed moves are reported as errors
//!
//! Run with: cargo run --example order_workflow

use immutable_state_machine::{ImmutableStateMachine, StateSpec};
use serde_json::json;

fn main() {
    println!("=== Order Workflow Example ===\n");

    let cart: ImmutableStateMachine = ImmutableStateMachine::new([
        StateSpec::new("cart").to(["checkout"]),
        StateSpec::new("checkout").to(["cart", "paid"]),
        StateSpec::new("paid").from(["checkout"]).to(["shipped"]),
        StateSpec::new("shipped").to(Vec::<String>::new()),
    ])
    .unwrap();

    println!("Initial state: {}", cart.state());

    match cart.goto("paid") {
        Ok(_) => println!("Unexpected: skipped checkout"),
        Err(e) => println!("Rejected: {}", e),
    }

    let checkout = cart.goto_with("checkout", json!({ "items": 3 })).unwrap();
    let paid = checkout.goto_with("paid", json!({ "amount": 42.5 })).unwrap();
    let shipped = paid.goto_with("shipped", json!({ "carrier": "post" })).unwrap();

    for machine in [&cart, &checkout, &paid, &shipped] {
        println!("{:>10} -> {:?}", machine.state(), machine.data());
    }

    println!("Can leave 'shipped': {}", shipped.can_goto("cart"));

    println!("\n=== Example Complete ===");
}
