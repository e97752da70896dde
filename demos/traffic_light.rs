//! Traffic Light
//!
//! This example drives a traffic light through its cycle, then walks the
//! recorded history backwards and forwards.
//!
//! Key concepts:
//! - Declaring a configuration with the `machine_config!` macro
//! - Validating the configuration before use
//! - Undo/redo over visited states
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use waymark::{machine_config, StateMachineBuilder};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light Example ===\n");

    let config = machine_config! {
        initial: Red,
        states: {
            Red { next => Green, fault => Flashing },
            Green { next => Yellow, fault => Flashing },
            Yellow { next => Red, fault => Flashing },
            Flashing { repair => Red },
        }
    };

    let mut light = match StateMachineBuilder::new().config(config).validated().build() {
        Ok(light) => light,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            return;
        }
    };

    for _ in 0..4 {
        match light.trigger("next") {
            Ok(state) => println!("next -> {state}"),
            Err(err) => println!("rejected: {err}"),
        }
    }

    println!("\nStates that can fault: {:?}", light.states(Some("fault")));

    while light.undo() {
        println!("undo -> {}", light.state());
    }
    light.redo();
    println!("redo -> {}", light.state());

    if let Err(err) = light.trigger("repair") {
        println!("rejected: {err}");
    }

    println!("\nHistory: {:?}", light.history().entries());
    println!("\n=== Example Complete ===");
}
