//! The state machine engine.
//!
//! A [`StateMachine`] evaluates any [`MachineConfig`](crate::core::MachineConfig):
//! it holds the active state, fires configured transitions on events and
//! records where it has been so callers can step back and forth.
//!
//! # Key Concepts
//!
//! - **Trigger**: follow the current state's transition for an event
//! - **Change state**: jump straight to any declared state
//! - **Undo/redo**: move the cursor through recorded history
//!
//! Operations are synchronous and touch nothing but the machine itself.

mod error;
mod machine;

pub use error::FsmError;
pub use machine::StateMachine;
