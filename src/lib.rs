//! Waymark: a configuration-driven finite state machine with undo/redo history
//!
//! Waymark evaluates a declarative table of states and events. The machine
//! tracks its active state, rejects events the active state does not accept,
//! and records every state it reaches so callers can step backwards and
//! forwards like an editor's undo stack.
//!
//! # Core Concepts
//!
//! - **Configuration**: Initial state plus each state's event-to-target table
//! - **Trigger**: Follow a configured transition, discarding any redo branch
//! - **History**: Linear list of visited states with a movable cursor
//!
//! # Example
//!
//! ```rust
//! use waymark::{FsmError, MachineConfig, StateMachine};
//!
//! let config: MachineConfig = serde_json::from_str(
//!     r#"{
//!         "initial": "Draft",
//!         "states": {
//!             "Draft": { "transitions": { "submit": "Review" } },
//!             "Review": { "transitions": { "approve": "Published", "reject": "Draft" } },
//!             "Published": {}
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("submit").unwrap();
//! assert_eq!(machine.state(), "Review");
//!
//! assert!(matches!(
//!     machine.trigger("submit"),
//!     Err(FsmError::InvalidTransition { .. })
//! ));
//!
//! assert_eq!(machine.states(Some("reject")), vec!["Review"]);
//!
//! machine.undo();
//! assert_eq!(machine.state(), "Draft");
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder, StateMachineBuilder};
pub use core::{ConfigViolation, History, MachineConfig, StateDefinition};
pub use engine::{FsmError, StateMachine};
