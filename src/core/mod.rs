//! Core configuration and history types.
//!
//! This module contains the data the engine operates on:
//! - Machine configuration (states and their event tables)
//! - Ordered, name-keyed maps backing the configuration
//! - Visited-state history with an undo/redo cursor
//! - Existence checks over a configuration
//!
//! Nothing here performs I/O; every type is plain data plus pure queries.

mod config;
mod history;
mod map;
mod validation;

pub use config::{MachineConfig, StateDefinition, StateMap, TransitionMap};
pub use history::History;
pub use map::OrderedMap;
pub use validation::ConfigViolation;
