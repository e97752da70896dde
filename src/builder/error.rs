//! Build errors for configuration and state machine builders.

use crate::core::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building configurations and state machines.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state or transition")]
    NoStates,

    #[error("Configuration not specified. Call .config(config) before .build()")]
    MissingConfig,

    #[error("Configuration failed validation with {} violation(s)", .0.len())]
    InvalidConfig(Vec<ConfigViolation>),
}
