//! Errors raised by state machine operations.

use thiserror::Error;

/// Misuse of a [`StateMachine`](super::StateMachine).
///
/// Every error leaves the machine exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// No configuration was supplied at construction
    #[error("State machine configuration is missing")]
    InvalidConfig,

    /// `change_state` named a state the configuration does not declare
    #[error("Unknown state '{state}'")]
    InvalidState { state: String },

    /// `trigger` named an event the current state does not accept
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: String, event: String },
}
