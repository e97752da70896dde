//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the
//! events it accepts and the state each event leads to. The engine only
//! ever reads a configuration, so one value can back many machines.

use super::map::OrderedMap;
use serde::{Deserialize, Serialize};

/// Event name to target state name, in declaration order.
pub type TransitionMap = OrderedMap<String>;

/// State name to state definition, in declaration order.
pub type StateMap = OrderedMap<StateDefinition>;

/// Outbound transitions of a single state.
///
/// A definition without a `transitions` key deserializes to an empty
/// table, which makes the state a dead end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event name to target state name
    #[serde(default)]
    pub transitions: TransitionMap,
}

impl StateDefinition {
    pub fn new(transitions: TransitionMap) -> Self {
        Self { transitions }
    }

    /// Target reached by `event` from this state, if defined.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check if no event leaves this state.
    pub fn is_final(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Complete configuration of a state machine.
///
/// The engine trusts the shape of the configuration: `initial` is expected
/// to name one of `states`, and transition targets are expected to exist.
/// Call [`MachineConfig::validate`] to check this explicitly.
///
/// # Example
///
/// ```rust
/// use waymark::core::MachineConfig;
///
/// let config: MachineConfig = serde_json::from_str(
///     r#"{
///         "initial": "A",
///         "states": {
///             "A": { "transitions": { "toB": "B" } },
///             "B": { "transitions": { "toA": "A" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial(), "A");
/// assert_eq!(config.target("A", "toB"), Some("B"));
/// assert_eq!(config.target("B", "toB"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Name of the starting state
    pub initial: String,
    /// Every state the machine may occupy
    pub states: StateMap,
}

impl MachineConfig {
    /// Create a configuration from its parts.
    pub fn new(initial: impl Into<String>, states: StateMap) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Start a [`ConfigBuilder`](crate::builder::ConfigBuilder).
    pub fn builder() -> crate::builder::ConfigBuilder {
        crate::builder::ConfigBuilder::new()
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn states(&self) -> &StateMap {
        &self.states
    }

    /// Definition of `name`, if declared.
    pub fn state(&self, name: &str) -> Option<&StateDefinition> {
        self.states.get(name)
    }

    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Target reached by `event` from `state`, if both are defined.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.state(state).and_then(|definition| definition.target(event))
    }
}
