//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{MachineConfig, StateDefinition, StateMap};

/// Builder for constructing configurations with a fluent API.
///
/// States are recorded in the order they are first mentioned, either by
/// [`state`](ConfigBuilder::state) or as the source of a
/// [`transition`](ConfigBuilder::transition).
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: StateMap,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring an existing state changes nothing.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.states.get_or_insert_with(state, StateDefinition::default);
        self
    }

    /// Add a transition, declaring the source state if needed.
    /// The target is not declared implicitly.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .get_or_insert_with(from, StateDefinition::default)
            .transitions
            .insert(event, to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(MachineConfig::new(initial, self.states))
    }
}
