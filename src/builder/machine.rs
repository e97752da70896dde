//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::MachineConfig;
use crate::engine::StateMachine;
use std::sync::Arc;
use stillwater::validation::Validation;

/// Builder for constructing state machines with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct StateMachineBuilder {
    config: Option<Arc<MachineConfig>>,
    validate: bool,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration (required).
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = Some(Arc::new(config));
        self
    }

    /// Set a configuration shared with other machines.
    pub fn shared_config(mut self, config: Arc<MachineConfig>) -> Self {
        self.config = Some(config);
        self
    }

    /// Run [`MachineConfig::validate`] before building.
    pub fn validated(mut self) -> Self {
        self.validate = true;
        self
    }

    /// Build the state machine.
    /// Returns an error if the configuration is missing or fails validation.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        let config = self.config.ok_or(BuildError::MissingConfig)?;

        if self.validate {
            if let Validation::Failure(violations) = config.validate() {
                return Err(BuildError::InvalidConfig(
                    violations.iter().cloned().collect(),
                ));
            }
        }

        Ok(StateMachine::new(config))
    }
}
