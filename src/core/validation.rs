//! Existence checks for machine configurations.
//!
//! Checks accumulate every violation through Stillwater's `Validation`
//! rather than stopping at the first dangling reference.

use super::config::MachineConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A name in the configuration that refers to an undeclared state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Initial state '{initial}' is not declared")]
    UnknownInitialState { initial: String },

    #[error("Event '{event}' on state '{state}' targets undeclared state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },
}

impl MachineConfig {
    /// Check that every referenced state is declared, collecting ALL violations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillwater::validation::Validation;
    /// use waymark::builder::ConfigBuilder;
    ///
    /// let config = ConfigBuilder::new()
    ///     .initial("Nowhere")
    ///     .transition("Open", "close", "Closed")
    ///     .build()
    ///     .unwrap();
    ///
    /// match config.validate() {
    ///     Validation::Failure(violations) => assert_eq!(violations.len(), 2),
    ///     Validation::Success(_) => panic!("expected violations"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.contains_state(&self.initial) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::UnknownInitialState {
                initial: self.initial.clone(),
            })
        });

        for (state, definition) in self.states.iter() {
            for (event, target) in definition.transitions.iter() {
                if !self.contains_state(target) {
                    checks.push(Validation::fail(ConfigViolation::UnknownTarget {
                        state: state.to_owned(),
                        event: event.to_owned(),
                        target: target.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
