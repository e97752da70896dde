//! State machine that fires configured transitions and tracks history.

use crate::core::{History, MachineConfig};
use crate::engine::error::FsmError;
use std::sync::Arc;
use tracing::{debug, warn};

/// State machine driven by a shared [`MachineConfig`].
///
/// The active state is always the history entry under the cursor.
///
/// # Example
///
/// ```rust
/// use waymark::machine_config;
/// use waymark::StateMachine;
///
/// let config = machine_config! {
///     initial: A,
///     states: {
///         A { toB => B },
///         B { toA => A },
///     }
/// };
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("toB").unwrap();
/// machine.trigger("toA").unwrap();
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "B");
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "A");
/// assert!(!machine.undo());
/// assert_eq!(machine.state(), "A");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Arc<MachineConfig>,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state
    pub fn new(config: impl Into<Arc<MachineConfig>>) -> Self {
        let config = config.into();
        let history = History::new(config.initial());
        debug!(initial = %config.initial(), states = config.states().len(), "state machine created");
        Self { config, history }
    }

    /// Create a machine, failing when no configuration is supplied
    pub fn try_new(config: Option<Arc<MachineConfig>>) -> Result<Self, FsmError> {
        config.map(Self::new).ok_or(FsmError::InvalidConfig)
    }

    /// Get current state (pure)
    pub fn state(&self) -> &str {
        self.history.current()
    }

    /// Get the history cursor (pure)
    pub fn position(&self) -> usize {
        self.history.position()
    }

    /// Get state history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Handle to the configuration for building sibling machines
    pub fn shared_config(&self) -> Arc<MachineConfig> {
        Arc::clone(&self.config)
    }

    /// Check if the current state accepts no events (pure)
    pub fn is_final(&self) -> bool {
        self.config
            .state(self.state())
            .is_none_or(|definition| definition.is_final())
    }

    /// Events accepted by the current state, in configuration order
    pub fn events(&self) -> Vec<&str> {
        self.config
            .state(self.state())
            .map(|definition| definition.transitions.keys().collect())
            .unwrap_or_default()
    }

    pub fn can_trigger(&self, event: &str) -> bool {
        self.config.target(self.state(), event).is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Jump straight to `state`, ignoring transition rules.
    ///
    /// The new state is appended to the end of history without discarding
    /// entries ahead of the cursor.
    pub fn change_state(&mut self, state: &str) -> Result<(), FsmError> {
        if !self.config.contains_state(state) {
            warn!(state = %state, "rejected change to undeclared state");
            return Err(FsmError::InvalidState {
                state: state.to_owned(),
            });
        }

        debug!(from = %self.state(), to = %state, "state changed");
        self.history.push(state.to_owned());
        Ok(())
    }

    /// Fire `event` from the current state and return the new state.
    ///
    /// Any redo entries ahead of the cursor are discarded first.
    pub fn trigger(&mut self, event: &str) -> Result<&str, FsmError> {
        let from = self.history.current();
        let Some(target) = self.config.target(from, event) else {
            warn!(state = %from, event = %event, "rejected undefined transition");
            return Err(FsmError::InvalidTransition {
                state: from.to_owned(),
                event: event.to_owned(),
            });
        };

        debug!(from = %from, to = %target, event = %event, "transition fired");
        let target = target.to_owned();
        self.history.branch(target);
        Ok(self.history.current())
    }

    /// Return to the initial state with a fresh history
    pub fn reset(&mut self) {
        debug!(from = %self.state(), to = %self.config.initial(), "state machine reset");
        self.history.restart(self.config.initial());
    }

    /// States in configuration order.
    ///
    /// With `None` (or an empty event name) every declared state is listed.
    /// Otherwise only states that accept `event` are listed.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        let states = self.config.states();
        match event.filter(|event| !event.is_empty()) {
            None => states.keys().collect(),
            Some(event) => states
                .iter()
                .filter(|(_, definition)| definition.transitions.contains_key(event))
                .map(|(name, _)| name)
                .collect(),
        }
    }

    /// Step back one history entry. Returns `false` if already at the start.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            debug!(state = %self.state(), position = self.position(), "undo");
        }
        moved
    }

    /// Step forward one history entry. Returns `false` if already at the end.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            debug!(state = %self.state(), position = self.position(), "redo");
        }
        moved
    }

    /// Forget history, keeping the current state as the only entry
    pub fn clear_history(&mut self) {
        self.history.collapse();
    }
}

impl TryFrom<Option<MachineConfig>> for StateMachine {
    type Error = FsmError;

    fn try_from(config: Option<MachineConfig>) -> Result<Self, Self::Error> {
        Self::try_new(config.map(Arc::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ConfigBuilder;

    fn document_config() -> MachineConfig {
        ConfigBuilder::new()
            .initial("Draft")
            .transition("Draft", "submit", "Review")
            .transition("Review", "approve", "Published")
            .transition("Review", "reject", "Draft")
            .transition("Published", "archive", "Archived")
            .state("Archived")
            .build()
            .unwrap()
    }

    #[test]
    fn starts_in_initial_state() {
        let machine = StateMachine::new(document_config());

        assert_eq!(machine.state(), "Draft");
        assert_eq!(machine.position(), 0);
        assert_eq!(machine.history().entries(), ["Draft"]);
    }

    #[test]
    fn missing_config_is_rejected() {
        assert_eq!(
            StateMachine::try_new(None).unwrap_err(),
            FsmError::InvalidConfig
        );
        assert!(matches!(
            StateMachine::try_from(None::<MachineConfig>),
            Err(FsmError::InvalidConfig)
        ));
    }

    #[test]
    fn present_config_is_accepted() {
        let machine = StateMachine::try_from(Some(document_config())).unwrap();
        assert_eq!(machine.state(), "Draft");
    }

    #[test]
    fn trigger_follows_configured_transition() {
        let mut machine = StateMachine::new(document_config());

        assert_eq!(machine.trigger("submit").unwrap(), "Review");
        assert_eq!(machine.trigger("approve").unwrap(), "Published");
        assert_eq!(machine.position(), 2);
        assert_eq!(
            machine.history().entries(),
            ["Draft", "Review", "Published"]
        );
    }

    #[test]
    fn undefined_event_leaves_machine_untouched() {
        let mut machine = StateMachine::new(document_config());
        machine.trigger("submit").unwrap();
        let before = machine.history().clone();

        let result = machine.trigger("archive");

        assert_eq!(
            result.unwrap_err(),
            FsmError::InvalidTransition {
                state: "Review".to_string(),
                event: "archive".to_string(),
            }
        );
        assert_eq!(machine.history(), &before);
    }

    #[test]
    fn change_state_jumps_to_any_declared_state() {
        let mut machine = StateMachine::new(document_config());

        machine.change_state("Archived").unwrap();

        assert_eq!(machine.state(), "Archived");
        assert_eq!(machine.position(), 1);
        assert!(machine.is_final());
    }

    #[test]
    fn change_state_rejects_undeclared_state() {
        let mut machine = StateMachine::new(document_config());

        let result = machine.change_state("Deleted");

        assert_eq!(
            result.unwrap_err(),
            FsmError::InvalidState {
                state: "Deleted".to_string()
            }
        );
        assert_eq!(machine.state(), "Draft");
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn change_state_after_undo_appends_without_truncating() {
        let mut machine = StateMachine::new(document_config());
        machine.trigger("submit").unwrap();
        machine.trigger("approve").unwrap();
        machine.undo();
        machine.undo();

        machine.change_state("Archived").unwrap();

        assert_eq!(
            machine.history().entries(),
            ["Draft", "Review", "Published", "Archived"]
        );
        assert_eq!(machine.position(), 3);
        assert!(!machine.redo());
        assert!(machine.undo());
        assert_eq!(machine.state(), "Published");
    }

    #[test]
    fn trigger_after_undo_discards_redo_branch() {
        let mut machine = StateMachine::new(document_config());
        machine.trigger("submit").unwrap();
        machine.trigger("approve").unwrap();
        machine.undo();

        machine.trigger("reject").unwrap();

        assert_eq!(machine.history().entries(), ["Draft", "Review", "Draft"]);
        assert!(!machine.redo());
        assert_eq!(machine.state(), "Draft");
    }

    #[test]
    fn undo_and_redo_report_availability() {
        let mut machine = StateMachine::new(document_config());
        assert!(!machine.undo());
        assert!(!machine.redo());

        machine.trigger("submit").unwrap();
        assert!(machine.can_undo());
        assert!(!machine.can_redo());

        assert!(machine.undo());
        assert_eq!(machine.state(), "Draft");
        assert!(machine.can_redo());

        assert!(machine.redo());
        assert_eq!(machine.state(), "Review");
        assert!(!machine.redo());
        assert_eq!(machine.state(), "Review");
    }

    #[test]
    fn reset_restores_initial_state_and_history() {
        let mut machine = StateMachine::new(document_config());
        machine.trigger("submit").unwrap();
        machine.trigger("approve").unwrap();
        machine.undo();

        machine.reset();

        assert_eq!(machine.state(), "Draft");
        assert_eq!(machine.position(), 0);
        assert_eq!(machine.history().entries(), ["Draft"]);
    }

    #[test]
    fn clear_history_keeps_current_state() {
        let mut machine = StateMachine::new(document_config());
        machine.trigger("submit").unwrap();
        machine.trigger("approve").unwrap();
        machine.undo();

        machine.clear_history();

        assert_eq!(machine.state(), "Review");
        assert_eq!(machine.position(), 0);
        assert_eq!(machine.history().entries(), ["Review"]);
        assert!(!machine.undo());
        assert!(!machine.redo());
    }

    #[test]
    fn states_lists_all_in_config_order() {
        let machine = StateMachine::new(document_config());

        let expected = vec!["Draft", "Review", "Published", "Archived"];
        assert_eq!(machine.states(None), expected);
        assert_eq!(machine.states(Some("")), expected);
    }

    #[test]
    fn states_filters_by_event() {
        let config = ConfigBuilder::new()
            .initial("Idle")
            .transition("Idle", "stop", "Idle")
            .transition("Running", "stop", "Idle")
            .transition("Running", "pause", "Paused")
            .transition("Paused", "stop", "Idle")
            .build()
            .unwrap();
        let machine = StateMachine::new(config);

        assert_eq!(
            machine.states(Some("stop")),
            vec!["Idle", "Running", "Paused"]
        );
        assert_eq!(machine.states(Some("pause")), vec!["Running"]);
        assert!(machine.states(Some("launch")).is_empty());
    }

    #[test]
    fn events_lists_current_state_transitions() {
        let mut machine = StateMachine::new(document_config());
        machine.trigger("submit").unwrap();

        assert_eq!(machine.events(), vec!["approve", "reject"]);
        assert!(machine.can_trigger("reject"));
        assert!(!machine.can_trigger("submit"));
    }

    #[test]
    fn machines_share_one_config() {
        let first = StateMachine::new(document_config());
        let mut second = StateMachine::new(first.shared_config());

        second.trigger("submit").unwrap();

        assert!(Arc::ptr_eq(&first.shared_config(), &second.shared_config()));
        assert_eq!(first.state(), "Draft");
        assert_eq!(second.state(), "Review");
    }
}
