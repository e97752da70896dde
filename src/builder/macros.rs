//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a literal table.
///
/// State and event names are written as identifiers. States keep the order
/// in which they are listed.
///
/// # Example
///
/// ```
/// use waymark::machine_config;
///
/// let config = machine_config! {
///     initial: Locked,
///     states: {
///         Locked { coin => Unlocked },
///         Unlocked { push => Locked, coin => Unlocked },
///         Broken {},
///     }
/// };
///
/// assert_eq!(config.initial(), "Locked");
/// assert_eq!(config.target("Unlocked", "push"), Some("Locked"));
/// assert!(config.state("Broken").unwrap().is_final());
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident { $($event:ident => $target:ident),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let mut states = $crate::core::StateMap::new();
        $(
            #[allow(unused_mut)]
            let mut transitions = $crate::core::TransitionMap::new();
            $(
                transitions.insert(stringify!($event), stringify!($target).to_string());
            )*
            states.insert(
                stringify!($state),
                $crate::core::StateDefinition::new(transitions),
            );
        )*
        $crate::core::MachineConfig::new(stringify!($initial), states)
    }};
}
