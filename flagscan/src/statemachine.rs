//! A checker of transitions between states.
//!
//! The machine holds no current state: it only tells whether moving from one state to another
//! has been configured.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Status;

/// Configures the states that can be reached from one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<S> {
    /// The state to move from.
    pub current: S,

    /// The states that can be reached.
    pub allowed: Vec<S>,
}

impl<S> Transition<S> {
    /// Create a new transition.
    pub fn new(current: S, allowed: impl IntoIterator<Item = S>) -> Self {
        Transition {
            current,
            allowed: allowed.into_iter().collect(),
        }
    }
}

/// Defines a state machine checker.
///
/// A strict machine requires staying in the same state to be configured as any other
/// transition, while a lenient one always allows it.
#[derive(Clone, Debug)]
pub struct StateMachine<S> {
    name: String,
    strict: bool,
    config: BTreeMap<S, BTreeSet<S>>,
}

impl<S> StateMachine<S>
where
    S: Ord + Copy + fmt::Display,
{
    /// Create a new state machine. A state configured twice keeps its last configuration.
    pub fn new<I>(name: impl Into<String>, strict: bool, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S>>,
    {
        let config = transitions
            .into_iter()
            .map(|t| (t.current, t.allowed.into_iter().collect()))
            .collect();

        StateMachine {
            name: name.into(),
            strict,
            config,
        }
    }

    /// The name of the machine.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate if the machine is strict.
    #[inline(always)]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Evaluate if moving from `current` to `next` is allowed.
    pub fn is_allowed(&self, current: S, next: S) -> bool {
        if !self.strict && current == next {
            return true;
        }

        let Some(allowed) = self.config.get(&current) else {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "[{=str}] ({} -> {}) not possible; no config for current state",
                self.name.as_str(),
                defmt::Display2Format(&current),
                defmt::Display2Format(&next)
            );
            return false;
        };

        if !allowed.contains(&next) {
            #[cfg(feature = "defmt")]
            defmt::info!(
                "[{=str}] ({} -> {}) not possible; invalid transition",
                self.name.as_str(),
                defmt::Display2Format(&current),
                defmt::Display2Format(&next)
            );
            return false;
        }

        true
    }

    /// Check if moving from `current` to `next` is allowed.
    #[track_caller]
    pub fn check(&self, current: S, next: S) -> Result<(), Status> {
        if !self.is_allowed(current, next) {
            return Err(Status::invalid_argument("transition not valid")
                .with_arg(format_args!("{current} -> {next}")));
        }

        Ok(())
    }
}
