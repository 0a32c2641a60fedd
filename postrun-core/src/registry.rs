//! Ordered trigger registry.
//!
//! Registration order is execution order; there is no dependency ordering.
//! The registry is immutable once dispatch starts — the dispatcher only
//! borrows it.

use crate::error::RegistryError;
use crate::trigger::Trigger;

/// An ordered, validated collection of triggers.
#[derive(Default)]
pub struct TriggerRegistry {
    triggers: Vec<Box<dyn Trigger>>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trigger at the end of the execution order.
    ///
    /// Rejects empty names, empty interest sets, and duplicate names; all
    /// three are configuration faults that must abort startup.
    pub fn register(&mut self, trigger: Box<dyn Trigger>) -> Result<(), RegistryError> {
        let name = trigger.name();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if trigger.interest().is_empty() {
            return Err(RegistryError::EmptyInterest {
                name: name.to_string(),
            });
        }
        if self.get(name).is_some() {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }
        self.triggers.push(trigger);
        Ok(())
    }

    /// Triggers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Trigger> {
        self.triggers.iter().map(Box::as_ref)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Trigger> {
        self.triggers
            .iter()
            .find(|t| t.name() == name)
            .map(Box::as_ref)
    }

    pub fn names(&self) -> Vec<&str> {
        self.triggers.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}
