//! Error types for postrun-core.

use thiserror::Error;

/// Configuration faults detected while building the trigger registry.
///
/// All of these are fatal at startup: a run never starts with a registry
/// that failed validation.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A trigger was registered with an empty name.
    #[error("trigger name must not be empty")]
    EmptyName,

    /// A trigger declared no interest paths.
    #[error("trigger '{name}' declares no interest paths")]
    EmptyInterest { name: String },

    /// Two triggers share a name.
    #[error("trigger '{name}' is already registered")]
    DuplicateName { name: String },
}
