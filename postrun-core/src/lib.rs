//! Postrun core library — trigger contract, status protocol, registry, and
//! the external command boundary.
//!
//! Public API surface:
//! - [`types`] — matched paths and the [`TriggerStatus`] protocol
//! - [`trigger`] — the [`Trigger`] trait and [`FnTrigger`]
//! - [`registry`] — ordered, validated [`TriggerRegistry`]
//! - [`context`] — read-only [`RunContext`] threaded into every invocation
//! - [`runner`] — [`CommandRunner`] boundary and the production [`SystemRunner`]
//! - [`error`] — [`RegistryError`]

pub mod context;
pub mod error;
pub mod registry;
pub mod runner;
pub mod trigger;
pub mod types;

pub use context::RunContext;
pub use error::RegistryError;
pub use registry::TriggerRegistry;
pub use runner::{CommandLine, CommandRunner, ExecError, SystemRunner};
pub use trigger::{FnTrigger, Trigger};
pub use types::{Applicability, PathKind, PathMatch, TriggerStatus};
