//! # postrun-dispatch
//!
//! The trigger dispatch engine: resolve each registered trigger's interest
//! set, invoke it per matched path under the stop/skip/fail protocol, and
//! fold the outcomes into a [`RunReport`].
//!
//! Call [`dispatch::run`] with a validated registry, a [`RunScope`], the
//! run context, a [`PathResolver`], and the loaded change-set state.

pub mod dispatch;
pub mod error;
pub mod resolver;
pub mod state;

pub use dispatch::{run, FailureRecord, RunReport, RunScope, TriggerOutcome, TriggerRun};
pub use error::DispatchError;
pub use resolver::{GlobResolver, PathResolver, ResolveError};
pub use state::{fingerprint, state_path_under, Fingerprint, StateFile};
