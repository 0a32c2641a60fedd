//! The trigger contract: declarative metadata plus one execution method.

use crate::context::RunContext;
use crate::types::{PathMatch, TriggerStatus};

/// A named unit of work bound to an interest set of filesystem paths.
///
/// Triggers are constructed once at process start and are immutable for the
/// lifetime of the run. `exec` is called once per matched path, subject to
/// the stop bit; it must not mutate the registry or the context.
pub trait Trigger {
    /// Short identifier, unique within the registry. Diagnostics only.
    fn name(&self) -> &str;

    /// One-line summary shown by `postrun list`.
    fn description(&self) -> &str {
        ""
    }

    /// Absolute glob patterns this trigger cares about, in declaration
    /// order. Must be non-empty.
    fn interest(&self) -> Vec<String>;

    /// Do the work for one matched path.
    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus;
}

/// Descriptor plus closure — the table-of-closures representation of the
/// contract. Used for ad-hoc triggers and throughout the dispatch tests.
pub struct FnTrigger<F>
where
    F: Fn(&RunContext<'_>, &PathMatch) -> TriggerStatus,
{
    name: String,
    description: String,
    interest: Vec<String>,
    exec_fn: F,
}

impl<F> FnTrigger<F>
where
    F: Fn(&RunContext<'_>, &PathMatch) -> TriggerStatus,
{
    pub fn new(
        name: impl Into<String>,
        interest: impl IntoIterator<Item = impl Into<String>>,
        exec_fn: F,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            interest: interest.into_iter().map(Into::into).collect(),
            exec_fn,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl<F> Trigger for FnTrigger<F>
where
    F: Fn(&RunContext<'_>, &PathMatch) -> TriggerStatus,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn interest(&self) -> Vec<String> {
        self.interest.clone()
    }

    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus {
        (self.exec_fn)(ctx, matched)
    }
}
