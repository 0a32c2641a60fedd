//! The dispatch loop: registry order in, run report out.
//!
//! Triggers run strictly one after another, and matches within a trigger
//! run strictly one after another; no invocation overlaps another. Trigger
//! failures are data in the report, never an early return; only
//! configuration faults abort before the loop starts.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use postrun_core::{Applicability, RunContext, Trigger, TriggerRegistry};

use crate::error::DispatchError;
use crate::resolver::PathResolver;
use crate::state::{self, StateFile};

/// Which triggers a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunScope {
    /// Every registered trigger, in registration order.
    All,
    /// Only the named triggers, still in registration order.
    Named(Vec<String>),
}

/// Per-trigger classification for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerOutcome {
    /// At least one matched path was processed successfully.
    Applied,
    /// Every matched path was declared not applicable by the trigger.
    Skipped,
    /// The interest set matched nothing this run.
    NotApplicable,
    /// Matched paths carry the same fingerprint as the last successful run.
    Unchanged,
    /// At least one matched path failed.
    Failed,
}

/// One recorded failure: which trigger, on which path, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub trigger: String,
    pub path: PathBuf,
    pub reason: String,
}

/// What one trigger did during a run.
#[derive(Debug, Clone, Serialize)]
pub struct TriggerRun {
    pub name: String,
    pub outcome: TriggerOutcome,
    /// Matched paths processed successfully.
    pub applied: usize,
    /// Matched paths the trigger declared not applicable.
    pub skipped: usize,
    pub failures: Vec<FailureRecord>,
}

impl TriggerRun {
    fn untriggered(name: &str, outcome: TriggerOutcome) -> Self {
        Self {
            name: name.to_string(),
            outcome,
            applied: 0,
            skipped: 0,
            failures: Vec::new(),
        }
    }
}

/// Aggregate record of one dispatch run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub duration_ms: u128,
    /// Triggers whose exec ran at least once.
    pub executed: usize,
    /// Triggers that recorded at least one failure.
    pub failed: usize,
    pub triggers: Vec<TriggerRun>,
}

impl RunReport {
    /// Overall success: no trigger reported a failure.
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &FailureRecord> {
        self.triggers.iter().flat_map(|t| t.failures.iter())
    }
}

/// Run the dispatch loop over `registry` for `scope`.
///
/// Pre-flight validates every registered trigger's patterns and every name
/// in the scope; both are configuration faults that abort with no trigger
/// executed. After that the loop never aborts early: a failing trigger is
/// recorded and dispatch moves on, so every registered trigger is attempted
/// before the non-zero exit surfaces.
///
/// The state store is consulted and updated in memory; the caller decides
/// whether to persist it (never after a dry run).
pub fn run(
    registry: &TriggerRegistry,
    scope: RunScope,
    ctx: &RunContext<'_>,
    resolver: &dyn PathResolver,
    state: &mut StateFile,
) -> Result<RunReport, DispatchError> {
    let started_at = Utc::now();
    let clock = Instant::now();

    // Configuration faults are fatal before any dispatch begins.
    for trigger in registry.iter() {
        resolver
            .validate(&trigger.interest())
            .map_err(|source| DispatchError::Pattern {
                trigger: trigger.name().to_string(),
                source,
            })?;
    }
    if let RunScope::Named(names) = &scope {
        for name in names {
            if registry.get(name).is_none() {
                return Err(DispatchError::UnknownTrigger { name: name.clone() });
            }
        }
    }

    let mut report = RunReport {
        started_at,
        duration_ms: 0,
        executed: 0,
        failed: 0,
        triggers: Vec::new(),
    };

    for trigger in registry.iter() {
        if let RunScope::Named(names) = &scope {
            if !names.iter().any(|n| n == trigger.name()) {
                continue;
            }
        }
        let run = dispatch_one(trigger, ctx, resolver, state);
        match run.outcome {
            TriggerOutcome::NotApplicable | TriggerOutcome::Unchanged => {}
            _ => report.executed += 1,
        }
        if run.outcome == TriggerOutcome::Failed {
            report.failed += 1;
        }
        report.triggers.push(run);
    }

    report.duration_ms = clock.elapsed().as_millis();
    Ok(report)
}

fn dispatch_one(
    trigger: &dyn Trigger,
    ctx: &RunContext<'_>,
    resolver: &dyn PathResolver,
    state: &mut StateFile,
) -> TriggerRun {
    let name = trigger.name();

    let matches = resolver.resolve(&trigger.interest());
    if matches.is_empty() {
        tracing::debug!("{name}: no matching paths");
        return TriggerRun::untriggered(name, TriggerOutcome::NotApplicable);
    }

    let fingerprint = state::fingerprint(&matches);
    if !ctx.force() && state.unchanged(name, &fingerprint) {
        tracing::info!("{name}: unchanged since last run");
        return TriggerRun::untriggered(name, TriggerOutcome::Unchanged);
    }

    let mut run = TriggerRun::untriggered(name, TriggerOutcome::Skipped);
    for matched in &matches {
        tracing::info!("{name}: processing {}", matched.path.display());
        let status = trigger.exec(ctx, matched);
        match status.applicability {
            Applicability::Success => run.applied += 1,
            Applicability::Skip => run.skipped += 1,
            Applicability::Fail { reason } => {
                tracing::error!("{name}: failed on {}: {reason}", matched.path.display());
                run.failures.push(FailureRecord {
                    trigger: name.to_string(),
                    path: matched.path.clone(),
                    reason,
                });
            }
        }
        if status.stop {
            break;
        }
    }

    run.outcome = if !run.failures.is_empty() {
        TriggerOutcome::Failed
    } else if run.applied > 0 {
        TriggerOutcome::Applied
    } else {
        TriggerOutcome::Skipped
    };

    // Remember the change-set only after a clean pass, and never during a
    // dry run — the external work did not actually happen.
    if run.failures.is_empty() && !ctx.dry_run() {
        state.record(name, fingerprint);
    }

    run
}
