//! `postrun run` — dispatch triggers and report the outcome.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use postrun_core::{RunContext, SystemRunner};
use postrun_dispatch::{
    dispatch, state, GlobResolver, RunReport, RunScope, TriggerOutcome,
};
use postrun_triggers::builtin_registry;

/// Arguments for `postrun run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Names of triggers to run (omit to run every registered trigger).
    pub triggers: Vec<String>,

    /// Show what would run without launching any external tool.
    #[arg(long)]
    pub dry_run: bool,

    /// Re-run triggers even if their watched paths are unchanged.
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Operate against an alternate filesystem root.
    #[arg(long, default_value = "/")]
    pub root: PathBuf,

    /// Emit the run report as machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let registry = builtin_registry().context("invalid built-in trigger registry")?;

        let runner = SystemRunner;
        let ctx = RunContext::new(&runner)
            .with_root(&self.root)
            .with_dry_run(self.dry_run)
            .with_force(self.force);
        let resolver = GlobResolver::with_root(&self.root);

        let state_path = state::state_path_under(&self.root);
        let mut run_state = state::load_at(&state_path)
            .with_context(|| format!("failed to load state from {}", state_path.display()))?;

        let scope = if self.triggers.is_empty() {
            RunScope::All
        } else {
            RunScope::Named(self.triggers.clone())
        };

        let report = dispatch::run(&registry, scope, &ctx, &resolver, &mut run_state)
            .context("trigger dispatch failed")?;

        // Triggers that completed cleanly recorded their fingerprints even
        // if a sibling failed; persist whatever was learned.
        if !self.dry_run {
            state::save_at(&state_path, &run_state)
                .with_context(|| format!("failed to save state to {}", state_path.display()))?;
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("failed to serialize run report")?
            );
        } else {
            print_report(&report, self.dry_run);
        }

        if !report.success() {
            anyhow::bail!("{} trigger(s) failed", report.failed);
        }
        Ok(())
    }
}

fn print_report(report: &RunReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    for t in &report.triggers {
        match t.outcome {
            TriggerOutcome::Applied => {
                println!(
                    "{prefix}{} {} ({} path(s) processed)",
                    "✓".green().bold(),
                    t.name,
                    t.applied
                );
            }
            TriggerOutcome::Skipped => {
                println!("{prefix}{} {} — nothing applicable", "·".bright_black(), t.name);
            }
            TriggerOutcome::Unchanged => {
                println!("{prefix}{} {} — unchanged", "·".bright_black(), t.name);
            }
            TriggerOutcome::NotApplicable => {}
            TriggerOutcome::Failed => {
                println!(
                    "{prefix}{} {} — {} failure(s)",
                    "✗".red().bold(),
                    t.name,
                    t.failures.len()
                );
                for failure in &t.failures {
                    println!("    {} {}: {}", "↳".red(), failure.path.display(), failure.reason);
                }
            }
        }
    }

    println!(
        "{prefix}{} executed, {} failed in {}ms",
        report.executed, report.failed, report.duration_ms
    );
}
