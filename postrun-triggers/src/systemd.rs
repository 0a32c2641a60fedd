//! Triggers for systemd-owned drop-in directories.

use postrun_core::{CommandLine, PathMatch, RunContext, Trigger, TriggerStatus};

fn root_flag(ctx: &RunContext<'_>) -> String {
    format!("--root={}", ctx.root().display())
}

/// Recreate tmpfiles entries when `/usr/lib/tmpfiles.d` changes.
pub struct Tmpfiles;

impl Trigger for Tmpfiles {
    fn name(&self) -> &str {
        "tmpfiles"
    }

    fn description(&self) -> &str {
        "Create systemd tmpfiles entries"
    }

    fn interest(&self) -> Vec<String> {
        vec!["/usr/lib/tmpfiles.d".into()]
    }

    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus {
        if !matched.is_dir() {
            return TriggerStatus::skip();
        }
        let cmd = CommandLine::new("/usr/bin/systemd-tmpfiles")
            .arg(root_flag(ctx))
            .arg("--create");
        match ctx.run_command(&cmd) {
            // One pass covers every drop-in, so stop after the first match.
            Ok(()) => TriggerStatus::success().and_stop(),
            Err(err) => TriggerStatus::fail(err.to_string()).and_stop(),
        }
    }
}

/// Create system users and groups declared under `/usr/lib/sysusers.d`.
pub struct Sysusers;

impl Trigger for Sysusers {
    fn name(&self) -> &str {
        "sysusers"
    }

    fn description(&self) -> &str {
        "Create declared system users and groups"
    }

    fn interest(&self) -> Vec<String> {
        vec!["/usr/lib/sysusers.d".into()]
    }

    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus {
        if !matched.is_dir() {
            return TriggerStatus::skip();
        }
        let cmd = CommandLine::new("/usr/bin/systemd-sysusers").arg(root_flag(ctx));
        match ctx.run_command(&cmd) {
            Ok(()) => TriggerStatus::success().and_stop(),
            Err(err) => TriggerStatus::fail(err.to_string()).and_stop(),
        }
    }
}

/// Rebuild the udev hardware database from `/usr/lib/udev/hwdb.d`.
pub struct Hwdb;

impl Trigger for Hwdb {
    fn name(&self) -> &str {
        "hwdb"
    }

    fn description(&self) -> &str {
        "Rebuild the udev hardware database"
    }

    fn interest(&self) -> Vec<String> {
        vec!["/usr/lib/udev/hwdb.d".into()]
    }

    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus {
        if !matched.is_dir() {
            return TriggerStatus::skip();
        }
        let cmd = CommandLine::new("/usr/bin/systemd-hwdb")
            .arg(root_flag(ctx))
            .arg("update");
        match ctx.run_command(&cmd) {
            Ok(()) => TriggerStatus::success().and_stop(),
            Err(err) => TriggerStatus::fail(err.to_string()).and_stop(),
        }
    }
}
