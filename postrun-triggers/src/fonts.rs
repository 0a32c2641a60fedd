//! Fontconfig cache trigger.

use postrun_core::{CommandLine, PathMatch, RunContext, Trigger, TriggerStatus};

/// Rebuild fontconfig caches when font directories change.
pub struct FontCache;

impl Trigger for FontCache {
    fn name(&self) -> &str {
        "font-cache"
    }

    fn description(&self) -> &str {
        "Rebuild fontconfig caches"
    }

    fn interest(&self) -> Vec<String> {
        vec!["/usr/share/fonts".into()]
    }

    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus {
        if !matched.is_dir() {
            return TriggerStatus::skip();
        }
        // fc-cache walks the whole fontconfig path itself.
        let cmd = CommandLine::new("/usr/bin/fc-cache").arg("-f");
        match ctx.run_command(&cmd) {
            Ok(()) => TriggerStatus::success().and_stop(),
            Err(err) => TriggerStatus::fail(err.to_string()).and_stop(),
        }
    }
}
