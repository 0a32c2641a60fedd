//! Icon theme cache trigger.

use postrun_core::{CommandLine, PathMatch, RunContext, Trigger, TriggerStatus};

/// Regenerate `icon-theme.cache` for each installed theme.
///
/// Runs per match. A directory without an `index.theme` is not a theme
/// (gtk-update-icon-cache would refuse it), so those matches are skipped
/// rather than failed.
pub struct IconCaches;

impl Trigger for IconCaches {
    fn name(&self) -> &str {
        "icon-caches"
    }

    fn description(&self) -> &str {
        "Regenerate icon theme caches"
    }

    fn interest(&self) -> Vec<String> {
        vec!["/usr/share/icons/*".into()]
    }

    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus {
        if !matched.is_dir() || !matched.path.join("index.theme").is_file() {
            return TriggerStatus::skip();
        }
        let cmd = CommandLine::new("/usr/bin/gtk-update-icon-cache")
            .arg("-ft")
            .arg(matched.path.display().to_string());
        match ctx.run_command(&cmd) {
            Ok(()) => TriggerStatus::success(),
            // One broken theme must not block the remaining themes.
            Err(err) => TriggerStatus::fail(err.to_string()),
        }
    }
}
