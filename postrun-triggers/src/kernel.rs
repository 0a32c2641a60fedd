//! Kernel module dependency trigger.

use postrun_core::{CommandLine, PathMatch, RunContext, Trigger, TriggerStatus};

/// Regenerate `modules.dep` for every installed kernel tree.
///
/// Unlike the single-shot cache triggers this one runs per match: each
/// `/lib/modules/<version>` directory names its own depmod invocation, with
/// the version passed as a discrete argument.
pub struct Depmod;

impl Trigger for Depmod {
    fn name(&self) -> &str {
        "depmod"
    }

    fn description(&self) -> &str {
        "Regenerate kernel module dependency maps"
    }

    fn interest(&self) -> Vec<String> {
        vec!["/lib/modules/*".into()]
    }

    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus {
        if !matched.is_dir() {
            return TriggerStatus::skip();
        }
        let Some(version) = matched.path.file_name().and_then(|n| n.to_str()) else {
            return TriggerStatus::skip();
        };
        let cmd = CommandLine::new("/sbin/depmod")
            .arg("-b")
            .arg(ctx.root().display().to_string())
            .arg("-a")
            .arg(version);
        match ctx.run_command(&cmd) {
            Ok(()) => TriggerStatus::success(),
            // Keep going: an unreadable kernel tree must not block the rest.
            Err(err) => TriggerStatus::fail(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use super::*;
    use postrun_core::{CommandRunner, ExecError, PathKind};

    struct RecordingRunner {
        seen: RefCell<Vec<String>>,
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, cmd: &CommandLine) -> Result<i32, ExecError> {
            self.seen.borrow_mut().push(cmd.to_string());
            Ok(0)
        }
    }

    #[test]
    fn version_component_is_passed_as_a_discrete_argument() {
        let runner = RecordingRunner {
            seen: RefCell::new(Vec::new()),
        };
        let ctx = RunContext::new(&runner);
        let matched = PathMatch {
            path: PathBuf::from("/lib/modules/6.6.8-270.current"),
            kind: PathKind::Directory,
        };
        let status = Depmod.exec(&ctx, &matched);
        assert_eq!(status, TriggerStatus::success());
        assert!(!status.stop, "depmod runs once per kernel tree");
        assert_eq!(
            runner.seen.borrow().as_slice(),
            ["/sbin/depmod -b / -a 6.6.8-270.current"]
        );
    }

    #[test]
    fn non_directory_matches_are_skipped() {
        let runner = RecordingRunner {
            seen: RefCell::new(Vec::new()),
        };
        let ctx = RunContext::new(&runner);
        let matched = PathMatch {
            path: PathBuf::from("/lib/modules/README"),
            kind: PathKind::File,
        };
        assert_eq!(Depmod.exec(&ctx, &matched), TriggerStatus::skip());
        assert!(runner.seen.borrow().is_empty());
    }
}
