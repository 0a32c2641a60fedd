//! Dynamic-linker cache trigger.

use postrun_core::{CommandLine, PathMatch, RunContext, Trigger, TriggerStatus};

/// Rebuild `ld.so.cache` when shared-library directories change.
pub struct Ldconfig;

impl Trigger for Ldconfig {
    fn name(&self) -> &str {
        "ldconfig"
    }

    fn description(&self) -> &str {
        "Rebuild the dynamic linker cache"
    }

    fn interest(&self) -> Vec<String> {
        vec![
            "/usr/lib64".into(),
            "/usr/lib32".into(),
            "/usr/lib".into(),
            "/etc/ld.so.conf.d".into(),
        ]
    }

    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus {
        if !matched.is_dir() {
            return TriggerStatus::skip();
        }
        let cmd = CommandLine::new("/sbin/ldconfig")
            .arg("-r")
            .arg(ctx.root().display().to_string());
        match ctx.run_command(&cmd) {
            // The cache covers every library directory at once.
            Ok(()) => TriggerStatus::success().and_stop(),
            Err(err) => TriggerStatus::fail(err.to_string()).and_stop(),
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
    fn ldconfig_targets_the_context_root() {
        let runner = RecordingRunner {
            seen: RefCell::new(Vec::new()),
        };
        let ctx = RunContext::new(&runner).with_root("/sysroot");
        let matched = PathMatch {
            path: PathBuf::from("/sysroot/usr/lib64"),
            kind: PathKind::Directory,
        };
        let status = Ldconfig.exec(&ctx, &matched);
        assert_eq!(status, TriggerStatus::success().and_stop());
        assert_eq!(runner.seen.borrow().as_slice(), ["/sbin/ldconfig -r /sysroot"]);
    }
}
