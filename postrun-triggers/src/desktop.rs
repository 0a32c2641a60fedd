//! Desktop-environment cache triggers: application database, MIME database,
//! compiled GSettings schemas.

use postrun_core::{CommandLine, PathMatch, RunContext, Trigger, TriggerStatus};

/// Refresh the desktop-file MimeType cache.
pub struct DesktopDatabase;

impl Trigger for DesktopDatabase {
    fn name(&self) -> &str {
        "desktop-database"
    }

    fn description(&self) -> &str {
        "Update the desktop file application database"
    }

    fn interest(&self) -> Vec<String> {
        vec!["/usr/share/applications".into()]
    }

    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus {
        if !matched.is_dir() {
            return TriggerStatus::skip();
        }
        let cmd = CommandLine::new("/usr/bin/update-desktop-database")
            .arg(matched.path.display().to_string());
        match ctx.run_command(&cmd) {
            Ok(()) => TriggerStatus::success().and_stop(),
            Err(err) => TriggerStatus::fail(err.to_string()).and_stop(),
        }
    }
}

/// Rebuild the shared MIME-info database.
pub struct MimeDatabase;

impl Trigger for MimeDatabase {
    fn name(&self) -> &str {
        "mime-database"
    }

    fn description(&self) -> &str {
        "Rebuild the shared MIME-info database"
    }

    fn interest(&self) -> Vec<String> {
        vec!["/usr/share/mime/packages".into()]
    }

    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus {
        if !matched.is_dir() {
            return TriggerStatus::skip();
        }
        // The tool wants the database root, not the packages directory.
        let mime_root = ctx.root().join("usr/share/mime");
        let cmd = CommandLine::new("/usr/bin/update-mime-database")
            .arg(mime_root.display().to_string());
        match ctx.run_command(&cmd) {
            Ok(()) => TriggerStatus::success().and_stop(),
            Err(err) => TriggerStatus::fail(err.to_string()).and_stop(),
        }
    }
}

/// Compile GSettings schemas in place.
pub struct GlibSchemas;

impl Trigger for GlibSchemas {
    fn name(&self) -> &str {
        "glib-schemas"
    }

    fn description(&self) -> &str {
        "Compile GSettings schemas"
    }

    fn interest(&self) -> Vec<String> {
        vec!["/usr/share/glib-2.0/schemas".into()]
    }

    fn exec(&self, ctx: &RunContext<'_>, matched: &PathMatch) -> TriggerStatus {
        if !matched.is_dir() {
            return TriggerStatus::skip();
        }
        let cmd = CommandLine::new("/usr/bin/glib-compile-schemas")
            .arg(matched.path.display().to_string());
        match ctx.run_command(&cmd) {
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

    impl RecordingRunner {
        fn new() -> Self {
            Self {
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, cmd: &CommandLine) -> Result<i32, ExecError> {
            self.seen.borrow_mut().push(cmd.to_string());
            Ok(0)
        }
    }

    fn dir(path: &str) -> PathMatch {
        PathMatch {
            path: PathBuf::from(path),
            kind: PathKind::Directory,
        }
    }

    #[test]
    fn desktop_database_receives_the_matched_path_verbatim() {
        let runner = RecordingRunner::new();
        let ctx = RunContext::new(&runner).with_root("/sysroot");
        DesktopDatabase.exec(&ctx, &dir("/sysroot/usr/share/applications"));
        assert_eq!(
            runner.seen.borrow().as_slice(),
            ["/usr/bin/update-desktop-database /sysroot/usr/share/applications"]
        );
    }

    #[test]
    fn mime_database_targets_the_database_root_not_the_packages_dir() {
        let runner = RecordingRunner::new();
        let ctx = RunContext::new(&runner).with_root("/sysroot");
        MimeDatabase.exec(&ctx, &dir("/sysroot/usr/share/mime/packages"));
        assert_eq!(
            runner.seen.borrow().as_slice(),
            ["/usr/bin/update-mime-database /sysroot/usr/share/mime"]
        );
    }

    #[test]
    fn glib_schemas_compile_in_place() {
        let runner = RecordingRunner::new();
        let ctx = RunContext::new(&runner);
        let status = GlibSchemas.exec(&ctx, &dir("/usr/share/glib-2.0/schemas"));
        assert_eq!(status, TriggerStatus::success().and_stop());
        assert_eq!(
            runner.seen.borrow().as_slice(),
            ["/usr/bin/glib-compile-schemas /usr/share/glib-2.0/schemas"]
        );
    }
}
