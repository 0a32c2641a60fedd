//! Run-wide options threaded into every trigger invocation.

use std::path::{Path, PathBuf};

use crate::runner::{CommandLine, CommandRunner, ExecError};

/// Read-only snapshot of run-wide options, shared by reference across all
/// trigger invocations. Triggers must not hold a reference past their own
/// invocation.
pub struct RunContext<'a> {
    root: PathBuf,
    dry_run: bool,
    force: bool,
    runner: &'a dyn CommandRunner,
}

impl<'a> RunContext<'a> {
    /// A context rooted at `/` with dry-run and force unset.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            root: PathBuf::from("/"),
            dry_run: false,
            force: false,
            runner,
        }
    }

    /// Operate against an alternate filesystem root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn force(&self) -> bool {
        self.force
    }

    /// Execute a fixed argument vector through the run's command runner.
    ///
    /// In dry-run mode the command is logged and reported as successful
    /// without being launched. A launch error and a non-zero exit are both
    /// errors here — a failed launch is never a skip.
    pub fn run_command(&self, cmd: &CommandLine) -> Result<(), ExecError> {
        if self.dry_run {
            tracing::info!("[dry-run] would run: {cmd}");
            return Ok(());
        }

        tracing::debug!("running: {cmd}");
        let code = self.runner.run(cmd)?;
        if code != 0 {
            return Err(ExecError::ExitStatus {
                program: cmd.program().to_string(),
                code,
            });
        }
        Ok(())
    }
}
