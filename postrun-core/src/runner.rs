//! External command boundary.
//!
//! Triggers never spawn processes themselves; they build a fixed
//! [`CommandLine`] and hand it to the [`CommandRunner`] carried by the run
//! context. The boundary is a trait so dispatch tests can substitute a fake
//! and never touch real system tools.

use std::fmt;
use std::process::Command;

use thiserror::Error;

/// Errors from launching or waiting on an external command.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The process could not be started (binary missing, not executable).
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exited with a non-zero status.
    #[error("{program} exited with status {code}")]
    ExitStatus { program: String, code: i32 },

    /// The process was killed by a signal and produced no exit code.
    #[error("{program} terminated by signal")]
    Signal { program: String },
}

/// A fully-specified argument vector. Matched-path content is only ever
/// passed as a discrete, unparsed argument — never interpolated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Launch an external program, wait synchronously, and report its exit code.
///
/// A non-zero exit code is returned as `Ok(code)`; only a failure to launch
/// (or an abnormal termination) is an `Err`. There is no timeout: a hung
/// tool hangs the run.
pub trait CommandRunner {
    fn run(&self, cmd: &CommandLine) -> Result<i32, ExecError>;
}

/// The production runner. Stdout/stderr are inherited so the maintenance
/// tool's own output reaches the operator unfiltered.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &CommandLine) -> Result<i32, ExecError> {
        let status = Command::new(cmd.program())
            .args(cmd.args())
            .status()
            .map_err(|source| ExecError::Launch {
                program: cmd.program().to_string(),
                source,
            })?;

        status.code().ok_or_else(|| ExecError::Signal {
            program: cmd.program().to_string(),
        })
    }
}
