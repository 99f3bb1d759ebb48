//! Command runner abstraction for testable process invocation
//!
//! Isolates the one external-process side effect behind a narrow trait so
//! tests can inject a fake instead of spawning a real binary.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Outcome of an external command: exit status plus captured stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// True when the command exited with status zero
    pub status_ok: bool,
    /// Captured standard output, lossily decoded as UTF-8
    pub stdout: String,
}

/// Abstraction over spawning an external command in a working directory
pub trait CommandRunner {
    /// Run `program` with `args`, using `work_dir` as the working directory.
    ///
    /// Returns `Err` only when the process cannot be spawned at all; a
    /// non-zero exit is reported through [`RunOutput::status_ok`].
    fn run(&self, program: &str, args: &[&str], work_dir: &Path) -> io::Result<RunOutput>;
}

/// Production runner using `std::process::Command`
#[derive(Debug, Default, Clone)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], work_dir: &Path) -> io::Result<RunOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(work_dir)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        Ok(RunOutput {
            status_ok: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
