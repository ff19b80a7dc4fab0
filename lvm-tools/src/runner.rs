// SPDX-License-Identifier: GPL-3.0-only

//! Process execution for the wrapped tools
//!
//! Every call blocks until the child exits. Standard output and standard
//! error are captured separately; on failure the captured standard error
//! becomes the error message verbatim.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use thiserror::Error;
use tracing::debug;

/// A command that exited nonzero or could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{stderr}")]
pub struct CommandFailure {
    /// Whatever the command printed to stdout before failing
    pub stdout: String,
    pub stderr: String,
}

/// Runs external programs on behalf of the tool wrappers.
pub trait CommandRunner {
    /// Run `program`, returning its stdout on a zero exit status.
    fn run_with_output(
        &self,
        program: &Path,
        args: &[String],
    ) -> std::result::Result<Vec<u8>, CommandFailure>;

    /// Run `program` for its exit status only.
    fn run_without_output(
        &self,
        program: &Path,
        args: &[String],
    ) -> std::result::Result<(), CommandFailure> {
        self.run_with_output(program, args).map(|_| ())
    }
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run_with_output(
        &self,
        program: &Path,
        args: &[String],
    ) -> std::result::Result<Vec<u8>, CommandFailure> {
        execute(program, args, Stdio::piped()).map(|output| output.stdout)
    }

    fn run_without_output(
        &self,
        program: &Path,
        args: &[String],
    ) -> std::result::Result<(), CommandFailure> {
        execute(program, args, Stdio::null()).map(|_| ())
    }
}

/// Spawn `program` with stdin closed and stderr captured, waiting for it to exit.
fn execute(
    program: &Path,
    args: &[String],
    stdout: Stdio,
) -> std::result::Result<Output, CommandFailure> {
    debug!("running {}", render(program, args));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(stdout)
        .stderr(Stdio::piped())
        .output()
        .map_err(|error| CommandFailure {
            stdout: String::new(),
            stderr: error.to_string(),
        })?;

    if !output.status.success() {
        return Err(CommandFailure {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(output)
}

/// Format a command line for logs.
pub fn render(program: &Path, args: &[String]) -> String {
    if args.is_empty() {
        program.display().to_string()
    } else {
        format!("{} {}", program.display(), args.join(" "))
    }
}
