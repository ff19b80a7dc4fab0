// SPDX-License-Identifier: GPL-3.0-only

//! Typed wrappers around the `lvm` command
//!
//! `LvmCli` builds argument lists for the `lvm` subcommands, runs them
//! through a [`CommandRunner`] and decodes the JSON reports into
//! [`lvm_types`] structures. Nothing is cached: every call runs the tool
//! again.

pub mod lookup;
mod presence;
mod provision;
mod report;

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use which::which;

use crate::error::SysError;
use crate::runner::{CommandFailure, CommandRunner, ProcessRunner};

pub use lookup::{
    find_logical_volume, find_physical_volume, find_volume_group, logical_volume_path,
    pool_history,
};

/// Name of the binary looked up in `PATH`.
pub const LVM_BINARY: &str = "lvm";

/// Flags appended to every reporting subcommand.
pub const REPORT_FLAGS: [&str; 5] = ["--reportformat", "json", "--units", "b", "--nosuffix"];

/// Prefix that maps a caller-supplied layer ID onto an LV name.
pub const VOLUME_NAME_PREFIX: &str = "layer.";

/// Convert an ID into the logical volume name used for it.
///
/// The ID is used verbatim: no escaping, no case folding.
pub fn volume_name_for_id(id: &str) -> String {
    format!("{VOLUME_NAME_PREFIX}{id}")
}

/// LVM CLI wrapper
#[derive(Debug, Clone)]
pub struct LvmCli<R = ProcessRunner> {
    /// Path to the lvm binary; empty when it could not be resolved
    binary_path: PathBuf,
    runner: R,
}

impl LvmCli<ProcessRunner> {
    /// Create a wrapper around the `lvm` found in `PATH`.
    ///
    /// A missing binary is not an error here: the path stays empty and each
    /// later call fails when the runner cannot execute it.
    pub fn new() -> Self {
        let binary_path = match Self::find_lvm_binary() {
            Some(path) => {
                info!("Found lvm binary at {:?}", path);
                path
            }
            None => {
                warn!("lvm binary not found in PATH - LVM operations will fail");
                PathBuf::new()
            }
        };
        Self::with_runner(binary_path, ProcessRunner)
    }

    /// Create a wrapper around an explicit `lvm` binary.
    pub fn with_binary(binary_path: impl Into<PathBuf>) -> Self {
        Self::with_runner(binary_path, ProcessRunner)
    }

    /// Find the lvm binary in PATH
    pub fn find_lvm_binary() -> Option<PathBuf> {
        which(LVM_BINARY).ok()
    }
}

impl Default for LvmCli<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> LvmCli<R> {
    pub fn with_runner(binary_path: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            binary_path: binary_path.into(),
            runner,
        }
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn run_with_output(&self, args: &[String]) -> std::result::Result<Vec<u8>, CommandFailure> {
        self.runner.run_with_output(&self.binary_path, args)
    }

    fn run_without_output(&self, args: &[String]) -> std::result::Result<(), CommandFailure> {
        self.runner.run_without_output(&self.binary_path, args)
    }
}

/// `subcommand [extra...] REPORT_FLAGS [filter]`
fn report_args(subcommand: &str, extra: &[&str], filter: Option<&str>) -> Vec<String> {
    std::iter::once(subcommand)
        .chain(extra.iter().copied())
        .chain(REPORT_FLAGS)
        .chain(filter)
        .map(str::to_string)
        .collect()
}

fn args<const N: usize>(parts: [&str; N]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

/// Treat `Some("")` the same as `None`.
fn non_empty(name: Option<&str>) -> Option<&str> {
    name.filter(|name| !name.is_empty())
}

fn execution_error(
    command: impl Into<String>,
    target: Option<&str>,
    failure: CommandFailure,
) -> SysError {
    SysError::Execution {
        command: command.into(),
        target: target.map(str::to_string),
        stderr: failure.stderr,
    }
}
