// SPDX-License-Identifier: GPL-3.0-only

//! Read-only listing of loop devices via `losetup --list --json`

use std::path::{Path, PathBuf};

use lvm_types::{LoopbackDevice, Report};
use tracing::{debug, info, warn};
use which::which;

use crate::error::{Result, SysError};
use crate::runner::{CommandRunner, ProcessRunner};

pub const LOSETUP_BINARY: &str = "losetup";

/// Columns requested from losetup, matching the fields of [`LoopbackDevice`].
const LIST_COLUMNS: &str = "NAME,SIZELIMIT,OFFSET,AUTOCLEAR,RO,BACK-FILE,DIO";

/// losetup CLI wrapper
#[derive(Debug, Clone)]
pub struct LoopbackCli<R = ProcessRunner> {
    binary_path: PathBuf,
    runner: R,
}

impl LoopbackCli<ProcessRunner> {
    pub fn new() -> Self {
        let binary_path = match which(LOSETUP_BINARY) {
            Ok(path) => {
                info!("Found losetup binary at {:?}", path);
                path
            }
            Err(_) => {
                warn!("losetup binary not found in PATH - loop device listing will fail");
                PathBuf::new()
            }
        };
        Self::with_runner(binary_path, ProcessRunner)
    }
}

impl Default for LoopbackCli<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> LoopbackCli<R> {
    pub fn with_runner(binary_path: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            binary_path: binary_path.into(),
            runner,
        }
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// List attached loop devices.
    pub fn list(&self) -> Result<Vec<LoopbackDevice>> {
        let args: Vec<String> = ["--list", "--json", "--output", LIST_COLUMNS]
            .iter()
            .map(|arg| arg.to_string())
            .collect();

        let stdout = self
            .runner
            .run_with_output(&self.binary_path, &args)
            .map_err(|failure| SysError::Execution {
                command: "losetup --list".to_string(),
                target: None,
                stderr: failure.stderr,
            })?;

        // losetup prints nothing at all when no device is attached.
        if stdout.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let report: Report =
            serde_json::from_slice(&stdout).map_err(|source| SysError::Decode {
                command: "losetup --list".to_string(),
                source,
            })?;
        debug!("Found {} loop devices", report.loopback.len());
        Ok(report.loopback)
    }

    /// Loop device backed by `file`, ignoring a " (deleted)" marker.
    pub fn find_by_backing_file(&self, file: &Path) -> Result<LoopbackDevice> {
        self.list()?
            .into_iter()
            .find(|device| Path::new(device.backing_file()) == file)
            .ok_or_else(|| SysError::not_found("backing file", file.display().to_string()))
    }
}
