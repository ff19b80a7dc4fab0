// SPDX-License-Identifier: GPL-3.0-only

use lvm_types::{Report, ReportFull};
use serde::de::DeserializeOwned;

use super::{execution_error, non_empty, report_args, LvmCli};
use crate::error::{Result, SysError};
use crate::runner::CommandRunner;

impl<R: CommandRunner> LvmCli<R> {
    /// Physical volumes known to LVM, or only `pv`.
    pub fn physical_volumes(&self, pv: Option<&str>) -> Result<Report> {
        self.report("pvs", &[], non_empty(pv))
    }

    /// Volume groups known to LVM, or only `group`.
    pub fn volume_groups(&self, group: Option<&str>) -> Result<Report> {
        let group = non_empty(group);
        let extra: &[&str] = if group.is_none() { &["--all"] } else { &[] };
        self.report("vgs", extra, group)
    }

    /// Detailed report for every volume group, or only `group`.
    pub fn full_report(&self, group: Option<&str>) -> Result<ReportFull> {
        self.report("fullreport", &[], non_empty(group))
    }

    /// Logical volumes, narrowed to `group` or to `group/volume`.
    ///
    /// `volume` is ignored unless `group` is given.
    pub fn logical_volumes(&self, group: Option<&str>, volume: Option<&str>) -> Result<Report> {
        let filter = match (non_empty(group), non_empty(volume)) {
            (Some(group), Some(volume)) => Some(format!("{group}/{volume}")),
            (Some(group), None) => Some(group.to_string()),
            (None, _) => None,
        };
        self.report("lvs", &["--all"], filter.as_deref())
    }

    fn report<T: DeserializeOwned>(
        &self,
        subcommand: &str,
        extra: &[&str],
        filter: Option<&str>,
    ) -> Result<T> {
        let command = format!("lvm {subcommand}");
        let stdout = self
            .run_with_output(&report_args(subcommand, extra, filter))
            .map_err(|failure| execution_error(command.as_str(), filter, failure))?;

        serde_json::from_slice(&stdout).map_err(|source| SysError::Decode { command, source })
    }
}
