// SPDX-License-Identifier: GPL-3.0-only

//! Lookups over decoded reports, and the queries built on them.

use std::fs;
use std::path::{Path, PathBuf};

use lvm_types::{LogicalVolume, PhysicalVolume, PoolHistory, Report, ReportEntryFull, ReportFull};

use super::{volume_name_for_id, LvmCli};
use crate::error::{Result, SysError};
use crate::runner::CommandRunner;

/// First `fullreport` entry that describes `group`.
pub fn find_volume_group<'a>(group: &str, report: &'a ReportFull) -> Result<&'a ReportEntryFull> {
    report
        .reports
        .iter()
        .find(|entry| entry.has_volume_group(group))
        .ok_or_else(|| SysError::not_found("VG", group))
}

pub fn find_physical_volume<'a>(pv: &str, report: &'a Report) -> Result<&'a PhysicalVolume> {
    report
        .physical_volumes()
        .find(|candidate| candidate.name == pv)
        .ok_or_else(|| SysError::not_found("PV", pv))
}

pub fn find_logical_volume<'a>(volume: &str, report: &'a Report) -> Result<&'a LogicalVolume> {
    report
        .logical_volumes()
        .find(|lv| lv.name == volume)
        .ok_or_else(|| SysError::not_found("LV", volume))
}

/// Device path of `lv_name` in `group` (any group when `group` is empty).
///
/// The device-mapper path wins over the `/dev/<vg>/<lv>` path when both
/// exist. A path that cannot be stat'ed counts as absent.
pub fn logical_volume_path(report: &ReportFull, group: &str, lv_name: &str) -> Result<PathBuf> {
    for entry in report.entries_for_group(group) {
        let Some(lv) = entry.lvs.iter().find(|lv| lv.name == lv_name) else {
            continue;
        };

        for candidate in [&lv.dm_path, &lv.path] {
            if !candidate.is_empty() && path_exists(Path::new(candidate)) {
                return Ok(PathBuf::from(candidate));
            }
        }

        return Err(SysError::NoActivePath {
            name: format!("{group}/{}", lv.name),
        });
    }

    Err(SysError::not_found("LV", format!("{group}/{lv_name}")))
}

/// Identity of the thin pool `pool` in `group` (any group when `group` is empty).
pub fn pool_history(report: &ReportFull, group: &str, pool: &str) -> Result<PoolHistory> {
    for entry in report.entries_for_group(group) {
        if let Some(lv) = entry.lvs.iter().find(|lv| lv.name == pool) {
            let vg_name = match entry.vgs.first() {
                Some(vg) if group.is_empty() => vg.name.clone(),
                _ => group.to_string(),
            };
            return Ok(PoolHistory {
                vg_name,
                pool_name: lv.name.clone(),
                pool_uuid: lv.uuid.clone(),
            });
        }
    }

    Err(SysError::not_found("thin pool", format!("{group}/{pool}")))
}

fn path_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

impl<R: CommandRunner> LvmCli<R> {
    /// Device path of the layer volume for `id`.
    ///
    /// Searches only `group` unless it is empty, in which case every group
    /// is searched.
    pub fn find_logical_volume_path(&self, group: &str, id: &str) -> Result<PathBuf> {
        let lv_name = volume_name_for_id(id);
        let report = self.full_report(Some(group))?;
        logical_volume_path(&report, group, &lv_name)
    }

    /// Name of the volume group that `pv` belongs to.
    pub fn find_volume_group_for_physical_volume(&self, pv: &str) -> Result<String> {
        let report = self.physical_volumes(Some(pv))?;
        find_physical_volume(pv, &report).map(|pv| pv.vg_name.clone())
    }

    pub fn find_logical_volume(&self, group: &str, volume: &str) -> Result<LogicalVolume> {
        let report = self.logical_volumes(Some(group), Some(volume))?;
        find_logical_volume(volume, &report).cloned()
    }

    /// Read the identity of the active thin pool.
    pub fn read_pool_info(&self, group: &str, pool: &str) -> Result<PoolHistory> {
        let report = self.full_report(Some(group))?;
        pool_history(&report, group, pool)
    }
}
