// SPDX-License-Identifier: GPL-3.0-only

//! Top-level report containers.
//!
//! Every reporting command prints `{"report": [ ... ]}` where each entry holds
//! `pv`, `vg` and `lv` arrays; a given command fills only some of them.
//! `lvm fullreport` emits one entry per volume group. `losetup --json` prints
//! `{"loopdevices": [ ... ]}` instead, which shares the summary container.

use serde::{Deserialize, Serialize};

use crate::{
    LogicalVolume, LogicalVolumeFull, LoopbackDevice, PhysicalVolume, PhysicalVolumeFull,
    VolumeGroup, VolumeGroupFull,
};

/// One entry of a `pvs`, `vgs` or `lvs` report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportEntry {
    #[serde(rename = "pv", skip_serializing_if = "Vec::is_empty")]
    pub pvs: Vec<PhysicalVolume>,
    #[serde(rename = "vg", skip_serializing_if = "Vec::is_empty")]
    pub vgs: Vec<VolumeGroup>,
    #[serde(rename = "lv", skip_serializing_if = "Vec::is_empty")]
    pub lvs: Vec<LogicalVolume>,
}

/// One volume group's entry of a `fullreport`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportEntryFull {
    #[serde(rename = "pv", skip_serializing_if = "Vec::is_empty")]
    pub pvs: Vec<PhysicalVolumeFull>,
    #[serde(rename = "vg", skip_serializing_if = "Vec::is_empty")]
    pub vgs: Vec<VolumeGroupFull>,
    #[serde(rename = "lv", skip_serializing_if = "Vec::is_empty")]
    pub lvs: Vec<LogicalVolumeFull>,
}

impl ReportEntryFull {
    pub fn has_volume_group(&self, name: &str) -> bool {
        self.vgs.iter().any(|vg| vg.name == name)
    }
}

/// Output of `lvm pvs`, `lvm vgs`, `lvm lvs` or `losetup --list --json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    #[serde(rename = "report", skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<ReportEntry>,
    #[serde(rename = "loopdevices", skip_serializing_if = "Vec::is_empty")]
    pub loopback: Vec<LoopbackDevice>,
}

impl Report {
    pub fn physical_volumes(&self) -> impl Iterator<Item = &PhysicalVolume> {
        self.reports.iter().flat_map(|entry| entry.pvs.iter())
    }

    pub fn volume_groups(&self) -> impl Iterator<Item = &VolumeGroup> {
        self.reports.iter().flat_map(|entry| entry.vgs.iter())
    }

    pub fn logical_volumes(&self) -> impl Iterator<Item = &LogicalVolume> {
        self.reports.iter().flat_map(|entry| entry.lvs.iter())
    }
}

/// Output of `lvm fullreport`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFull {
    #[serde(rename = "report", skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<ReportEntryFull>,
}

impl ReportFull {
    /// Entries describing `group`, or every entry when `group` is empty.
    pub fn entries_for_group<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = &'a ReportEntryFull> + 'a {
        self.reports
            .iter()
            .filter(move |entry| group.is_empty() || entry.has_volume_group(group))
    }
}
