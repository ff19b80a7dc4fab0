// SPDX-License-Identifier: GPL-3.0-only

//! Physical volume rows from `lvm pvs` and `lvm fullreport`.

use serde::{Deserialize, Serialize};

/// Physical volume as reported by `lvm pvs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalVolume {
    /// Device path (e.g., "/dev/sdb1")
    #[serde(rename = "pv_name")]
    pub name: String,

    #[serde(rename = "pv_attr")]
    pub attributes: String,

    /// Metadata format, normally "lvm2"
    #[serde(rename = "pv_fmt")]
    pub format: String,

    /// Total size in bytes
    #[serde(rename = "pv_size", with = "crate::quoted")]
    pub size: i64,

    /// Free space in bytes
    #[serde(rename = "pv_free", with = "crate::quoted")]
    pub free: i64,

    /// Owning volume group; empty when the PV is not assigned
    pub vg_name: String,
}

impl PhysicalVolume {
    /// Check if this PV belongs to a VG
    pub fn is_assigned(&self) -> bool {
        !self.vg_name.is_empty()
    }

    /// Get used space in bytes
    pub fn used(&self) -> i64 {
        self.size.saturating_sub(self.free)
    }
}

/// Physical volume as reported by `lvm fullreport`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalVolumeFull {
    #[serde(rename = "pv_name")]
    pub name: String,
    #[serde(rename = "pv_attr")]
    pub attributes: String,
    #[serde(rename = "pv_fmt")]
    pub format: String,
    #[serde(rename = "pv_size", with = "crate::quoted")]
    pub size: i64,
    #[serde(rename = "pv_free", with = "crate::quoted")]
    pub free: i64,
    #[serde(rename = "pv_uuid")]
    pub uuid: String,
    #[serde(rename = "dev_size", with = "crate::quoted")]
    pub device_size: i64,
    #[serde(rename = "pv_major", with = "crate::quoted")]
    pub major: i64,
    #[serde(rename = "pv_minor", with = "crate::quoted")]
    pub minor: i64,
    #[serde(rename = "pv_mda_free", with = "crate::quoted")]
    pub mda_free: i64,
    #[serde(rename = "pv_mda_size", with = "crate::quoted")]
    pub mda_size: i64,
    #[serde(rename = "pv_ext_vsn", with = "crate::quoted")]
    pub ext_version: i64,
    /// Offset of the first physical extent
    #[serde(rename = "pe_start", with = "crate::quoted")]
    pub ext_start: i64,
    #[serde(rename = "pv_used", with = "crate::quoted")]
    pub used: i64,
    #[serde(rename = "pv_allocatable")]
    pub allocatable: String,
    #[serde(rename = "pv_exported")]
    pub exported: String,
    #[serde(rename = "pv_missing")]
    pub missing: String,
    #[serde(rename = "pv_pe_count", with = "crate::quoted")]
    pub ext_count: i64,
    #[serde(rename = "pv_pe_alloc_count", with = "crate::quoted")]
    pub ext_alloc_count: i64,
    #[serde(rename = "pv_tags")]
    pub tags: String,
    #[serde(rename = "pv_mda_count", with = "crate::quoted")]
    pub mda_count: i64,
    #[serde(rename = "pv_mda_used_count", with = "crate::quoted")]
    pub mda_used_count: i64,
    #[serde(rename = "pv_ba_start", with = "crate::quoted")]
    pub ba_start: i64,
    #[serde(rename = "pv_ba_size", with = "crate::quoted")]
    pub ba_size: i64,
    #[serde(rename = "pv_in_use")]
    pub in_use: String,
    #[serde(rename = "pv_duplicate")]
    pub duplicate: String,
}

impl PhysicalVolumeFull {
    /// The tool reports flag columns as the column name when set, "" otherwise.
    pub fn is_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}
