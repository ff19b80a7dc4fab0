// SPDX-License-Identifier: GPL-3.0-only

//! Volume group rows from `lvm vgs` and `lvm fullreport`.

use serde::{Deserialize, Serialize};

/// Volume group as reported by `lvm vgs`.
///
/// `pv_count` and `lv_count` are the tool's own counters and are not checked
/// against the rows of the same report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeGroup {
    /// Volume group name
    #[serde(rename = "vg_name")]
    pub name: String,

    /// Number of physical volumes
    #[serde(with = "crate::quoted")]
    pub pv_count: i64,

    /// Number of logical volumes
    #[serde(with = "crate::quoted")]
    pub lv_count: i64,

    /// Number of snapshots
    #[serde(with = "crate::quoted")]
    pub snap_count: i64,

    #[serde(rename = "vg_attr")]
    pub attributes: String,

    /// Total size in bytes
    #[serde(rename = "vg_size", with = "crate::quoted")]
    pub size: i64,

    /// Free space in bytes
    #[serde(rename = "vg_free", with = "crate::quoted")]
    pub free: i64,
}

impl VolumeGroup {
    /// Get used space in bytes
    pub fn used(&self) -> i64 {
        self.size.saturating_sub(self.free)
    }

    /// Get usage percentage (0-100)
    pub fn usage_percent(&self) -> u32 {
        if self.size <= 0 {
            0
        } else {
            ((self.used() as f64 / self.size as f64) * 100.0) as u32
        }
    }
}

/// Volume group as reported by `lvm fullreport`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeGroupFull {
    #[serde(rename = "vg_name")]
    pub name: String,
    #[serde(with = "crate::quoted")]
    pub pv_count: i64,
    #[serde(with = "crate::quoted")]
    pub lv_count: i64,
    #[serde(with = "crate::quoted")]
    pub snap_count: i64,
    #[serde(rename = "vg_attr")]
    pub attributes: String,
    #[serde(rename = "vg_size", with = "crate::quoted")]
    pub size: i64,
    #[serde(rename = "vg_free", with = "crate::quoted")]
    pub free: i64,
    #[serde(rename = "vg_fmt")]
    pub format: String,
    #[serde(rename = "vg_uuid")]
    pub uuid: String,
    #[serde(rename = "vg_permissions")]
    pub permissions: String,
    #[serde(rename = "vg_extendable")]
    pub extendable: String,
    #[serde(rename = "vg_exported")]
    pub exported: String,
    #[serde(rename = "vg_partial")]
    pub partial: String,
    #[serde(rename = "vg_allocation_policy")]
    pub allocation_policy: String,
    #[serde(rename = "vg_clustered")]
    pub clustered: String,
    #[serde(rename = "vg_sysid")]
    pub sys_id: String,
    #[serde(rename = "vg_systemid")]
    pub system_id: String,
    #[serde(rename = "vg_lock_type", alias = "vg_locktype")]
    pub lock_type: String,
    #[serde(rename = "vg_lock_args", alias = "vg_lockargs")]
    pub lock_args: String,
    #[serde(rename = "vg_extent_size", with = "crate::quoted")]
    pub extent_size: i64,
    #[serde(rename = "vg_extent_count", with = "crate::quoted")]
    pub extent_count: i64,
    #[serde(rename = "vg_free_count", with = "crate::quoted")]
    pub free_count: i64,
    #[serde(with = "crate::quoted")]
    pub max_lv: i64,
    #[serde(with = "crate::quoted")]
    pub max_pv: i64,
    #[serde(rename = "vg_missing_pv_count", with = "crate::quoted")]
    pub missing_pv_count: i64,
    #[serde(rename = "vg_seqno", with = "crate::quoted")]
    pub sequence_number: i64,
    #[serde(rename = "vg_tags")]
    pub tags: String,
    #[serde(rename = "vg_profile")]
    pub profile: String,
    #[serde(rename = "vg_mda_count", with = "crate::quoted")]
    pub mda_count: i64,
    #[serde(rename = "vg_mda_used_count", with = "crate::quoted")]
    pub mda_used_count: i64,
    #[serde(rename = "vg_mda_free", with = "crate::quoted")]
    pub mda_free: i64,
    #[serde(rename = "vg_mda_size", with = "crate::quoted")]
    pub mda_size: i64,
    #[serde(rename = "vg_mda_copies")]
    pub mda_copies: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_vgs_row() {
        let vg: VolumeGroup = serde_json::from_str(
            r#"{"vg_name":"vg0","pv_count":"2","lv_count":"3","snap_count":"0",
                "vg_attr":"wz--n-","vg_size":"2000","vg_free":"500"}"#,
        )
        .expect("decode vg");

        assert_eq!(vg.name, "vg0");
        assert_eq!(vg.pv_count, 2);
        assert_eq!(vg.lv_count, 3);
        assert_eq!(vg.used(), 1500);
        assert_eq!(vg.usage_percent(), 75);
    }

    #[test]
    fn empty_group_reports_zero_usage() {
        let vg = VolumeGroup::default();
        assert_eq!(vg.usage_percent(), 0);
    }

    #[test]
    fn decodes_fullreport_extent_accounting() {
        let vg: VolumeGroupFull = serde_json::from_str(
            r#"{"vg_name":"vg0","vg_uuid":"Xy7","vg_permissions":"writeable",
                "vg_allocation_policy":"normal","vg_extent_size":"4194304",
                "vg_extent_count":"255","vg_free_count":"128","vg_seqno":"17",
                "vg_lock_type":"","max_lv":"0","max_pv":"0"}"#,
        )
        .expect("decode full vg");

        assert_eq!(vg.uuid, "Xy7");
        assert_eq!(vg.extent_size, 4_194_304);
        assert_eq!(vg.extent_count, 255);
        assert_eq!(vg.free_count, 128);
        assert_eq!(vg.sequence_number, 17);
        assert_eq!(vg.permissions, "writeable");
        assert!(vg.lock_type.is_empty());
    }

    #[test]
    fn decodes_lock_columns_under_current_and_legacy_names() {
        let vg: VolumeGroupFull = serde_json::from_str(
            r#"{"vg_name":"shared","vg_lock_type":"sanlock","vg_lock_args":"1.0.0:lvmlock"}"#,
        )
        .expect("decode full vg");
        assert_eq!(vg.lock_type, "sanlock");
        assert_eq!(vg.lock_args, "1.0.0:lvmlock");

        let legacy: VolumeGroupFull = serde_json::from_str(
            r#"{"vg_name":"shared","vg_locktype":"dlm","vg_lockargs":"1.0.0:cluster"}"#,
        )
        .expect("decode legacy full vg");
        assert_eq!(legacy.lock_type, "dlm");
        assert_eq!(legacy.lock_args, "1.0.0:cluster");
    }
}
