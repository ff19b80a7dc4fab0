// SPDX-License-Identifier: GPL-3.0-only

//! Logical volume rows from `lvm lvs` and `lvm fullreport`.
//!
//! Pool and origin volumes are referenced by name only. Percent columns are
//! kept as the tool prints them ("12.50", or "" when not applicable).

use serde::{Deserialize, Serialize};

/// Logical volume as reported by `lvm lvs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicalVolume {
    /// Logical volume name
    #[serde(rename = "lv_name")]
    pub name: String,

    /// Parent volume group name
    pub vg_name: String,

    #[serde(rename = "lv_attr")]
    pub attributes: String,

    /// Size in bytes
    #[serde(rename = "lv_size", with = "crate::quoted")]
    pub size: i64,

    /// Backing thin pool, if any
    #[serde(rename = "pool_lv")]
    pub pool: String,

    /// Snapshot origin, if any
    pub origin: String,

    pub data_percent: String,
    pub metadata_percent: String,
    pub move_pv: String,
    pub mirror_log: String,
    pub copy_percent: String,
    pub convert_lv: String,
}

impl LogicalVolume {
    /// Get a display name for this logical volume
    pub fn display_name(&self) -> String {
        if self.vg_name.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.vg_name, self.name)
        }
    }

    /// Thin pools carry volume type `t` in the first attribute column.
    pub fn is_thin_pool(&self) -> bool {
        self.attributes.starts_with('t')
    }
}

/// Logical volume as reported by `lvm fullreport`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicalVolumeFull {
    #[serde(rename = "lv_name")]
    pub name: String,
    #[serde(rename = "lv_attr")]
    pub attributes: String,
    #[serde(rename = "lv_size", with = "crate::quoted")]
    pub size: i64,
    #[serde(rename = "lv_uuid")]
    pub uuid: String,
    #[serde(rename = "lv_full_name")]
    pub full_name: String,

    /// Filesystem path (e.g., "/dev/vg0/lv0")
    #[serde(rename = "lv_path")]
    pub path: String,

    /// Device-mapper path (e.g., "/dev/mapper/vg0-lv0")
    #[serde(rename = "lv_dm_path")]
    pub dm_path: String,

    #[serde(rename = "lv_parent")]
    pub parent: String,
    #[serde(rename = "lv_layout")]
    pub layout: String,
    #[serde(rename = "lv_role")]
    pub role: String,
    #[serde(rename = "lv_initial_image_sync")]
    pub initial_image_sync: String,
    #[serde(rename = "lv_image_synced")]
    pub image_synced: String,
    #[serde(rename = "lv_merging")]
    pub merging: String,
    #[serde(rename = "lv_converting")]
    pub converting: String,
    #[serde(rename = "lv_allocation_policy")]
    pub allocation_policy: String,
    #[serde(rename = "lv_allocation_locked")]
    pub allocation_locked: String,
    #[serde(rename = "lv_fixed_minor")]
    pub fixed_minor: String,
    #[serde(rename = "lv_merge_failed")]
    pub merge_failed: String,
    #[serde(rename = "lv_snapshot_invalid")]
    pub snapshot_invalid: String,
    #[serde(rename = "lv_skip_activation")]
    pub skip_activation: String,
    #[serde(rename = "lv_when_full")]
    pub when_full: String,
    #[serde(rename = "lv_active")]
    pub active: String,
    #[serde(rename = "lv_active_locally")]
    pub active_locally: String,
    #[serde(rename = "lv_active_remotely")]
    pub active_remotely: String,
    #[serde(rename = "lv_active_exclusively")]
    pub active_exclusively: String,
    #[serde(rename = "lv_major", with = "crate::quoted")]
    pub major: i64,
    #[serde(rename = "lv_minor", with = "crate::quoted")]
    pub minor: i64,
    #[serde(rename = "lv_read_ahead")]
    pub read_ahead: String,
    #[serde(rename = "lv_metadata_size")]
    pub metadata_size: String,
    #[serde(rename = "seg_count", with = "crate::quoted")]
    pub segment_count: i64,
    pub origin: String,
    pub origin_uuid: String,
    pub origin_size: String,
    #[serde(rename = "lv_ancestors")]
    pub ancestors: String,
    #[serde(rename = "lv_full_ancestors")]
    pub full_ancestors: String,
    #[serde(rename = "lv_descendants")]
    pub descendants: String,
    #[serde(rename = "lv_full_descendants")]
    pub full_descendants: String,
    pub data_percent: String,
    pub snap_percent: String,
    pub metadata_percent: String,
    pub copy_percent: String,
    pub sync_percent: String,
    pub raid_mismatch_count: String,
    pub raid_sync_action: String,
    pub raid_write_behind: String,
    pub raid_min_recovery_rate: String,
    pub raid_max_recovery_rate: String,
    pub move_pv: String,
    pub move_pv_uuid: String,
    pub convert_lv: String,
    pub convert_lv_uuid: String,
    pub mirror_log: String,
    pub mirror_log_uuid: String,
    pub data_lv: String,
    pub data_lv_uuid: String,
    pub metadata_lv: String,
    pub metadata_lv_uuid: String,
    #[serde(rename = "pool_lv")]
    pub pool: String,
    #[serde(rename = "pool_lv_uuid")]
    pub pool_uuid: String,
    #[serde(rename = "lv_tags")]
    pub tags: String,
    #[serde(rename = "lv_profile")]
    pub profile: String,
    #[serde(rename = "lv_lock_args", alias = "lv_lockargs")]
    pub lock_args: String,
    #[serde(rename = "lv_time")]
    pub time: String,
    #[serde(rename = "lv_time_removed")]
    pub time_removed: String,
    #[serde(rename = "lv_host")]
    pub host: String,
    #[serde(rename = "lv_modules")]
    pub modules: String,
    #[serde(rename = "lv_historical")]
    pub historical: String,
    #[serde(rename = "lv_kernel_major", with = "crate::quoted")]
    pub kernel_major: i64,
    #[serde(rename = "lv_kernel_minor", with = "crate::quoted")]
    pub kernel_minor: i64,
    #[serde(rename = "lv_kernel_read_ahead", with = "crate::quoted")]
    pub kernel_read_ahead: i64,
    #[serde(rename = "lv_permissions")]
    pub permissions: String,
    #[serde(rename = "lv_suspended")]
    pub suspended: String,
    #[serde(rename = "lv_live_table")]
    pub live_table: String,
    #[serde(rename = "lv_inactive_table")]
    pub inactive_table: String,
    #[serde(rename = "lv_device_open")]
    pub device_open: String,
    pub cache_total_blocks: String,
    pub cache_used_blocks: String,
    pub cache_dirty_blocks: String,
    pub cache_read_hits: String,
    pub cache_read_misses: String,
    pub cache_write_hits: String,
    pub cache_write_misses: String,
    pub kernel_cache_settings: String,
    pub kernel_cache_policy: String,
    #[serde(rename = "lv_health_status")]
    pub health_status: String,
    pub kernel_discards: String,
    #[serde(rename = "lv_check_needed")]
    pub check_needed: String,
}

impl LogicalVolumeFull {
    pub fn is_thin_pool(&self) -> bool {
        self.attributes.starts_with('t')
    }

    /// `lv_active` reads "active" for an activated volume.
    pub fn is_active(&self) -> bool {
        self.active == "active"
    }
}
