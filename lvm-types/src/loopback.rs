// SPDX-License-Identifier: GPL-3.0-only

//! Loop device rows from `losetup --list --json`.

use serde::{Deserialize, Serialize};

/// Marker the kernel appends to a backing file that was unlinked while attached.
pub const DELETED_SUFFIX: &str = " (deleted)";

/// A configured loopback device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopbackDevice {
    /// Device path (e.g., "/dev/loop0")
    pub name: String,

    #[serde(rename = "sizelimit", with = "crate::quoted")]
    pub size_limit: i64,

    #[serde(with = "crate::quoted")]
    pub offset: i64,

    #[serde(with = "crate::quoted")]
    pub autoclear: i64,

    #[serde(rename = "ro", with = "crate::quoted")]
    pub read_only: i64,

    /// Backing file as printed by the kernel, possibly ending in " (deleted)"
    #[serde(rename = "back-file")]
    pub file: String,

    #[serde(with = "crate::quoted")]
    pub dio: i64,
}

impl LoopbackDevice {
    pub fn backing_file_deleted(&self) -> bool {
        self.file.ends_with(DELETED_SUFFIX)
    }

    /// Backing file path with the deletion marker removed.
    pub fn backing_file(&self) -> &str {
        self.file.strip_suffix(DELETED_SUFFIX).unwrap_or(&self.file)
    }
}
