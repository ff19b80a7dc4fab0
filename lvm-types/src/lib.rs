// SPDX-License-Identifier: GPL-3.0-only

//! Data model for LVM reports
//!
//! These types mirror the JSON printed by `lvm pvs|vgs|lvs|fullreport
//! --reportformat json --units b --nosuffix` and by `losetup --list --json`.
//! Every value is a snapshot of one command invocation.
//!
//! - **Summary rows**: `PhysicalVolume`, `VolumeGroup`, `LogicalVolume`,
//!   grouped into a `Report`
//! - **Detailed rows**: `PhysicalVolumeFull`, `VolumeGroupFull`,
//!   `LogicalVolumeFull`, grouped into a `ReportFull`
//! - **Loop devices**: `LoopbackDevice`, carried by `Report::loopback`
//! - **Pool identity**: `PoolHistory`, for callers that track thin-pool drift
//!
//! Numeric columns arrive as quoted strings; see [`quoted`].

pub mod group;
pub mod logical;
pub mod loopback;
pub mod physical;
pub mod pool;
pub mod quoted;
pub mod report;

pub use group::{VolumeGroup, VolumeGroupFull};
pub use logical::{LogicalVolume, LogicalVolumeFull};
pub use loopback::{DELETED_SUFFIX, LoopbackDevice};
pub use physical::{PhysicalVolume, PhysicalVolumeFull};
pub use pool::PoolHistory;
pub use report::{Report, ReportEntry, ReportEntryFull, ReportFull};
