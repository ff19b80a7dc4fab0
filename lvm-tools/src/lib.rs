// SPDX-License-Identifier: GPL-3.0-only

//! Typed access to the LVM command-line tools
//!
//! This crate shells out to `lvm` (and `losetup`) and turns their JSON
//! reports into [`lvm_types`] structures:
//! - Reports: physical volumes, volume groups, logical volumes, full reports
//! - Lookups: layer volume paths, owning groups, thin pool identity
//! - Presence checks that rescan before answering
//! - Provisioning: create, resize, activate and deactivate
//!
//! Every operation runs the tool synchronously and waits for it to exit.
//! These operations require elevated privileges.

pub mod error;
#[cfg(feature = "loopback")]
pub mod loopback;
pub mod lvm;
pub mod runner;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Result, SysError};
#[cfg(feature = "loopback")]
pub use loopback::LoopbackCli;
pub use lvm::{volume_name_for_id, LvmCli};
pub use runner::{CommandFailure, CommandRunner, ProcessRunner};
