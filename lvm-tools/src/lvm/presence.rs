// SPDX-License-Identifier: GPL-3.0-only

//! Presence checks that rescan before answering.
//!
//! These never return an error: a failed scan and a missing object both
//! read as "not present". The failure is only visible at debug level.

use tracing::debug;

use super::{args, report_args, LvmCli};
use crate::runner::CommandRunner;

impl<R: CommandRunner> LvmCli<R> {
    /// Check if `pv` carries a valid PV header.
    ///
    /// Rescans the device first, for the case where it was just attached.
    pub fn physical_volume_present(&self, pv: &str) -> bool {
        if let Err(failure) = self.run_with_output(&args(["pvscan", "--cache", pv])) {
            debug!("lvm pvscan failed for {:?}: {:?}", pv, failure.stderr);
            return false;
        }
        if let Err(failure) = self.run_with_output(&args(["pvck", pv])) {
            debug!("lvm pvck failed for {:?}: {:?}", pv, failure.stderr);
            return false;
        }
        true
    }

    /// Check if a volume group named `group` exists.
    pub fn volume_group_present(&self, group: &str) -> bool {
        if let Err(failure) = self.run_with_output(&args(["vgscan", "--cache"])) {
            debug!("lvm vgscan failed for {:?}: {:?}", group, failure.stderr);
            return false;
        }
        if let Err(failure) = self.run_with_output(&report_args("vgs", &[], Some(group))) {
            debug!("lvm vgs failed for {:?}: {:?}", group, failure.stderr);
            return false;
        }
        true
    }

    /// Check if `group/volume` exists.
    pub fn logical_volume_present(&self, group: &str, volume: &str) -> bool {
        let target = format!("{group}/{volume}");
        let scan = args(["lvscan", "--cache", target.as_str()]);
        if let Err(failure) = self.run_with_output(&scan) {
            debug!("lvm lvscan failed for {:?}: {:?}", target, failure.stderr);
            return false;
        }
        true
    }
}
