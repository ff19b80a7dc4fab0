// SPDX-License-Identifier: GPL-3.0-only

//! Commands that change LVM state. Their output is never parsed.

use tracing::{debug, info};

use super::{args, execution_error, LvmCli};
use crate::error::{Result, SysError};
use crate::runner::CommandRunner;

const TRAILING_WHITESPACE: &[char] = &['\r', '\n', '\t', ' '];

impl<R: CommandRunner> LvmCli<R> {
    /// Format `device` as a physical volume.
    pub fn create_physical_volume(&self, device: &str) -> Result<()> {
        self.run_without_output(&args(["pvcreate", device]))
            .map_err(|failure| execution_error("lvm pvcreate", Some(device), failure))?;
        info!("Created physical volume {}", device);
        Ok(())
    }

    /// Tell LVM that `device` may have grown, so its VG accounts for the new size.
    pub fn resize_physical_volume(&self, device: &str) -> Result<()> {
        match self.run_with_output(&args(["pvresize", device])) {
            Ok(stdout) => {
                let output = String::from_utf8_lossy(&stdout);
                debug!(
                    "lvm pvresize {}: {:?}",
                    device,
                    output.trim_end_matches(TRAILING_WHITESPACE)
                );
                Ok(())
            }
            Err(failure) => {
                let output = failure.stdout.trim_end_matches(TRAILING_WHITESPACE);
                let stderr = if output.is_empty() {
                    failure.stderr.clone()
                } else {
                    format!("{} (output: {:?})", failure.stderr, output)
                };
                Err(SysError::Execution {
                    command: "lvm pvresize".to_string(),
                    target: Some(device.to_string()),
                    stderr,
                })
            }
        }
    }

    /// Create `group` spanning `devices`.
    pub fn create_volume_group<S: AsRef<str>>(&self, group: &str, devices: &[S]) -> Result<()> {
        let mut command = args(["vgcreate", group]);
        command.extend(devices.iter().map(|device| device.as_ref().to_string()));
        self.run_without_output(&command)
            .map_err(|failure| execution_error("lvm vgcreate", Some(group), failure))?;
        info!("Created volume group {} on {} device(s)", group, devices.len());
        Ok(())
    }

    /// Activate every logical volume in `group`, including ones flagged to skip activation.
    pub fn activate_volume_group(&self, group: &str) -> Result<()> {
        self.run_without_output(&args([
            "vgchange",
            "--activate",
            "y",
            "--ignoreactivationskip",
            group,
        ]))
        .map_err(|failure| execution_error("lvm vgchange --activate y", Some(group), failure))?;
        info!("Activated volume group {}", group);
        Ok(())
    }

    /// Deactivate every logical volume in `group`.
    pub fn deactivate_volume_group(&self, group: &str) -> Result<()> {
        self.run_without_output(&args(["vgchange", "--activate", "n", group]))
            .map_err(|failure| execution_error("lvm vgchange --activate n", Some(group), failure))?;
        info!("Deactivated volume group {}", group);
        Ok(())
    }

    pub fn activate_logical_volume(&self, group: &str, volume: &str) -> Result<()> {
        let target = format!("{group}/{volume}");
        self.run_without_output(&args([
            "lvchange",
            "--activate",
            "y",
            "--ignoreactivationskip",
            target.as_str(),
        ]))
        .map_err(|failure| {
            execution_error("lvm lvchange --activate y", Some(target.as_str()), failure)
        })?;
        info!("Activated logical volume {}", target);
        Ok(())
    }

    pub fn deactivate_logical_volume(&self, group: &str, volume: &str) -> Result<()> {
        let target = format!("{group}/{volume}");
        self.run_without_output(&args(["lvchange", "--activate", "n", target.as_str()]))
            .map_err(|failure| {
                execution_error("lvm lvchange --activate n", Some(target.as_str()), failure)
            })?;
        info!("Deactivated logical volume {}", target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeRunner;

    #[test]
    fn builds_mutation_arguments() {
        let cli = LvmCli::with_runner("lvm", FakeRunner::new());
        cli.create_physical_volume("/dev/loop0").unwrap();
        cli.create_volume_group("vg0", &["/dev/loop0", "/dev/loop1"])
            .unwrap();
        cli.activate_volume_group("vg0").unwrap();
        cli.deactivate_volume_group("vg0").unwrap();
        cli.activate_logical_volume("vg0", "layer.a").unwrap();
        cli.deactivate_logical_volume("vg0", "layer.a").unwrap();
        cli.resize_physical_volume("/dev/loop0").unwrap();

        assert_eq!(
            cli.runner().calls(),
            [
                vec!["pvcreate", "/dev/loop0"],
                vec!["vgcreate", "vg0", "/dev/loop0", "/dev/loop1"],
                vec!["vgchange", "--activate", "y", "--ignoreactivationskip", "vg0"],
                vec!["vgchange", "--activate", "n", "vg0"],
                vec!["lvchange", "--activate", "y", "--ignoreactivationskip", "vg0/layer.a"],
                vec!["lvchange", "--activate", "n", "vg0/layer.a"],
                vec!["pvresize", "/dev/loop0"],
            ]
        );
    }

    #[test]
    fn failure_names_operation_target_and_stderr() {
        let cli = LvmCli::with_runner("lvm", FakeRunner::new().fail("no such device"));
        let err = cli.create_physical_volume("/dev/sdz").unwrap_err();

        let message = err.to_string();
        assert!(message.contains("no such device"));
        assert!(message.contains("/dev/sdz"));
        assert!(message.contains("lvm pvcreate"));
    }

    #[test]
    fn logical_volume_failures_name_qualified_target() {
        let cli = LvmCli::with_runner("lvm", FakeRunner::new().fail("Failed to find"));
        let err = cli.deactivate_logical_volume("vg0", "layer.a").unwrap_err();

        match err {
            SysError::Execution {
                command,
                target,
                stderr,
            } => {
                assert_eq!(command, "lvm lvchange --activate n");
                assert_eq!(target.as_deref(), Some("vg0/layer.a"));
                assert_eq!(stderr, "Failed to find");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn every_mutation_reports_its_command_and_target() {
        type Mutation = fn(&LvmCli<FakeRunner>) -> Result<()>;
        let cases: [(Mutation, &str, &str); 6] = [
            (|cli| cli.create_physical_volume("/dev/loop0"), "lvm pvcreate", "/dev/loop0"),
            (|cli| cli.create_volume_group("vg0", &["/dev/loop0"]), "lvm vgcreate", "vg0"),
            (|cli| cli.activate_volume_group("vg0"), "lvm vgchange --activate y", "vg0"),
            (|cli| cli.deactivate_volume_group("vg0"), "lvm vgchange --activate n", "vg0"),
            (
                |cli| cli.activate_logical_volume("vg0", "layer.a"),
                "lvm lvchange --activate y",
                "vg0/layer.a",
            ),
            (
                |cli| cli.deactivate_logical_volume("vg0", "layer.a"),
                "lvm lvchange --activate n",
                "vg0/layer.a",
            ),
        ];

        for (mutation, expected_command, expected_target) in cases {
            let cli = LvmCli::with_runner("lvm", FakeRunner::new().fail("boom"));
            match mutation(&cli).unwrap_err() {
                SysError::Execution {
                    command,
                    target,
                    stderr,
                } => {
                    assert_eq!(command, expected_command);
                    assert_eq!(target.as_deref(), Some(expected_target));
                    assert_eq!(stderr, "boom");
                }
                other => panic!("unexpected error from {expected_command}: {other:?}"),
            }
            assert_eq!(cli.runner().calls().len(), 1);
        }
    }

    #[test]
    fn resize_failure_trims_captured_output() {
        let cli = LvmCli::with_runner(
            "lvm",
            FakeRunner::new().fail_with_output("resized\n", "device busy"),
        );
        let err = cli.resize_physical_volume("/dev/loop0").unwrap_err();

        let message = err.to_string();
        assert!(message.contains("\"resized\""));
        assert!(!message.contains("resized\\n"));
        assert!(message.contains("device busy"));
    }

    #[test]
    fn resize_failure_without_output_keeps_stderr() {
        let cli = LvmCli::with_runner(
            "lvm",
            FakeRunner::new().fail_with_output(" \r\n\t", "device busy"),
        );
        match cli.resize_physical_volume("/dev/loop0").unwrap_err() {
            SysError::Execution { stderr, .. } => assert_eq!(stderr, "device busy"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
