// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

/// Error types for LVM tool operations
#[derive(Error, Debug)]
pub enum SysError {
    /// The tool exited nonzero or could not be started; `stderr` is what it printed.
    #[error("error running \"{command}\"{}: {stderr}", for_target(.target))]
    Execution {
        command: String,
        target: Option<String>,
        stderr: String,
    },

    #[error("error decoding output from \"{command}\": {source}")]
    Decode {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {kind} named {name:?} found")]
    NotFound { kind: &'static str, name: String },

    #[error("found LV {name:?}, but no active path for it")]
    NoActivePath { name: String },
}

impl SysError {
    /// True for lookup misses in an otherwise successful report.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoActivePath { .. })
    }

    pub(crate) fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }
}

fn for_target(target: &Option<String>) -> String {
    match target {
        Some(target) => format!(" for {target:?}"),
        None => String::new(),
    }
}

/// Result type alias for LVM tool operations
pub type Result<T> = std::result::Result<T, SysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_message_names_command_and_target() {
        let err = SysError::Execution {
            command: "lvm pvcreate".to_string(),
            target: Some("/dev/sdz".to_string()),
            stderr: "no such device".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"error running "lvm pvcreate" for "/dev/sdz": no such device"#
        );
    }

    #[test]
    fn execution_message_without_target() {
        let err = SysError::Execution {
            command: "lvm vgs".to_string(),
            target: None,
            stderr: "locking failed".to_string(),
        };
        assert_eq!(err.to_string(), r#"error running "lvm vgs": locking failed"#);
        assert!(!err.is_not_found());
    }

    #[test]
    fn lookup_misses_are_not_found() {
        let err = SysError::not_found("LV", "vg0/layer.missing");
        assert_eq!(err.to_string(), r#"no LV named "vg0/layer.missing" found"#);
        assert!(err.is_not_found());
        assert!(SysError::NoActivePath {
            name: "vg0/x".to_string()
        }
        .is_not_found());
    }
}
