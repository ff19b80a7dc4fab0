// SPDX-License-Identifier: GPL-3.0-only

//! Scripted runner for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::runner::{CommandFailure, CommandRunner};

type Reply = Result<Vec<u8>, CommandFailure>;

/// Replays queued replies in order and records every invocation.
///
/// Once the queue is empty each call succeeds with `{}`.
#[derive(Debug, Default)]
pub(crate) struct FakeRunner {
    replies: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ok(self, stdout: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(stdout.as_bytes().to_vec()));
        self
    }

    pub(crate) fn fail(self, stderr: &str) -> Self {
        self.fail_with_output("", stderr)
    }

    pub(crate) fn fail_with_output(self, stdout: &str, stderr: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(CommandFailure {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }));
        self
    }

    /// Argument lists of every call so far.
    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .map(|(_, args)| args.clone())
            .collect()
    }

    pub(crate) fn programs(&self) -> Vec<PathBuf> {
        self.calls
            .borrow()
            .iter()
            .map(|(program, _)| program.clone())
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run_with_output(&self, program: &Path, args: &[String]) -> Reply {
        self.calls
            .borrow_mut()
            .push((program.to_path_buf(), args.to_vec()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(b"{}".to_vec()))
    }
}
