// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Identity of a thin pool at the time it was read.
///
/// Callers persist this and compare it against a later reading; a changed
/// UUID means the pool was recreated and anything layered on the old one is
/// gone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolHistory {
    #[serde(rename = "vgname")]
    pub vg_name: String,
    #[serde(rename = "poolname")]
    pub pool_name: String,
    #[serde(rename = "uuid")]
    pub pool_uuid: String,
}
