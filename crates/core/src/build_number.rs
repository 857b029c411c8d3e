// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build numbers.

use serde::{Deserialize, Serialize};

/// Number of one execution of a job. Unique within its job.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BuildNumber(pub u64);

impl BuildNumber {
    pub fn new(n: u64) -> Self {
        Self(n)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BuildNumber {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

/// Sort build numbers for display: numerically descending, newest first.
pub fn sort_newest_first(builds: &mut [BuildNumber]) {
    builds.sort_by(|a, b| b.cmp(a));
}

#[cfg(test)]
#[path = "build_number_tests.rs"]
mod tests;
