// Copyright 2019 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde_derive::*;

/// The swept input sizes: an arithmetic progression from `start` to the
/// exclusive `end` with a fixed `step`. Every loaded series is matched
/// against these points positionally, so its length must equal `len()`.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Sweep {
    #[serde(default = "default_start")]
    start: u64,
    #[serde(default = "default_end")]
    end: u64,
    #[serde(default = "default_step")]
    step: u64,
}

fn default_start() -> u64 {
    500
}

fn default_end() -> u64 {
    10_100
}

fn default_step() -> u64 {
    100
}

impl Default for Sweep {
    fn default() -> Sweep {
        Sweep {
            start: default_start(),
            end: default_end(),
            step: default_step(),
        }
    }
}

impl Sweep {
    pub fn new(start: u64, end: u64, step: u64) -> Sweep {
        Sweep { start, end, step }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    /// Number of points in the progression.
    pub fn len(&self) -> usize {
        if self.step == 0 || self.end <= self.start {
            0
        } else {
            ((self.end - self.start + self.step - 1) / self.step) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes the ordered sizes, ascending.
    pub fn points(&self) -> Vec<u64> {
        if self.step == 0 {
            return Vec::new();
        }
        (self.start..self.end).step_by(self.step as usize).collect()
    }
}
