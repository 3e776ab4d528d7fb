// Copyright 2019 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use log::warn;

use crate::error::Error;

/// One input-distribution case: a baseline result file and the comparison
/// result file it is charted against. Built from the ordered file list,
/// where adjacent entries form a pair (even index baseline, odd index
/// comparison).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    name: String,
    baseline_file: String,
    comparison_file: String,
}

impl Scenario {
    /// Folds the ordered file list into scenario descriptors. Pairing is
    /// positional; the two files of a pair are not required to share a name
    /// prefix, but a mismatch in derived names is logged.
    pub fn pair(files: &[String]) -> Result<Vec<Scenario>, Error> {
        if files.len() % 2 != 0 {
            return Err(Error::UnevenPair {
                file: files.last().cloned().unwrap_or_default(),
            });
        }
        let mut scenarios = Vec::with_capacity(files.len() / 2);
        for pair in files.chunks_exact(2) {
            let name = scenario_name(&pair[0]);
            if scenario_name(&pair[1]) != name {
                warn!(
                    "paired files {} and {} derive different scenario names",
                    pair[0], pair[1]
                );
            }
            scenarios.push(Scenario {
                name,
                baseline_file: pair[0].clone(),
                comparison_file: pair[1].clone(),
            });
        }
        Ok(scenarios)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn baseline_file(&self) -> &str {
        &self.baseline_file
    }

    pub fn comparison_file(&self) -> &str {
        &self.comparison_file
    }
}

/// Scenario label for a result filename: the stem with any `_hybrid` role
/// suffix removed, eg `random_hybrid.txt` -> `random`.
pub fn scenario_name(file: &str) -> String {
    let stem = match file.rfind('.') {
        Some(index) => &file[..index],
        None => file,
    };
    stem.strip_suffix("_hybrid").unwrap_or(stem).to_string()
}
