// Copyright 2019 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Renders comparative charts for sort benchmark results. Each scenario is a
//! pair of result files, one per algorithm variant, holding one measured
//! duration per swept input size. One PNG is produced per scenario.

pub mod chart;
pub mod config;
pub mod error;
pub mod logger;
pub mod scenario;
pub mod series;
pub mod sweep;

pub use crate::error::Error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
