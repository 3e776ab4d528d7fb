// Copyright 2019 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;

use thiserror::Error;

/// Failures are terminal for the run. The first error aborts before any
/// further chart is produced; charts already written stay on disk.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to read results file {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed value in {} on line {line}: {content:?}", path.display())]
    MalformedValue {
        path: PathBuf,
        line: usize,
        content: String,
    },
    #[error("odd number of result files: {file} has no comparison partner")]
    UnevenPair { file: String },
    #[error("{file} holds {actual} values but the sweep has {expected} points")]
    LengthMismatch {
        file: String,
        expected: usize,
        actual: usize,
    },
    #[error("chart rendering failed: {0}")]
    Render(String),
}
