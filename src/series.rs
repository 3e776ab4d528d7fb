// Copyright 2019 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::error::Error;

/// Filename to series, populated once up front and read-only thereafter.
pub type SeriesMap = HashMap<String, Series>;

/// One algorithm's measured durations (milliseconds) across the sweep, in
/// ascending input-size order. Immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    /// Reads a result file: one decimal number per line, in sweep order.
    /// Blank lines are skipped; any other unparseable line aborts the load
    /// with no partial series.
    pub fn load(path: &Path) -> Result<Series, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mut values = Vec::new();
        for (index, line) in content.lines().enumerate() {
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            let value = token.parse::<f64>().map_err(|_| Error::MalformedValue {
                path: path.to_path_buf(),
                line: index + 1,
                content: token.to_string(),
            })?;
            values.push(value);
        }
        Ok(Series { values })
    }

    pub fn from_values(values: Vec<f64>) -> Series {
        Series { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Loads every configured result file from `data` before any rendering
/// begins. The first failure aborts with no partial map.
pub fn load_all(files: &[String], data: &Path) -> Result<SeriesMap, Error> {
    let mut map = SeriesMap::with_capacity(files.len());
    for file in files {
        let series = Series::load(&data.join(file))?;
        debug!("loaded {} values from {}", series.len(), file);
        map.insert(file.clone(), series);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "random.txt", "1.5\n0.25\n3.0\n");
        let series = Series::load(&path).unwrap();
        assert_eq!(series.values(), &[1.5, 0.25, 3.0]);
    }

    #[test]
    fn load_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "random.txt", "  1.5 \n\t2.5\r\n");
        let series = Series::load(&path).unwrap();
        assert_eq!(series.values(), &[1.5, 2.5]);
    }

    #[test]
    fn load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "random.txt", "0.125\n7.0\n");
        let first = Series::load(&path).unwrap();
        let second = Series::load(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Series::load(&dir.path().join("absent.txt"));
        match result {
            Err(Error::MissingFile { path, .. }) => {
                assert!(path.ends_with("absent.txt"));
            }
            other => panic!("expected MissingFile, got: {:?}", other),
        }
    }

    #[test]
    fn malformed_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "random.txt", "1.0\nabc\n3.0\n");
        match Series::load(&path) {
            Err(Error::MalformedValue { line, content, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "abc");
            }
            other => panic!("expected MalformedValue, got: {:?}", other),
        }
    }

    #[test]
    fn load_all_keys_every_file() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.txt", "1.0\n");
        write_file(dir.path(), "b.txt", "2.0\n");
        let files = vec!["a.txt".to_string(), "b.txt".to_string()];
        let map = load_all(&files, dir.path()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a.txt"].values(), &[1.0]);
        assert_eq!(map["b.txt"].values(), &[2.0]);
    }

    #[test]
    fn load_all_aborts_on_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.txt", "1.0\n");
        let files = vec!["a.txt".to_string(), "missing.txt".to_string()];
        assert!(load_all(&files, dir.path()).is_err());
    }
}
