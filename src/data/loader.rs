//! Sample Table Loader Module
//! Reads whitespace-delimited two-column (x, u) data files.

use std::fs;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: expected 2 columns, found {found}")]
    ColumnCount {
        path: PathBuf,
        line: usize,
        found: usize,
    },
    #[error("{path}:{line}: invalid number {token:?}")]
    BadNumber {
        path: PathBuf,
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// An ordered table of (x, u) samples loaded from a data file.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    points: Vec<[f64; 2]>,
}

impl SampleTable {
    /// Parse a whitespace-delimited two-column file.
    ///
    /// Fields are separated by any run of spaces or tabs; blank lines are
    /// skipped and `#` starts a comment running to end of line. Every
    /// surviving row must hold exactly two floating point fields, otherwise
    /// the whole load fails with the offending line number.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut points = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            // Strip comments, then split on whitespace runs
            let line = raw.split('#').next().unwrap_or("");
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() != 2 {
                return Err(LoaderError::ColumnCount {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    found: fields.len(),
                });
            }

            let mut row = [0.0; 2];
            for (col, field) in fields.iter().enumerate() {
                row[col] = field.parse().map_err(|source| LoaderError::BadNumber {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    token: field.to_string(),
                    source,
                })?;
            }
            points.push(row);
        }

        Ok(Self { points })
    }

    /// Samples in file order.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Number of loaded rows.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn data_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_in_order() {
        let file = data_file("0.0 1.0\n1.0 2.0\n");
        let table = SampleTable::load(file.path()).unwrap();
        assert_eq!(table.points(), &[[0.0, 1.0], [1.0, 2.0]]);
    }

    #[test]
    fn row_count_matches_file() {
        let body: String = (0..100).map(|i| format!("{}.5 {}\n", i, i * 2)).collect();
        let file = data_file(&body);
        let table = SampleTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 100);
        assert_eq!(table.points()[37], [37.5, 74.0]);
    }

    #[test]
    fn load_is_idempotent() {
        let file = data_file("0.25\t1.5\n0.5\t1.8\n");
        let first = SampleTable::load(file.path()).unwrap();
        let second = SampleTable::load(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn accepts_mixed_whitespace_and_signs() {
        let file = data_file("  0.0\t \t-1.5e3\n\t2.5   +0.125\n");
        let table = SampleTable::load(file.path()).unwrap();
        assert_eq!(table.points(), &[[0.0, -1500.0], [2.5, 0.125]]);
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let file = data_file("# header comment\n\n0.0 1.0\n   \n1.0 2.0  # trailing note\n");
        let table = SampleTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn rejects_extra_column() {
        let file = data_file("0.0 1.0\n1.0 2.0 3.0\n");
        let err = SampleTable::load(file.path()).unwrap_err();
        match err {
            LoaderError::ColumnCount { line, found, .. } => {
                assert_eq!(line, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_missing_column() {
        let file = data_file("0.0\n");
        let err = SampleTable::load(file.path()).unwrap_err();
        assert!(matches!(err, LoaderError::ColumnCount { found: 1, .. }));
    }

    #[test]
    fn rejects_non_numeric_field() {
        let file = data_file("0.0 1.0\n1.0 fast\n");
        let err = SampleTable::load(file.path()).unwrap_err();
        match err {
            LoaderError::BadNumber { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "fast");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SampleTable::load("/no/such/dir/input.dat").unwrap_err();
        assert!(matches!(err, LoaderError::Read { .. }));
        assert!(err.to_string().contains("input.dat"));
    }

    #[test]
    fn empty_file_gives_empty_table() {
        let file = data_file("");
        let table = SampleTable::load(file.path()).unwrap();
        assert!(table.is_empty());
    }
}
