//! Sample Table Writer Module
//! Writes (x, u) samples as tab-separated two-column data files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to create {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write one `x<TAB>u` row per sample, six decimal places.
///
/// The output is accepted verbatim by [`super::SampleTable::load`].
pub fn write_table(
    path: impl AsRef<Path>,
    rows: impl IntoIterator<Item = (f64, f64)>,
) -> Result<(), WriterError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| WriterError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);

    let write_err = |source| WriterError::Write {
        path: path.to_path_buf(),
        source,
    };
    for (x, u) in rows {
        writeln!(out, "{x:.6}\t{u:.6}").map_err(write_err)?;
    }
    out.flush().map_err(write_err)
}
