//! File I/O operations and path manipulation for log compression.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_BUFFER_SIZE, GZIP_EXTENSION};
use crate::error::{Error, Result};

/// Checks if a file path has a gzip extension.
pub fn has_compression_extension(path: &Path) -> bool {
    // Get the extension as a lowercase string, if present
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        let ext = ext.to_ascii_lowercase();
        ext == GZIP_EXTENSION
    } else {
        false
    }
}

/// Derives the artifact path for an input file.
///
/// The gzip extension is appended to the full file name, so `app.log`
/// becomes `app.log.gz` and the extensionless `syslog` becomes `syslog.gz`.
pub fn compressed_output_path(input: &Path) -> PathBuf {
    let mut output = input.as_os_str().to_os_string();
    output.push(".");
    output.push(GZIP_EXTENSION);
    PathBuf::from(output)
}

/// Opens a buffered reader over the given input file.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
}

/// Creates the output file and wraps it in a buffered writer.
///
/// An existing file at `path` is truncated and overwritten.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
}
