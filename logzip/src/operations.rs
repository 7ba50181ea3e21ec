//! Gzip compression of a single input stream.

use std::io;
use std::io::Write as _;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{Error, Result};

/// Compresses `input` into `output` as a gzip stream.
///
/// Returns the number of uncompressed bytes consumed.
pub fn compress_file(
    mut input: impl io::Read,
    output: impl io::Write,
    level: u32,
    path: &Path,
) -> Result<u64> {
    let compression = Compression::new(level.clamp(1, 9));

    let mut encoder = GzEncoder::new(output, compression);
    let bytes_read = io::copy(&mut input, &mut encoder).map_err(|e| Error::Compression {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut output = encoder.finish().map_err(|e| Error::Compression {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    output.flush().map_err(|e| Error::Compression {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(bytes_read)
}
