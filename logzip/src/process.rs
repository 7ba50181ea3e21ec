//! High-level run orchestration: validation, traversal and per-file
//! processing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::io::{compressed_output_path, create_output, open_input};
use crate::operations::compress_file;
use crate::walk::collect_files;

/// Terminal outcome of a compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// At least one file was compressed
    Completed {
        /// Total number of compressed files across all roots
        compressed: u64,
    },
    /// Every configured root was scanned and no eligible file was found
    NoFilesFound,
}

/// Verifies that every configured root exists and is a directory.
///
/// The whole list is checked before any compression starts, so an invalid
/// path anywhere in the configuration aborts the run with no file touched,
/// including files in valid roots listed earlier.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] for the first offending path.
pub fn validate_paths(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        if !path.is_dir() {
            return Err(Error::PathNotFound { path: path.clone() });
        }
    }
    Ok(())
}

/// Compresses a single file to a sibling gzip artifact.
///
/// The source stays in place until its artifact is fully written; only then
/// is it removed, and only when the configuration asks for it. Both file
/// handles are scoped to this call and closed on every exit path.
///
/// # Errors
///
/// Returns an error if the source cannot be opened, the artifact cannot be
/// created or written, or the source cannot be removed afterwards.
pub fn process_file(path: &Path, config: &RunConfig) -> Result<()> {
    let input = open_input(path)?;
    let output_path = compressed_output_path(path);
    let output = create_output(&output_path)?;

    let bytes_read = compress_file(input, output, config.level, path)?;

    if config.verbose {
        eprintln!("Compressed {} ({bytes_read} bytes)", path.display());
    }

    if config.delete_originals {
        fs::remove_file(path).map_err(|source| Error::RemoveFile {
            path: path.to_path_buf(),
            source,
        })?;

        if config.verbose {
            eprintln!("Removed input file: {}", path.display());
        }
    }

    Ok(())
}

/// Runs a full compression pass over every configured root.
///
/// Validation is a separate up-front pass over the whole path list; traversal
/// and compression only start once every root checked out. Files are
/// processed strictly one at a time, in configuration order per root, with a
/// directory's own files handled before its subdirectories.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] if any configured root is missing or not
/// a directory. Any I/O failure mid-run propagates immediately and aborts
/// the remaining work; artifacts already written stay on disk.
pub fn compress_logs(config: &RunConfig) -> Result<RunOutcome> {
    validate_paths(&config.paths)?;

    let mut compressed: u64 = 0;
    for root in &config.paths {
        for file in collect_files(root, config.depth)? {
            process_file(&file, config)?;
            compressed += 1;
        }
    }

    if compressed == 0 {
        return Ok(RunOutcome::NoFilesFound);
    }

    Ok(RunOutcome::Completed { compressed })
}
