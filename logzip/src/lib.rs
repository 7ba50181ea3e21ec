//! Gzip compression for directories of log files.
//!
//! Scans one or more root directories for plain (non-gzip) files and
//! compresses each one to a sibling `.gz` artifact, optionally removing the
//! original and optionally recursing into subdirectories. Processing is
//! sequential: one file is fully compressed and closed before the next is
//! considered.

mod config;
mod error;
mod io;
mod operations;
mod process;
mod walk;


pub use config::{
    RunConfig, TraversalDepth, DEFAULT_BUFFER_SIZE, DEFAULT_COMPRESSION_LEVEL, DEFAULT_LOG_DIR,
    GZIP_EXTENSION,
};
pub use error::{Error, Result};
pub use io::{compressed_output_path, create_output, has_compression_extension, open_input};
pub use operations::compress_file;
pub use process::{compress_logs, process_file, validate_paths, RunOutcome};
pub use walk::collect_files;
