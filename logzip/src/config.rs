//! Configuration types and constants for log compression runs.

use std::path::PathBuf;

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// File extension for compressed files
pub const GZIP_EXTENSION: &str = "gz";

/// Default gzip compression level
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Directory scanned when no path is given on the command line
pub const DEFAULT_LOG_DIR: &str = "/var/log";

/// How deep traversal descends below each configured root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalDepth {
    /// Visit only the immediate contents of the root directory
    TopLevel,
    /// Visit every subdirectory at every depth
    Unbounded,
}

/// Configuration for a single compression run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root directories to scan for log files
    pub paths: Vec<PathBuf>,
    /// Compression level (1-9)
    pub level: u32,
    /// Remove original files after compression
    pub delete_originals: bool,
    /// Traversal depth below each root
    pub depth: TraversalDepth,
    /// Verbose output
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(DEFAULT_LOG_DIR)],
            level: DEFAULT_COMPRESSION_LEVEL,
            delete_originals: false,
            depth: TraversalDepth::TopLevel,
            verbose: false,
        }
    }
}
