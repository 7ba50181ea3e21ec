//! Command line argument parsing for the logzip utility

use std::path::PathBuf;

use clap::Parser;

use logzip::{RunConfig, TraversalDepth, DEFAULT_COMPRESSION_LEVEL, DEFAULT_LOG_DIR};

/// Gzip log compression utility
///
/// Compresses every plain file found in the given directories to a parallel
/// `.gz` artifact. Files that already carry the gzip extension are skipped.
#[derive(Parser, Debug)]
#[command(
    name = "logzip",
    version,
    about = "Compress log files in the given directories"
)]
pub struct LogzipOpts {
    /// Compression level 1-9
    #[arg(
        short = 'c',
        long = "compress",
        value_name = "LEVEL",
        default_value_t = DEFAULT_COMPRESSION_LEVEL,
        value_parser = clap::value_parser!(u32).range(1..=9)
    )]
    pub compress: u32,

    /// Path(s) to the folder(s) with logs
    #[arg(
        short = 'p',
        long = "paths",
        value_name = "PATH",
        num_args = 1..,
        default_value = DEFAULT_LOG_DIR
    )]
    pub paths: Vec<PathBuf>,

    /// Delete log files after compression
    #[arg(short = 'd', long = "delete")]
    pub delete: bool,

    /// Search for logs in the given path(s) recursively
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl LogzipOpts {
    /// Builds the run configuration from the parsed arguments.
    pub fn config(self) -> RunConfig {
        let depth = if self.recursive {
            TraversalDepth::Unbounded
        } else {
            TraversalDepth::TopLevel
        };

        RunConfig {
            paths: self.paths,
            level: self.compress,
            delete_originals: self.delete,
            depth,
            verbose: self.verbose,
        }
    }
}
