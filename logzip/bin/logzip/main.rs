//! Gzip log compression utility
//!
//! Scans the configured directories and compresses every plain log file to a
//! parallel `.gz` artifact.

use std::process;

mod opts;

use clap::Parser;
use opts::LogzipOpts;

use logzip::{compress_logs, Error, RunOutcome};

const PROGRAM_NAME: &str = "logzip";

fn main() {
    let opts = LogzipOpts::parse();
    let config = opts.config();

    match compress_logs(&config) {
        Ok(RunOutcome::Completed { compressed }) => {
            println!("Compression was finished. Number of compressed files: {compressed}");
        }
        Ok(RunOutcome::NoFilesFound) => {
            println!("No logs found.");
            process::exit(1);
        }
        Err(Error::PathNotFound { path }) => {
            println!("Path not found. The path that caused this: '{}'", path.display());
            process::exit(2);
        }
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(1);
        }
    }
}
