//! Directory traversal for locating compressible log files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::TraversalDepth;
use crate::error::{Error, Result};
use crate::io::has_compression_extension;

/// Collects every compressible file under `root`, honoring the traversal
/// depth.
///
/// Files already carrying the gzip extension are excluded. A directory's own
/// files come before the contents of its subdirectories. The listing is a
/// snapshot taken before any compression starts, so artifacts written during
/// a run are never revisited by the same run.
pub fn collect_files(root: &Path, depth: TraversalDepth) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    visit_dir(root, depth, &mut files)?;
    Ok(files)
}

fn visit_dir(dir: &Path, depth: TraversalDepth, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut subdirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let file_type = entry.file_type().map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if file_type.is_dir() {
            subdirs.push(path);
        } else if file_type.is_file() && !has_compression_extension(&path) {
            files.push(path);
        }
    }

    if depth == TraversalDepth::Unbounded {
        for subdir in subdirs {
            visit_dir(&subdir, depth, files)?;
        }
    }

    Ok(())
}
