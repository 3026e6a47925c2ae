// src/input.rs
//! Loads adjacency-list text from a single file or a directory of part files.

use crate::error::{Result, SeqRankError};
use crate::graph::{BuildStats, DirectedGraph, GraphBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Lists the files that make up `path`: the file itself, or the regular files
/// directly inside a directory whose names start with `prefix`, in name order.
/// Symlinks are resolved, so a linked part file is read like a regular one.
///
/// # Errors
/// Returns error if `path` does not exist or the directory cannot be listed.
pub fn input_files(path: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(path).map_err(|e| SeqRankError::io(e, path))?;
    if !meta.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let walker = WalkDir::new(path)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with(prefix) {
            files.push(entry.into_path());
        } else {
            debug!(file = %entry.path().display(), "skipping non-part file");
        }
    }

    if files.is_empty() {
        warn!(dir = %path.display(), prefix, "no input files matched");
    }
    Ok(files)
}

/// Reads every input file in order and parses them as one concatenated stream.
///
/// # Errors
/// Returns error if any file is unreadable.
pub fn load_graph(path: &Path, prefix: &str) -> Result<(DirectedGraph, BuildStats)> {
    let mut builder = GraphBuilder::new();
    for file in input_files(path, prefix)? {
        let contents = fs::read_to_string(&file).map_err(|e| SeqRankError::io(e, &file))?;
        debug!(file = %file.display(), bytes = contents.len(), "read input file");
        builder.feed_str(&contents);
    }
    Ok(builder.finish())
}
