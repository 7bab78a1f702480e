//! Blocking file I/O on the transient artifact.

use std::fs;
use std::path::Path;

use ipsift_common::error::{FileOp, PipelineError};

/// Destructively overwrites the artifact with `text`.
pub fn persist(path: &Path, text: &str) -> Result<(), PipelineError> {
    fs::write(path, text).map_err(|source| PipelineError::io(FileOp::Write, path, source))
}

/// Reads the whole artifact back into memory.
pub fn reload(path: &Path) -> Result<String, PipelineError> {
    fs::read_to_string(path).map_err(|source| PipelineError::io(FileOp::Read, path, source))
}

/// Deletes the artifact. Fails if it is already gone.
pub fn remove(path: &Path) -> Result<(), PipelineError> {
    fs::remove_file(path).map_err(|source| PipelineError::io(FileOp::Delete, path, source))
}
