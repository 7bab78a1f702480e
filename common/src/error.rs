use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// File operation that failed on the transient artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Write,
    Read,
    Delete,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileOp::Write => "write",
            FileOp::Read => "read",
            FileOp::Delete => "delete",
        })
    }
}

/// Fatal pipeline failures.
///
/// Every variant aborts the run at the stage that produced it; there is no
/// retry and no partial recovery. A failure before the cleanup stage leaves
/// the artifact on disk.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The document could not be rendered to text or parsed back.
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A write, read or delete on the transient artifact failed.
    #[error("{op} failed on {}: {source}", .path.display())]
    Io {
        op: FileOp,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output stream rejected a write.
    #[error("output write failed: {0}")]
    Output(#[source] std::io::Error),
}

impl PipelineError {
    pub fn io(op: FileOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}
