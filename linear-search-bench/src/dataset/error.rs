use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while generating, writing or loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset size must be strictly positive.
    #[error("dataset size must be greater than 0, got {0}")]
    InvalidSize(usize),
    /// Run ids start at 1.
    #[error("run id must be greater than 0, got {0}")]
    InvalidRunId(u32),
    /// A dataset file or directory could not be created, opened or read.
    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A token of the dataset line is not an integer.
    #[error("invalid integer {token:?} at position {position} in {}", path.display())]
    InvalidToken {
        path: PathBuf,
        position: usize,
        token: String,
    },
    /// The dataset line holds fewer values than requested.
    #[error("expected {expected} values in {}, found {found}", path.display())]
    Truncated {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
