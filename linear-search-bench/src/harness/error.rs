use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{dataset::DatasetError, key::KeyError};

/// Errors that abort a harness sweep.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// An input dataset is missing or malformed.
    #[error("failed to load dataset")]
    Dataset(#[from] DatasetError),
    /// No search key could be built for a loaded dataset.
    #[error("failed to draw a search key for {}", path.display())]
    Key {
        path: PathBuf,
        #[source]
        source: KeyError,
    },
    /// The results file could not be created or written.
    #[error("failed to write results to {}", path.display())]
    Results {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A size produced no timing samples, which happens when the run count is zero.
    #[error("no timing samples collected for size {0}")]
    NoSamples(usize),
}
