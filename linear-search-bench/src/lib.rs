//! Synthetic-dataset generator and timing harness for linear search.
//!
//! The `generator` binary writes reproducible datasets to disk; the `harness` binary loads
//! them, times one linear search per run and records per-size mean and standard deviation.

pub mod config;
pub mod dataset;
pub mod harness;
pub mod key;
#[cfg(feature = "executable")]
pub mod logging;
pub mod search;
pub mod stats;

// RE-EXPORTS
// ================================================================================================

pub use config::HarnessConfig;
pub use dataset::{DatasetError, Element};
pub use harness::{Harness, HarnessError};
pub use search::linear_search;
