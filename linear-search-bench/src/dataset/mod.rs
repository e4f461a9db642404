//! Synthetic datasets: deterministic generation, on-disk layout and loading.
//!
//! A dataset of size `n` for run `run_id` lives at `<root>/n<6-digit n>/run_<3-digit id>.csv`
//! and holds a single line of comma-separated integers.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

mod error;
pub use error::DatasetError;

mod generate;
pub use generate::{generate_dataset, write_dataset};

mod load;
pub use load::load_dataset;


/// Element type of every dataset.
pub type Element = i64;

// PATHS
// ================================================================================================

/// Returns the directory holding every run of size `n`, e.g. `dados/n050000`.
pub fn size_dir(root: &Path, n: usize) -> PathBuf {
    root.join(format!("n{n:06}"))
}

/// Returns the file of run `run_id` for size `n`, e.g. `dados/n050000/run_023.csv`.
pub fn dataset_path(root: &Path, n: usize, run_id: u32) -> PathBuf {
    size_dir(root, n).join(format!("run_{run_id:03}.csv"))
}

/// Creates `dir` and any missing parents with mode `0755` (before the process umask).
#[cfg(unix)]
pub(crate) fn create_dir_all(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(0o755).create(dir)
}

#[cfg(not(unix))]
pub(crate) fn create_dir_all(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Returns the run ids in `1..=runs` whose dataset file for size `n` is not present.
pub fn missing_runs(root: &Path, n: usize, runs: u32) -> Vec<u32> {
    (1..=runs).filter(|&run_id| !dataset_path(root, n, run_id).is_file()).collect()
}
