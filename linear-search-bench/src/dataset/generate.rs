use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::{DatasetError, Element, create_dir_all, dataset_path, size_dir};
use crate::config::MAX_ELEMENT;

/// Generates the `n` values of run `run_id`.
///
/// The generator is seeded from `run_id` alone, so the same pair always produces the same
/// values, and runs sharing an id share a prefix regardless of `n`.
pub fn generate_dataset(n: usize, run_id: u32) -> Result<Vec<Element>, DatasetError> {
    validate(n, run_id)?;

    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(run_id));
    Ok((0..n).map(|_| rng.gen_range(0..=MAX_ELEMENT)).collect())
}

/// Generates run `run_id` of size `n` and writes it under `root`, returning the file path.
///
/// Arguments are validated before touching the filesystem. Parent directories are created as
/// needed and an existing file is overwritten.
pub fn write_dataset(root: &Path, n: usize, run_id: u32) -> Result<PathBuf, DatasetError> {
    let values = generate_dataset(n, run_id)?;

    let dir = size_dir(root, n);
    create_dir_all(&dir).map_err(|source| DatasetError::io(&dir, source))?;

    let path = dataset_path(root, n, run_id);
    let file = File::create(&path).map_err(|source| DatasetError::io(&path, source))?;
    let mut writer = BufWriter::new(file);
    write_values(&mut writer, &values)
        .and_then(|_| writer.flush())
        .map_err(|source| DatasetError::io(&path, source))?;

    debug!(path = %path.display(), n, run_id, "dataset written");
    Ok(path)
}

// HELPERS
// ================================================================================================

fn validate(n: usize, run_id: u32) -> Result<(), DatasetError> {
    if n == 0 {
        return Err(DatasetError::InvalidSize(n));
    }
    if run_id == 0 {
        return Err(DatasetError::InvalidRunId(run_id));
    }
    Ok(())
}

/// Writes the values as a single comma-separated line without a trailing separator or newline.
fn write_values<W: Write>(writer: &mut W, values: &[Element]) -> std::io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write!(writer, "{value}")?;
    }
    Ok(())
}
