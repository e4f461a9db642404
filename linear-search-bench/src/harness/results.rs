use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use super::HarnessError;
use crate::{config::RESULTS_HEADER, dataset::create_dir_all, stats::Summary};

/// Append-only writer for the `n,tempo_ms,desvio` results file.
///
/// Every row is flushed as soon as it is written, so an aborted sweep leaves the rows of all
/// sizes completed so far on disk.
pub struct ResultsWriter {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl ResultsWriter {
    /// Creates (or truncates) the file at `path` and writes the header row.
    ///
    /// Missing parent directories are created with the same `0755` mode as dataset directories.
    pub fn create(path: &Path) -> Result<Self, HarnessError> {
        let fail = |source| HarnessError::Results { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent).map_err(fail)?;
        }
        let file = File::create(path).map_err(fail)?;

        let mut results = Self { path: path.to_path_buf(), writer: BufWriter::new(file) };
        results.write_line(RESULTS_HEADER)?;
        Ok(results)
    }

    /// Appends the row for size `n`.
    pub fn append(&mut self, n: usize, summary: &Summary) -> Result<(), HarnessError> {
        self.write_line(&format_row(n, summary))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&mut self, line: &str) -> Result<(), HarnessError> {
        writeln!(self.writer, "{line}")
            .and_then(|_| self.writer.flush())
            .map_err(|source| HarnessError::Results { path: self.path.clone(), source })
    }
}

/// Formats a results row with six decimal places for both statistics.
pub fn format_row(n: usize, summary: &Summary) -> String {
    format!("{n},{:.6},{:.6}", summary.mean, summary.std_dev)
}
