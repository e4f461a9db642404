//! The timing harness: sweeps dataset sizes, times one linear search per run and writes the
//! aggregated statistics.
//!
//! For every size the harness loads each pre-generated run, draws a search key, and measures
//! only the [`linear_search`] call. Loading and key selection stay outside the timed interval.
//! Once all runs of a size are done, its mean and standard deviation are appended to the
//! results file. The first error aborts the sweep.

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use rand::Rng;
use tracing::{debug, info};

use crate::{
    config::HarnessConfig,
    dataset::{self, Element},
    key::{KeyKind, generate_search_key},
    search::linear_search,
    stats::Summary,
};

mod error;
pub use error::HarnessError;

mod results;
pub use results::{ResultsWriter, format_row};

#[cfg(test)]
mod tests;

// REPORTS
// ================================================================================================

/// Outcome of all runs for one dataset size.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeReport {
    pub n: usize,
    pub summary: Summary,
    /// Runs whose key was drawn from the dataset.
    pub hits: u32,
    /// Runs whose key was above the dataset maximum.
    pub misses: u32,
}

/// Which of the expected dataset files of one size are on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Availability {
    pub n: usize,
    /// Run ids in `1..=expected` whose file exists.
    pub found: usize,
    pub expected: usize,
    /// Run ids in `1..=expected` whose file is absent, ascending.
    pub missing: Vec<u32>,
}

impl Availability {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

// HARNESS
// ================================================================================================

pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Checks, for every size of the sweep, which of the run files the harness will read exist.
    ///
    /// Files outside run ids `1..=runs` are not counted.
    pub fn check_availability(&self) -> Vec<Availability> {
        let runs = self.config.runs();
        let expected = runs as usize;
        self.config
            .sizes()
            .iter()
            .map(|&n| {
                let missing = dataset::missing_runs(self.config.data_dir(), n, runs);
                Availability { n, found: expected - missing.len(), expected, missing }
            })
            .collect()
    }

    /// Runs the full sweep, writing one results row per size.
    ///
    /// The results file is truncated before the first size is processed. On error the rows of
    /// completed sizes remain in the file.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<Vec<SizeReport>, HarnessError> {
        let mut results = ResultsWriter::create(self.config.results_path())?;
        info!(
            sizes = self.config.sizes().len(),
            runs = self.config.runs(),
            results = %results.path().display(),
            "starting linear search sweep"
        );

        let mut reports = Vec::with_capacity(self.config.sizes().len());
        for &n in self.config.sizes() {
            let report = self.run_size(n, rng)?;
            results.append(n, &report.summary)?;
            info!(
                n,
                mean_ms = report.summary.mean,
                std_dev_ms = report.summary.std_dev,
                hits = report.hits,
                misses = report.misses,
                "size completed"
            );
            reports.push(report);
        }

        Ok(reports)
    }

    /// Times every run of size `n` and summarizes the samples.
    pub fn run_size<R: Rng>(&self, n: usize, rng: &mut R) -> Result<SizeReport, HarnessError> {
        let mut samples = Vec::with_capacity(self.config.runs() as usize);
        let (mut hits, mut misses) = (0, 0);

        for run_id in 1..=self.config.runs() {
            let path = dataset::dataset_path(self.config.data_dir(), n, run_id);
            let data = dataset::load_dataset(&path, n)?;
            let key = generate_search_key(&data, rng)
                .map_err(|source| HarnessError::Key { path: path.clone(), source })?;

            let (elapsed, found) = time_search(&data, key.value);
            debug_assert_eq!(found.is_some(), key.kind == KeyKind::Present);
            let elapsed_ms = elapsed.as_secs_f64() * 1000_f64;
            samples.push(elapsed_ms);

            match key.kind {
                KeyKind::Present => hits += 1,
                KeyKind::Absent => misses += 1,
            }
            debug!(n, run_id, key = key.value, elapsed_ms, "run timed");
        }

        let summary = Summary::from_samples(&samples).ok_or(HarnessError::NoSamples(n))?;
        Ok(SizeReport { n, summary, hits, misses })
    }
}

/// Measures a single linear search of `key` in `data`, returning the elapsed time and the
/// search result.
///
/// Only the search call sits between the two clock reads.
pub fn time_search(data: &[Element], key: Element) -> (Duration, Option<usize>) {
    let now = Instant::now();
    let found = linear_search(black_box(data), black_box(key));
    let elapsed = now.elapsed();

    (elapsed, black_box(found))
}
