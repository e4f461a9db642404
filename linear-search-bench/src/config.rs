//! Sweep constants and the harness configuration.
//!
//! The defaults reproduce the fixed experiment: sizes 10,000 through 100,000 in steps of
//! 10,000, fifty independent runs per size, datasets under `dados/` and the aggregated results
//! under `resultados/estatisticas/`.

use std::path::PathBuf;

// CONSTANTS
// ================================================================================================

/// Root directory holding one `n<size>` subdirectory per dataset size.
pub const DATA_ROOT: &str = "dados";

/// Location of the aggregated results file.
pub const RESULTS_PATH: &str = "resultados/estatisticas/resultados_Rust.csv";

/// Header row of the results file.
pub const RESULTS_HEADER: &str = "n,tempo_ms,desvio";

/// Number of independent runs timed for every size.
pub const RUNS_PER_SIZE: u32 = 50;

/// Dataset sizes evaluated by the harness, in sweep order.
pub const DEFAULT_SIZES: &[usize] = &[
    10_000, 20_000, 30_000, 40_000, 50_000, 60_000, 70_000, 80_000, 90_000, 100_000,
];

/// Largest value written to a dataset (matches the classic `RAND_MAX` of `2^31 - 1`).
pub const MAX_ELEMENT: i64 = i32::MAX as i64;

/// Upper bound of the offset added to the maximum element when building a missing key.
pub const KEY_OFFSET_MAX: i64 = 1000;

// HARNESS CONFIG
// ================================================================================================

/// Settings for a single harness invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Root of the dataset tree written by the generator.
    pub(crate) data_dir: PathBuf,

    /// File receiving the `n,tempo_ms,desvio` rows. It is truncated when the sweep starts.
    pub(crate) results_path: PathBuf,

    /// Dataset sizes, evaluated in the given order.
    pub(crate) sizes: Vec<usize>,

    /// Runs timed per size; run ids go from 1 to this value inclusive.
    pub(crate) runs: u32,
}

impl HarnessConfig {
    /// Creates a config reading datasets from `data_dir` with the default sweep.
    ///
    /// # Default Settings
    /// * `results_path`: [`RESULTS_PATH`]
    /// * `sizes`: [`DEFAULT_SIZES`]
    /// * `runs`: [`RUNS_PER_SIZE`]
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            results_path: PathBuf::from(RESULTS_PATH),
            sizes: DEFAULT_SIZES.to_vec(),
            runs: RUNS_PER_SIZE,
        }
    }

    /// Sets the file receiving the aggregated rows.
    ///
    /// # Examples
    /// ```
    /// use linear_search_bench::HarnessConfig;
    ///
    /// let config = HarnessConfig::default().with_results_path("out/results.csv");
    /// assert_eq!(config.results_path().to_str(), Some("out/results.csv"));
    /// ```
    pub fn with_results_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.results_path = path.into();
        self
    }

    /// Sets the dataset sizes to sweep, in evaluation order.
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Sets the number of runs timed per size.
    ///
    /// # Examples
    /// ```
    /// use linear_search_bench::HarnessConfig;
    ///
    /// let config = HarnessConfig::new("dados").with_runs(5);
    /// assert_eq!(config.runs(), 5);
    /// ```
    pub fn with_runs(mut self, runs: u32) -> Self {
        self.runs = runs;
        self
    }

    /// Returns the root of the dataset tree.
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Returns the path of the results file.
    pub fn results_path(&self) -> &PathBuf {
        &self.results_path
    }

    /// Returns the sweep sizes.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the number of runs per size.
    pub fn runs(&self) -> u32 {
        self.runs
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(DATA_ROOT)
    }
}

// TESTS
// ================================================================================================
