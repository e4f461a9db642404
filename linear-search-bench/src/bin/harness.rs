use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use linear_search_bench::{
    Harness, HarnessConfig, HarnessError,
    config::{DATA_ROOT, RESULTS_PATH, RUNS_PER_SIZE},
    harness::SizeReport,
    logging,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(
    name = "harness",
    about = "Times linear search over the generated datasets",
    version,
    rename_all = "kebab-case"
)]
pub struct HarnessCmd {
    /// Root directory of the dataset tree
    #[arg(short = 'd', long = "data-dir", default_value = DATA_ROOT)]
    data_dir: PathBuf,
    /// Output file for the aggregated statistics
    #[arg(short = 'o', long = "results", default_value = RESULTS_PATH)]
    results: PathBuf,
    /// Number of runs timed per size
    #[arg(short = 'r', long = "runs", default_value_t = RUNS_PER_SIZE)]
    runs: u32,
    /// Seed for search-key selection; drawn from OS entropy when omitted
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,
    /// Only report which datasets are present
    #[arg(long = "check-only", default_value = "false")]
    check_only: bool,
    /// Log filter directive
    #[arg(long = "log-level", default_value = "info", value_parser = logging::parse_log_level)]
    log_level: String,
}

fn main() -> ExitCode {
    let args = match HarnessCmd::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        },
    };
    logging::init_logging(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logging::report_error(&err);
            ExitCode::FAILURE
        },
    }
}

fn run(args: HarnessCmd) -> Result<(), HarnessError> {
    let config = HarnessConfig::new(args.data_dir)
        .with_results_path(args.results)
        .with_runs(args.runs);
    let harness = Harness::new(config);

    println!("Checking dataset availability:");
    for availability in harness.check_availability() {
        println!("  n={:>6}: {} files found", availability.n, availability.found);
        if !availability.is_complete() {
            warn!(
                n = availability.n,
                found = availability.found,
                expected = availability.expected,
                first_missing = ?availability.missing.first(),
                "missing datasets; run the generator first"
            );
        }
    }
    if args.check_only {
        return Ok(());
    }

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    println!("Running linear search experiments...");
    let reports = harness.run(&mut rng)?;

    println!("Results saved to {}", harness.config().results_path().display());
    print_summary(&reports);
    Ok(())
}

fn print_summary(reports: &[SizeReport]) {
    println!();
    println!("{:>12} | {:>18} | {:>20}", "n", "mean (ms)", "std dev (ms)");
    println!("{}", "-".repeat(56));
    for report in reports {
        println!(
            "{:>12} | {:>18.6} | {:>20.6}",
            report.n, report.summary.mean, report.summary.std_dev
        );
    }
}
