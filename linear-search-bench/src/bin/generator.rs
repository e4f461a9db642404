use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use linear_search_bench::{config::DATA_ROOT, dataset::write_dataset, logging};

#[derive(Parser, Debug)]
#[command(
    name = "generator",
    about = "Writes a reproducible dataset of n random integers for one run",
    after_help = "Example: generator 50000 23",
    version,
    rename_all = "kebab-case"
)]
pub struct GeneratorCmd {
    /// Number of integers to generate
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    n: u32,
    /// Run identifier, also the seed of the random sequence
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    run_id: u32,
    /// Root directory of the dataset tree
    #[arg(short = 'd', long = "data-dir", default_value = DATA_ROOT)]
    data_dir: PathBuf,
    /// Log filter directive
    #[arg(long = "log-level", default_value = "warn", value_parser = logging::parse_log_level)]
    log_level: String,
}

fn main() -> ExitCode {
    let args = match GeneratorCmd::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version are reported through the same path
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        },
    };
    logging::init_logging(&args.log_level);

    match write_dataset(&args.data_dir, args.n as usize, args.run_id) {
        Ok(path) => {
            println!("Generated file: {}", path.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            logging::report_error(&err);
            ExitCode::FAILURE
        },
    }
}
