use std::fs;

use assert_matches::assert_matches;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::TempDir;

use super::*;
use crate::dataset::{DatasetError, write_dataset};

fn setup(sizes: &[usize], runs: u32) -> (Harness, TempDir) {
    let temp_dir = tempfile::Builder::new()
        .prefix("test_harness_")
        .tempdir()
        .expect("failed to create temporary directory");

    let data_dir = temp_dir.path().join("dados");
    for &n in sizes {
        for run_id in 1..=runs {
            write_dataset(&data_dir, n, run_id).unwrap();
        }
    }

    let config = HarnessConfig::new(data_dir)
        .with_results_path(temp_dir.path().join("resultados/estatisticas/out.csv"))
        .with_sizes(sizes.to_vec())
        .with_runs(runs);
    (Harness::new(config), temp_dir)
}

#[test]
fn sweep_writes_header_and_one_row_per_size() {
    let (harness, _temp_dir) = setup(&[5, 10, 20], 4);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let reports = harness.run(&mut rng).unwrap();
    assert_eq!(reports.iter().map(|r| r.n).collect::<Vec<_>>(), vec![5, 10, 20]);
    for report in &reports {
        assert_eq!(report.summary.count, 4);
        assert_eq!(report.hits + report.misses, 4);
        assert!(report.summary.mean >= 0.0);
        assert!(report.summary.std_dev >= 0.0);
    }

    let contents = fs::read_to_string(harness.config().results_path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "n,tempo_ms,desvio");
    for (line, report) in lines[1..].iter().zip(&reports) {
        assert_eq!(*line, format_row(report.n, &report.summary));
    }
}

#[test]
fn rows_use_six_decimal_places() {
    let summary = Summary { count: 50, mean: 0.0123456789, std_dev: 1.5 };
    assert_eq!(format_row(10_000, &summary), "10000,0.012346,1.500000");
}

#[test]
fn missing_dataset_aborts_and_keeps_completed_rows() {
    let (harness, temp_dir) = setup(&[5, 10], 3);
    fs::remove_file(dataset::dataset_path(&temp_dir.path().join("dados"), 10, 2)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    assert_matches!(
        harness.run(&mut rng),
        Err(HarnessError::Dataset(DatasetError::Io { .. }))
    );

    let contents = fs::read_to_string(harness.config().results_path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("5,"));
}

#[test]
fn zero_runs_yield_no_samples() {
    let (harness, _temp_dir) = setup(&[5], 0);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    assert_matches!(harness.run_size(5, &mut rng), Err(HarnessError::NoSamples(5)));
}

#[test]
fn availability_counts_run_files() {
    let (harness, temp_dir) = setup(&[5, 10], 3);
    fs::remove_file(dataset::dataset_path(&temp_dir.path().join("dados"), 10, 3)).unwrap();

    let availability = harness.check_availability();
    assert_eq!(
        availability,
        vec![
            Availability { n: 5, found: 3, expected: 3, missing: vec![] },
            Availability { n: 10, found: 2, expected: 3, missing: vec![3] },
        ]
    );
    assert!(availability[0].is_complete());
    assert!(!availability[1].is_complete());
}

#[test]
fn availability_ignores_runs_beyond_the_configured_count() {
    let (harness, temp_dir) = setup(&[5], 0);
    let data_dir = temp_dir.path().join("dados");
    for run_id in 4..=6 {
        write_dataset(&data_dir, 5, run_id).unwrap();
    }
    let harness = Harness::new(harness.config().clone().with_runs(3));

    let availability = harness.check_availability();
    assert_eq!(availability[0].found, 0);
    assert_eq!(availability[0].missing, vec![1, 2, 3]);
    assert!(!availability[0].is_complete());
}

#[test]
fn unwritable_results_path_is_reported() {
    let (harness, temp_dir) = setup(&[5], 1);
    // a regular file where a directory is expected
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let config = harness.config().clone().with_results_path(blocker.join("out.csv"));

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_matches!(Harness::new(config).run(&mut rng), Err(HarnessError::Results { .. }));
}

#[test]
fn timed_search_reports_the_search_result() {
    let data = vec![4, 2, 7, 1, 9];

    let (_, found) = time_search(&data, 7);
    assert_eq!(found, Some(2));

    let (_, found) = time_search(&data, 100);
    assert_eq!(found, None);
}

#[cfg(unix)]
#[test]
fn results_directories_mode_is_at_most_0755() {
    use std::os::unix::fs::PermissionsExt;

    let (harness, temp_dir) = setup(&[5], 1);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    harness.run(&mut rng).unwrap();

    for dir in ["resultados", "resultados/estatisticas"] {
        let mode = fs::metadata(temp_dir.path().join(dir)).unwrap().permissions().mode();
        // the process umask may only clear bits, never add them
        assert_eq!(mode & 0o777 & !0o755, 0, "{dir}: {mode:o}");
        assert_eq!(mode & 0o700, 0o700, "{dir}: {mode:o}");
    }
}
