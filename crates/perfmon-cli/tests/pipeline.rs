use std::path::Path;

use perfmon_cli::pipeline::{RunConfig, run};
use perfmon_model::PerfmonError;

const SAMPLE: &str = "\
(PDH-CSV 4.0) (W. Europe Standard Time)(-60),\\\\Srv\\PhysicalDisk(0 C:)\\Disk Reads/sec,\\\\Srv\\PhysicalDisk(0 C:)\\Disk Writes/sec,\\\\Srv\\Memory\\Pages/sec
01/14/2019 00:00:00.123,12.5,3,100
01/14/2019 00:30:00.123, ,4,200
01/14/2019 02:00:00.123,7,5,300
";

fn base_config(dir: &Path) -> RunConfig {
    let input_csv = dir.join("collector.csv");
    std::fs::write(&input_csv, SAMPLE).expect("write sample");
    RunConfig {
        input_csv,
        output_csv: dir.join("collector_long.csv"),
        from: None,
        to: None,
        dateformat: "%Y-%m-%d %H:%M:%S".to_string(),
        require_all: vec!["physical".to_string()],
        require_any: vec![
            "Disk Reads/sec".to_string(),
            "Disk Writes/sec".to_string(),
        ],
    }
}

#[test]
fn full_run_reshapes_selected_disk_counters() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = base_config(dir.path());

    let report = run(&config).expect("run");
    assert_eq!(report.header_columns, 4);
    assert_eq!(report.selected_metrics, 2);
    assert_eq!(report.rows_read, 3);
    assert_eq!(report.rows_kept, 3);
    // rows x metric columns, the memory counter excluded.
    assert_eq!(report.records_written, 6);

    let contents = std::fs::read_to_string(&config.output_csv).expect("read output");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], ",timestamp,originalMetricName,value,volume,metric");
    assert_eq!(lines.len(), 7);
    assert!(lines[1].starts_with("0,2019-01-14 00:00:00.123,"));
    assert!(lines[1].ends_with(",12.5,C:,Disk Reads/sec"));
    // The placeholder sample becomes an empty value field.
    assert!(lines[3].contains(",,C:,Disk Reads/sec"));
    assert!(!contents.contains("Pages/sec"));
}

#[test]
fn range_bounds_filter_rows_before_reshaping() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = base_config(dir.path());
    config.from = Some("2019-01-14 00:00:00".to_string());
    config.to = Some("2019-01-14 01:00:00".to_string());

    let report = run(&config).expect("run");
    assert_eq!(report.rows_read, 3);
    assert_eq!(report.rows_kept, 2);
    assert_eq!(report.records_written, 4);
}

#[test]
fn single_bound_is_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = base_config(dir.path());
    config.to = Some("2019-01-14 01:00:00".to_string());

    let report = run(&config).expect("run");
    assert_eq!(report.rows_kept, 3);
}

#[test]
fn no_matching_columns_fails_fast_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = base_config(dir.path());
    config.require_any = vec!["no such counter".to_string()];

    let error = run(&config).unwrap_err();
    assert!(matches!(
        error.downcast_ref::<PerfmonError>(),
        Some(PerfmonError::EmptySelection)
    ));
    assert!(!config.output_csv.exists());
}

#[test]
fn empty_require_any_only_leaves_the_timestamp_axis() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = base_config(dir.path());
    config.require_any = Vec::new();

    let error = run(&config).unwrap_err();
    assert!(matches!(
        error.downcast_ref::<PerfmonError>(),
        Some(PerfmonError::EmptySelection)
    ));
}

#[test]
fn missing_input_is_distinguishable_for_exit_codes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = base_config(dir.path());
    config.input_csv = dir.path().join("absent.csv");

    let error = run(&config).unwrap_err();
    assert!(matches!(
        error.downcast_ref::<PerfmonError>(),
        Some(PerfmonError::InputNotFound(_))
    ));
}

#[test]
fn bad_value_cell_aborts_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = base_config(dir.path());
    std::fs::write(
        &config.input_csv,
        "\
(PDH-CSV 4.0),\\\\Srv\\PhysicalDisk(0 C:)\\Disk Reads/sec
01/14/2019 00:00:00.123,not-a-number
",
    )
    .expect("write sample");

    let error = run(&config).unwrap_err();
    assert!(matches!(
        error.downcast_ref::<PerfmonError>(),
        Some(PerfmonError::ValueParse { .. })
    ));
    assert!(!config.output_csv.exists());
}
