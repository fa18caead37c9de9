use std::fs;

use tempfile::TempDir;
use trap_etl::bands::partition;
use trap_etl::ctx::Ctx;
use trap_etl::dataset::{Columns, Dataset, Observation};
use trap_etl::io::tsv_writer::write_tsv;
use trap_etl::thresholds::ThresholdInputs;

#[test]
fn tsv_per_observation_format() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("trap_etl.tsv");

    let mut ctx = Ctx::new(
        std::path::PathBuf::from("traps.csv"),
        tmp.path().to_path_buf(),
        ThresholdInputs::none(),
        false,
        true,
        "0.0.0-test",
    );
    let ds = Dataset::new(
        vec![
            Observation::new(5.0, Some(1.0), None),
            Observation::new(10.0, None, Some(2.0)),
            Observation::new(15.0, Some(6.0), Some(3.0)),
        ],
        Columns::all(),
    );
    ctx.explicit_etl = Some(15.0);
    ctx.bands = Some(partition(&ds, 15.0).unwrap());
    ctx.dataset = Some(ds);

    write_tsv(&path, &ctx).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("index\ttrap_count\tpest_count"));
    assert_eq!(lines[1], "0\t5.000000\t1.000000\tNA\tlow\tfalse");
    assert!(lines[2].contains("\tNA\t2.000000\t"));
    assert!(lines[3].ends_with("\thigh\ttrue"));
}

#[test]
fn tsv_without_bands_marks_na() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("trap_etl.tsv");
    let mut ctx = Ctx::new(
        std::path::PathBuf::from("traps.csv"),
        tmp.path().to_path_buf(),
        ThresholdInputs::none(),
        false,
        true,
        "0.0.0-test",
    );
    ctx.dataset = Some(Dataset::new(
        vec![Observation::new(5.0, None, None)],
        Columns::default(),
    ));

    write_tsv(&path, &ctx).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.lines().nth(1).unwrap().ends_with("\tNA\tNA"));
}
