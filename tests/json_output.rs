use std::path::PathBuf;

use serde_json::Value;
use trap_etl::bands::partition;
use trap_etl::ctx::Ctx;
use trap_etl::dataset::{Columns, Dataset, Observation};
use trap_etl::io::json_writer::build_report;
use trap_etl::thresholds::{ThresholdInputs, resolve_detailed};

fn field_ctx(thresholds: ThresholdInputs) -> Ctx {
    let mut ctx = Ctx::new(
        PathBuf::from("traps.csv"),
        PathBuf::from("out"),
        thresholds,
        true,
        true,
        "0.0.0-test",
    );
    let obs = [(5.0, 1.0), (10.0, 3.0), (15.0, 6.0), (20.0, 9.0)]
        .iter()
        .map(|&(t, p)| Observation::new(t, Some(p), None))
        .collect();
    let ds = Dataset::new(
        obs,
        Columns {
            pest_count: true,
            damage_percent: false,
        },
    );
    ctx.input_meta.rows_read = Some(4);
    ctx.input_meta.observations = Some(4);
    ctx.input_meta.skipped_rows = Some(0);
    ctx.dataset = Some(ds);
    ctx
}

#[test]
fn json_report_populated() {
    let mut ctx = field_ctx(ThresholdInputs::from_raw(Some(5.0), None));
    let ds = ctx.dataset.clone().unwrap();
    ctx.resolution = Some(resolve_detailed(&ds, &ctx.thresholds));
    ctx.bands = Some(partition(&ds, 15.0).unwrap());

    let report = build_report(&ctx).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "trap-etl");
    assert_eq!(json["version"], "0.0.0-test");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["input_meta"]["observations"], 4);
    assert_eq!(json["input_meta"]["columns"]["pest_count"], true);
    assert_eq!(json["input_meta"]["columns"]["damage_percent"], false);
    assert_eq!(json["thresholds"]["pest_etl"], 5.0);
    assert_eq!(json["thresholds"]["damage_etl"], Value::Null);
    assert_eq!(json["resolution"]["trap_etl"], 15.0);
    assert_eq!(json["resolution"]["source"], "resolved");
    assert_eq!(json["resolution"]["chosen"], "pest_count");
    assert_eq!(json["resolution"]["candidates"][0]["index"], 2);
    assert_eq!(json["bands"]["high_cutoff"], 15.0);
    assert_eq!(json["bands"]["counts"]["exceeds_etl"], 2);
    assert_eq!(json["reference_lines"].as_array().unwrap().len(), 2);
}

#[test]
fn json_report_without_etl() {
    let mut ctx = field_ctx(ThresholdInputs::none());
    let ds = ctx.dataset.clone().unwrap();
    ctx.resolution = Some(resolve_detailed(&ds, &ctx.thresholds));
    ctx.warnings
        .push("could not determine trap count ETL with given inputs".to_string());

    let json = serde_json::to_value(build_report(&ctx).unwrap()).unwrap();
    assert_eq!(json["resolution"]["trap_etl"], Value::Null);
    assert_eq!(json["bands"], Value::Null);
    assert!(json["reference_lines"].as_array().unwrap().is_empty());
    assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
}

#[test]
fn json_report_explicit_etl() {
    let mut ctx = field_ctx(ThresholdInputs::none());
    ctx.explicit_etl = Some(12.0);
    let json = serde_json::to_value(build_report(&ctx).unwrap()).unwrap();
    assert_eq!(json["resolution"]["source"], "explicit");
    assert_eq!(json["resolution"]["trap_etl"], 12.0);
}

#[test]
fn json_report_requires_dataset() {
    let ctx = Ctx::new(
        PathBuf::from("traps.csv"),
        PathBuf::from("out"),
        ThresholdInputs::none(),
        false,
        false,
        "0.0.0-test",
    );
    assert!(build_report(&ctx).is_err());
}
