use std::fs;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;
use trap_etl::dataset::{DatasetError, LoadOptions};
use trap_etl::io::csv_input::{load_dataset, read_csv};

#[test]
fn reads_field_sheet_headers() {
    let csv = "No_of_pests,Trap_counts,Percent_damage\n1,5,2.5\n3,10,4\n";
    let loaded = read_csv(csv.as_bytes(), &LoadOptions::default()).unwrap();
    let ds = &loaded.dataset;
    assert_eq!(ds.len(), 2);
    assert!(ds.has_pest_count());
    assert!(ds.has_damage_percent());
    assert_eq!(ds.observations()[1].trap_count, 10.0);
    assert_eq!(ds.observations()[1].pest_count, Some(3.0));
    assert_eq!(ds.observations()[0].damage_percent, Some(2.5));
    assert!(loaded.row_warnings.is_empty());
}

#[test]
fn accepts_aliases_case_insensitive() {
    let csv = " TRAP_COUNT , pest_count\n4,1\n";
    let loaded = read_csv(csv.as_bytes(), &LoadOptions::default()).unwrap();
    assert_eq!(loaded.dataset.observations()[0].trap_count, 4.0);
    assert!(loaded.dataset.has_pest_count());
    assert!(!loaded.dataset.has_damage_percent());
}

#[test]
fn missing_trap_column_is_an_error() {
    let csv = "No_of_pests,Percent_damage\n1,2\n";
    let err = read_csv(csv.as_bytes(), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, DatasetError::MissingRequiredColumn { .. }));
    assert!(err.to_string().contains("Trap_counts"));
}

#[test]
fn strict_columns_lists_missing() {
    let csv = "Trap_counts\n1\n";
    let opts = LoadOptions {
        strict_columns: true,
    };
    let err = read_csv(csv.as_bytes(), &opts).unwrap_err();
    match err {
        DatasetError::MissingStrictColumns { missing } => {
            assert_eq!(missing, vec!["No_of_pests", "Percent_damage"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_and_invalid_cells() {
    let csv = "Trap_counts,No_of_pests,Percent_damage\n\
               5,NA,1\n\
               ,2,2\n\
               abc,3,3\n\
               8,x,\n";
    let loaded = read_csv(csv.as_bytes(), &LoadOptions::default()).unwrap();
    assert_eq!(loaded.rows_read, 4);
    assert_eq!(loaded.dataset.len(), 2);
    assert_eq!(loaded.skipped_rows(), 2);

    let obs = loaded.dataset.observations();
    assert_eq!(obs[0].pest_count, None);
    assert_eq!(obs[1].trap_count, 8.0);
    assert_eq!(obs[1].pest_count, None);
    assert_eq!(obs[1].damage_percent, None);

    assert_eq!(loaded.row_warnings.len(), 3);
    assert_eq!(loaded.row_warnings[0].line, 3);
    assert!(loaded.row_warnings[1].message.contains("'abc'"));
    assert!(loaded.row_warnings[2].message.contains("pest count"));
}

#[test]
fn short_rows_are_missing_values() {
    let csv = "Trap_counts,No_of_pests\n5\n";
    let loaded = read_csv(csv.as_bytes(), &LoadOptions::default()).unwrap();
    assert_eq!(loaded.dataset.observations()[0].pest_count, None);
}

#[test]
fn loads_gzip_input() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("traps.csv.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(b"Trap_counts,No_of_pests\n5,1\n10,3\n").unwrap();
    fs::write(&path, enc.finish().unwrap()).unwrap();

    let loaded = load_dataset(&path, &LoadOptions::default()).unwrap();
    assert_eq!(loaded.dataset.len(), 2);
}

#[test]
fn missing_file_has_context() {
    let tmp = TempDir::new().unwrap();
    let err = load_dataset(&tmp.path().join("nope.csv"), &LoadOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("nope.csv"));
}
