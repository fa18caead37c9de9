use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::dataset::{
    Columns, DAMAGE_PERCENT_COLUMNS, Dataset, DatasetError, LoadOptions, LoadedDataset,
    Observation, PEST_COUNT_COLUMNS, RowWarning, TRAP_COUNT_COLUMNS, find_column, parse_cell,
};

pub fn load_dataset(path: &Path, options: &LoadOptions) -> Result<LoadedDataset> {
    let reader = super::open_maybe_gz(path)?;
    read_csv(reader, options).with_context(|| format!("failed to load {}", path.display()))
}

pub fn read_csv<R: Read>(reader: R, options: &LoadOptions) -> Result<LoadedDataset, DatasetError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let trap_idx = find_column(headers.iter(), TRAP_COUNT_COLUMNS);
    let pest_idx = find_column(headers.iter(), PEST_COUNT_COLUMNS);
    let damage_idx = find_column(headers.iter(), DAMAGE_PERCENT_COLUMNS);

    if options.strict_columns {
        let missing: Vec<String> = [
            (trap_idx, TRAP_COUNT_COLUMNS[0]),
            (pest_idx, PEST_COUNT_COLUMNS[0]),
            (damage_idx, DAMAGE_PERCENT_COLUMNS[0]),
        ]
        .into_iter()
        .filter(|(idx, _)| idx.is_none())
        .map(|(_, name)| name.to_string())
        .collect();
        if !missing.is_empty() {
            return Err(DatasetError::MissingStrictColumns { missing });
        }
    }
    let trap_idx = trap_idx.ok_or_else(DatasetError::missing_trap_count)?;

    let mut observations = Vec::new();
    let mut row_warnings = Vec::new();
    let mut rows_read = 0usize;
    let mut record = StringRecord::new();

    while rdr.read_record(&mut record)? {
        rows_read += 1;
        // Header is line 1.
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(rows_read + 1);

        let trap_count = match parse_cell(record.get(trap_idx)) {
            Ok(Some(v)) => v,
            Ok(None) => {
                row_warnings.push(RowWarning {
                    line,
                    message: "missing trap count; row skipped".to_string(),
                });
                continue;
            }
            Err(raw) => {
                row_warnings.push(RowWarning {
                    line,
                    message: format!("invalid trap count '{}'; row skipped", raw),
                });
                continue;
            }
        };
        let pest_count = optional_cell(&record, pest_idx, "pest count", line, &mut row_warnings);
        let damage_percent =
            optional_cell(&record, damage_idx, "damage percent", line, &mut row_warnings);

        observations.push(Observation::new(trap_count, pest_count, damage_percent));
    }

    let columns = Columns {
        pest_count: pest_idx.is_some(),
        damage_percent: damage_idx.is_some(),
    };

    Ok(LoadedDataset {
        dataset: Dataset::new(observations, columns),
        rows_read,
        row_warnings,
    })
}

fn optional_cell(
    record: &StringRecord,
    idx: Option<usize>,
    name: &str,
    line: usize,
    warnings: &mut Vec<RowWarning>,
) -> Option<f64> {
    let idx = idx?;
    match parse_cell(record.get(idx)) {
        Ok(v) => v,
        Err(raw) => {
            warnings.push(RowWarning {
                line,
                message: format!("invalid {} '{}'; treated as missing", name, raw),
            });
            None
        }
    }
}
