//! Field observations as loaded from a monitoring sheet.
//!
//! A dataset is immutable once built and keeps rows in source order.

use thiserror::Error;

/// Accepted header names per column. The first entry is the canonical name
/// used by the field sheets; the rest are aliases.
pub const TRAP_COUNT_COLUMNS: &[&str] = &["Trap_counts", "trap_count"];
pub const PEST_COUNT_COLUMNS: &[&str] = &["No_of_pests", "pest_count"];
pub const DAMAGE_PERCENT_COLUMNS: &[&str] = &["Percent_damage", "damage_percent"];

/// Cell values treated as missing (compared case-insensitively).
pub const MISSING_TOKENS: &[&str] = &["", "na", "nan", "null", "none"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub trap_count: f64,
    pub pest_count: Option<f64>,
    pub damage_percent: Option<f64>,
}

impl Observation {
    pub fn new(trap_count: f64, pest_count: Option<f64>, damage_percent: Option<f64>) -> Self {
        Self {
            trap_count,
            pest_count,
            damage_percent,
        }
    }
}

/// Which optional columns the source table carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Columns {
    pub pest_count: bool,
    pub damage_percent: bool,
}

impl Columns {
    pub fn all() -> Self {
        Self {
            pest_count: true,
            damage_percent: true,
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut out = vec!["trap_count"];
        if self.pest_count {
            out.push("pest_count");
        }
        if self.damage_percent {
            out.push("damage_percent");
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    observations: Vec<Observation>,
    columns: Columns,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>, columns: Columns) -> Self {
        Self {
            observations,
            columns,
        }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn has_pest_count(&self) -> bool {
        self.columns.pest_count
    }

    pub fn has_damage_percent(&self) -> bool {
        self.columns.damage_percent
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Finite trap counts in source order.
    pub fn trap_counts(&self) -> Vec<f64> {
        self.observations
            .iter()
            .map(|o| o.trap_count)
            .filter(|v| v.is_finite())
            .collect()
    }
}

/// A row that was skipped or partially read during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWarning {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub rows_read: usize,
    pub row_warnings: Vec<RowWarning>,
}

impl LoadedDataset {
    pub fn skipped_rows(&self) -> usize {
        self.rows_read.saturating_sub(self.dataset.len())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Require all three field sheet columns to be present.
    pub strict_columns: bool,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("missing required trap count column (expected one of: {})", .expected.join(", "))]
    MissingRequiredColumn { expected: Vec<String> },
    #[error("CSV must contain columns: {}", .missing.join(", "))]
    MissingStrictColumns { missing: Vec<String> },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl DatasetError {
    pub fn missing_trap_count() -> Self {
        Self::MissingRequiredColumn {
            expected: TRAP_COUNT_COLUMNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Index of the first header matching any of `names`, ignoring case and
/// surrounding whitespace.
pub fn find_column<'a, I>(headers: I, names: &[&str]) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    headers.into_iter().position(|h| {
        let h = h.trim();
        names.iter().any(|n| h.eq_ignore_ascii_case(n))
    })
}

/// Parses a numeric cell. `Ok(None)` for missing tokens, `Err` with the raw
/// text when the cell is neither missing nor a finite number.
pub fn parse_cell(raw: Option<&str>) -> Result<Option<f64>, String> {
    let s = raw.unwrap_or("").trim();
    if MISSING_TOKENS.iter().any(|t| s.eq_ignore_ascii_case(t)) {
        return Ok(None);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(s.to_string()),
    }
}
