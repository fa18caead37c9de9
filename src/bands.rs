use anyhow::{Result, bail};
use thiserror::Error;

use crate::dataset::Dataset;
use crate::math::stats::{percentile_sorted, sort_f64};

pub const LOW_PERCENTILE: f64 = 0.33;
pub const MEDIUM_PERCENTILE: f64 = 0.66;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandProfile {
    pub low_percentile: f64,
    pub medium_percentile: f64,
}

impl BandProfile {
    pub fn default_v1() -> Self {
        Self {
            low_percentile: LOW_PERCENTILE,
            medium_percentile: MEDIUM_PERCENTILE,
        }
    }

    pub fn new(low_percentile: f64, medium_percentile: f64) -> Result<Self> {
        if !(low_percentile > 0.0 && low_percentile < 1.0) {
            bail!("low percentile must be in (0, 1), got {}", low_percentile);
        }
        if !(medium_percentile > 0.0 && medium_percentile < 1.0) {
            bail!(
                "medium percentile must be in (0, 1), got {}",
                medium_percentile
            );
        }
        if low_percentile >= medium_percentile {
            bail!(
                "low percentile ({}) must be below medium percentile ({})",
                low_percentile,
                medium_percentile
            );
        }
        Ok(Self {
            low_percentile,
            medium_percentile,
        })
    }
}

impl Default for BandProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityBands {
    pub low_cutoff: f64,
    pub medium_cutoff: f64,
    /// Always the ETL the bands were computed against.
    pub high_cutoff: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl SeverityBands {
    pub fn classify(&self, trap_count: f64) -> Severity {
        if trap_count <= self.low_cutoff {
            Severity::Low
        } else if trap_count <= self.medium_cutoff {
            Severity::Medium
        } else {
            Severity::High
        }
    }

    pub fn exceeds_etl(&self, trap_count: f64) -> bool {
        trap_count >= self.high_cutoff
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BandCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub exceeds_etl: usize,
}

pub fn count_by_severity(dataset: &Dataset, bands: &SeverityBands) -> BandCounts {
    let mut counts = BandCounts::default();
    for v in dataset.trap_counts() {
        match bands.classify(v) {
            Severity::Low => counts.low += 1,
            Severity::Medium => counts.medium += 1,
            Severity::High => counts.high += 1,
        }
        if bands.exceeds_etl(v) {
            counts.exceeds_etl += 1;
        }
    }
    counts
}

/// No trap counts fall below the ETL, so the band cut points are undefined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("not enough values below ETL {etl:.2} to calculate thresholds")]
pub struct InsufficientData {
    pub etl: f64,
    pub total: usize,
}

pub fn partition(dataset: &Dataset, etl: f64) -> Result<SeverityBands, InsufficientData> {
    partition_with(dataset, etl, &BandProfile::default_v1())
}

/// A zero ETL disables the below-ETL filter and uses every trap count.
pub fn partition_with(
    dataset: &Dataset,
    etl: f64,
    profile: &BandProfile,
) -> Result<SeverityBands, InsufficientData> {
    let values = dataset.trap_counts();
    let total = values.len();
    let mut below: Vec<f64> = if etl != 0.0 {
        values.into_iter().filter(|v| *v < etl).collect()
    } else {
        values
    };
    if below.is_empty() {
        return Err(InsufficientData { etl, total });
    }
    sort_f64(&mut below);
    Ok(SeverityBands {
        low_cutoff: percentile_sorted(&below, profile.low_percentile),
        medium_cutoff: percentile_sorted(&below, profile.medium_percentile),
        high_cutoff: etl,
    })
}
