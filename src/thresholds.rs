//! Trap count ETL resolution from pest-per-leaf and leaf-damage thresholds.
//!
//! Each supplied sub-threshold picks the trap count of the first row, in
//! source order, that meets or exceeds it. The resolved ETL is the lower of
//! those candidates. Rows are never re-sorted by trap count, so an unsorted
//! sheet can resolve to a trap count larger than the smallest qualifying one.

use tracing::debug;

use crate::dataset::{Dataset, Observation};

/// Sub-thresholds after the "zero or negative means not supplied" convention
/// has been applied. Fields are only reachable through constructors so core
/// logic never sees a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThresholdInputs {
    pest_etl: Option<f64>,
    damage_etl: Option<f64>,
}

impl ThresholdInputs {
    pub fn from_raw(pest_etl: Option<f64>, damage_etl: Option<f64>) -> Self {
        Self {
            pest_etl: provided(pest_etl),
            damage_etl: provided(damage_etl),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn pest_etl(&self) -> Option<f64> {
        self.pest_etl
    }

    pub fn damage_etl(&self) -> Option<f64> {
        self.damage_etl
    }

    pub fn is_empty(&self) -> bool {
        self.pest_etl.is_none() && self.damage_etl.is_none()
    }
}

fn provided(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    PestCount,
    DamagePercent,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::PestCount => "pest_count",
            Criterion::DamagePercent => "damage_percent",
        }
    }

    fn value(&self, obs: &Observation) -> Option<f64> {
        match self {
            Criterion::PestCount => obs.pest_count,
            Criterion::DamagePercent => obs.damage_percent,
        }
    }
}

/// One sub-threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub criterion: Criterion,
    /// Position of the crossing row in the dataset.
    pub index: usize,
    pub trap_count: f64,
    pub sub_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolution {
    pub candidates: Vec<Candidate>,
    pub etl: Option<f64>,
    pub chosen: Option<Criterion>,
}

/// Resolves the trap count ETL. Raw thresholds at or below zero count as
/// not supplied.
pub fn resolve(dataset: &Dataset, pest_etl: Option<f64>, damage_etl: Option<f64>) -> Option<f64> {
    resolve_detailed(dataset, &ThresholdInputs::from_raw(pest_etl, damage_etl)).etl
}

pub fn resolve_detailed(dataset: &Dataset, inputs: &ThresholdInputs) -> Resolution {
    let mut candidates = Vec::with_capacity(2);

    if let Some(threshold) = inputs.pest_etl() {
        if dataset.has_pest_count() {
            candidates.extend(first_crossing(dataset, Criterion::PestCount, threshold));
        }
    }
    if let Some(threshold) = inputs.damage_etl() {
        if dataset.has_damage_percent() {
            candidates.extend(first_crossing(dataset, Criterion::DamagePercent, threshold));
        }
    }

    // Ties keep the earlier criterion.
    let best = candidates.iter().fold(None::<&Candidate>, |best, c| match best {
        Some(b) if b.trap_count <= c.trap_count => Some(b),
        _ => Some(c),
    });
    let etl = best.map(|c| c.trap_count);
    let chosen = best.map(|c| c.criterion);

    Resolution {
        candidates,
        etl,
        chosen,
    }
}

fn first_crossing(dataset: &Dataset, criterion: Criterion, threshold: f64) -> Option<Candidate> {
    let found = dataset
        .observations()
        .iter()
        .enumerate()
        .find(|(_, obs)| criterion.value(obs).is_some_and(|v| v >= threshold))
        .map(|(index, obs)| Candidate {
            criterion,
            index,
            trap_count: obs.trap_count,
            sub_threshold: threshold,
        });
    debug!(
        criterion = criterion.as_str(),
        threshold,
        index = found.map(|c| c.index),
        "first crossing scanned"
    );
    found
}
