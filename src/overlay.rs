//! Reference lines a plotting consumer draws over the two scatter panels
//! (trap counts against pests per leaf, and against % leaf damage).
//!
//! A panel gets its lines only when both its sub-threshold and the trap ETL
//! are known.

use crate::thresholds::ThresholdInputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    PestsVsTrapCounts,
    DamageVsTrapCounts,
}

impl Panel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::PestsVsTrapCounts => "pests_vs_trap_counts",
            Panel::DamageVsTrapCounts => "damage_vs_trap_counts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub panel: Panel,
    pub orientation: Orientation,
    pub value: f64,
    pub label: &'static str,
}

pub fn reference_lines(inputs: &ThresholdInputs, trap_etl: Option<f64>) -> Vec<ReferenceLine> {
    let Some(trap_etl) = trap_etl else {
        return Vec::new();
    };
    let mut lines = Vec::with_capacity(4);
    let panels = [
        (Panel::PestsVsTrapCounts, inputs.pest_etl(), "Pest ETL"),
        (Panel::DamageVsTrapCounts, inputs.damage_etl(), "Damage ETL"),
    ];
    for (panel, sub_threshold, label) in panels {
        if let Some(value) = sub_threshold {
            lines.push(ReferenceLine {
                panel,
                orientation: Orientation::Horizontal,
                value,
                label,
            });
            lines.push(ReferenceLine {
                panel,
                orientation: Orientation::Vertical,
                value: trap_etl,
                label: "Trap ETL",
            });
        }
    }
    lines
}
