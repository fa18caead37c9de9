use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Columns {
    pub trap_count: bool,
    pub pest_count: bool,
    pub damage_percent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub source: String,
    pub rows_read: Option<u64>,
    pub observations: Option<u64>,
    pub skipped_rows: Option<u64>,
    pub columns: Columns,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    pub pest_etl: Option<f64>,
    pub damage_etl: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub criterion: String,
    pub index: u64,
    pub trap_count: f64,
    pub sub_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EtlSource {
    Resolved,
    Explicit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub trap_etl: Option<f64>,
    pub source: EtlSource,
    pub chosen: Option<String>,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandCounts {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
    pub exceeds_etl: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bands {
    pub low_cutoff: f64,
    pub medium_cutoff: f64,
    pub high_cutoff: f64,
    pub low_percentile: f64,
    pub medium_percentile: f64,
    pub counts: BandCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub panel: String,
    pub orientation: String,
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtlReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub thresholds: Thresholds,
    pub resolution: Resolution,
    pub bands: Option<Bands>,
    pub reference_lines: Vec<ReferenceLine>,
    pub warnings: Vec<String>,
}

impl EtlReportV1 {
    pub fn empty(tool_version: &str, source: &str) -> Self {
        Self {
            tool: "trap-etl".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                source: source.to_string(),
                rows_read: None,
                observations: None,
                skipped_rows: None,
                columns: Columns {
                    trap_count: false,
                    pest_count: false,
                    damage_percent: false,
                },
            },
            thresholds: Thresholds {
                pest_etl: None,
                damage_etl: None,
            },
            resolution: Resolution {
                trap_etl: None,
                source: EtlSource::Resolved,
                chosen: None,
                candidates: Vec::new(),
            },
            bands: None,
            reference_lines: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
