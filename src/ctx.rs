use std::path::PathBuf;

use crate::bands::{BandProfile, InsufficientData, SeverityBands};
use crate::dataset::{Dataset, LoadOptions};
use crate::schema::v1::EtlReportV1;
use crate::thresholds::{Resolution, ThresholdInputs};

#[derive(Debug, Clone, Default)]
pub struct InputMeta {
    pub rows_read: Option<u64>,
    pub observations: Option<u64>,
    pub skipped_rows: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub thresholds: ThresholdInputs,
    pub band_profile: BandProfile,
    pub load_options: LoadOptions,
    /// Set by the `bands` command; skips resolution entirely.
    pub explicit_etl: Option<f64>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub dataset: Option<Dataset>,
    pub resolution: Option<Resolution>,
    pub bands: Option<SeverityBands>,
    pub insufficient: Option<InsufficientData>,
    pub warnings: Vec<String>,
    pub input_meta: InputMeta,
    pub output: OutputPaths,
    pub report: EtlReportV1,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        thresholds: ThresholdInputs,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("trap_etl.json");
        let tsv_path = out_dir.join("trap_etl.tsv");
        let report = EtlReportV1::empty(tool_version, &input.display().to_string());
        Self {
            input,
            thresholds,
            band_profile: BandProfile::default_v1(),
            load_options: LoadOptions::default(),
            explicit_etl: None,
            write_json,
            write_tsv,
            dataset: None,
            resolution: None,
            bands: None,
            insufficient: None,
            warnings: Vec::new(),
            input_meta: InputMeta::default(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
            report,
        }
    }

    /// The ETL the bands are computed against: the explicit one when given,
    /// otherwise the resolved one.
    pub fn trap_etl(&self) -> Option<f64> {
        self.explicit_etl
            .or_else(|| self.resolution.as_ref().and_then(|r| r.etl))
    }
}
