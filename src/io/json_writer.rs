use std::path::Path;

use anyhow::{Context, Result};

use crate::bands::count_by_severity;
use crate::ctx::Ctx;
use crate::overlay::reference_lines;
use crate::schema::v1::{
    BandCounts, Bands, Candidate, Columns, EtlReportV1, EtlSource, InputMeta, ReferenceLine,
    Resolution, Thresholds,
};

pub fn build_report(ctx: &Ctx) -> Result<EtlReportV1> {
    let dataset = ctx.dataset.as_ref().context("dataset not loaded")?;
    let columns = dataset.columns();

    let input_meta = InputMeta {
        source: ctx.input.display().to_string(),
        rows_read: ctx.input_meta.rows_read,
        observations: ctx.input_meta.observations,
        skipped_rows: ctx.input_meta.skipped_rows,
        columns: Columns {
            trap_count: true,
            pest_count: columns.pest_count,
            damage_percent: columns.damage_percent,
        },
    };

    let thresholds = Thresholds {
        pest_etl: ctx.thresholds.pest_etl(),
        damage_etl: ctx.thresholds.damage_etl(),
    };

    let resolution = match (&ctx.resolution, ctx.explicit_etl) {
        (_, Some(etl)) => Resolution {
            trap_etl: Some(etl),
            source: EtlSource::Explicit,
            chosen: None,
            candidates: Vec::new(),
        },
        (Some(r), None) => Resolution {
            trap_etl: r.etl,
            source: EtlSource::Resolved,
            chosen: r.chosen.map(|c| c.as_str().to_string()),
            candidates: r
                .candidates
                .iter()
                .map(|c| Candidate {
                    criterion: c.criterion.as_str().to_string(),
                    index: c.index as u64,
                    trap_count: c.trap_count,
                    sub_threshold: c.sub_threshold,
                })
                .collect(),
        },
        (None, None) => Resolution {
            trap_etl: None,
            source: EtlSource::Resolved,
            chosen: None,
            candidates: Vec::new(),
        },
    };

    let bands = ctx.bands.as_ref().map(|b| {
        let counts = count_by_severity(dataset, b);
        Bands {
            low_cutoff: b.low_cutoff,
            medium_cutoff: b.medium_cutoff,
            high_cutoff: b.high_cutoff,
            low_percentile: ctx.band_profile.low_percentile,
            medium_percentile: ctx.band_profile.medium_percentile,
            counts: BandCounts {
                low: counts.low as u64,
                medium: counts.medium as u64,
                high: counts.high as u64,
                exceeds_etl: counts.exceeds_etl as u64,
            },
        }
    });

    let reference_lines = reference_lines(&ctx.thresholds, ctx.trap_etl())
        .into_iter()
        .map(|l| ReferenceLine {
            panel: l.panel.as_str().to_string(),
            orientation: l.orientation.as_str().to_string(),
            value: l.value,
            label: l.label.to_string(),
        })
        .collect();

    Ok(EtlReportV1 {
        tool: "trap-etl".to_string(),
        version: ctx.report.version.clone(),
        schema_version: "v1".to_string(),
        input_meta,
        thresholds,
        resolution,
        bands,
        reference_lines,
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, report: &EtlReportV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
