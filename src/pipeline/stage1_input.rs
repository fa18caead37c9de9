use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::io::csv_input;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let loaded = csv_input::load_dataset(&ctx.input, &ctx.load_options)?;
        let skipped = loaded.skipped_rows();

        if !loaded.row_warnings.is_empty() {
            warn!(
                rows = loaded.row_warnings.len(),
                skipped, "rows with unreadable cells"
            );
        }
        for rw in &loaded.row_warnings {
            ctx.warnings.push(format!("line {}: {}", rw.line, rw.message));
        }

        let columns = loaded.dataset.columns();
        if let Some(pest_etl) = ctx.thresholds.pest_etl() {
            if !columns.pest_count {
                ctx.warnings.push(format!(
                    "pest ETL {:.2} supplied but input has no pest count column",
                    pest_etl
                ));
            }
        }
        if let Some(damage_etl) = ctx.thresholds.damage_etl() {
            if !columns.damage_percent {
                ctx.warnings.push(format!(
                    "damage ETL {:.2} supplied but input has no damage percent column",
                    damage_etl
                ));
            }
        }

        ctx.input_meta.rows_read = Some(loaded.rows_read as u64);
        ctx.input_meta.observations = Some(loaded.dataset.len() as u64);
        ctx.input_meta.skipped_rows = Some(skipped as u64);

        info!(
            observations = loaded.dataset.len(),
            skipped,
            pest_count = columns.pest_count,
            damage_percent = columns.damage_percent,
            "dataset_loaded"
        );

        ctx.dataset = Some(loaded.dataset);
        Ok(())
    }
}
