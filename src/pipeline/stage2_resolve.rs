use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::thresholds::resolve_detailed;

pub struct Stage2Resolve;

impl Stage2Resolve {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Resolve {
    fn name(&self) -> &'static str {
        "stage2_resolve"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.explicit_etl.is_some() {
            return Ok(());
        }
        let dataset = ctx.dataset.as_ref().context("dataset not loaded")?;
        let resolution = resolve_detailed(dataset, &ctx.thresholds);

        match (resolution.etl, resolution.chosen) {
            (Some(etl), Some(criterion)) => {
                info!(
                    trap_etl = etl,
                    criterion = criterion.as_str(),
                    candidates = resolution.candidates.len(),
                    "trap_etl_resolved"
                );
            }
            _ => {
                warn!(
                    no_thresholds = ctx.thresholds.is_empty(),
                    "trap ETL could not be determined"
                );
                ctx.warnings
                    .push("could not determine trap count ETL with given inputs".to_string());
            }
        }

        ctx.resolution = Some(resolution);
        Ok(())
    }
}
