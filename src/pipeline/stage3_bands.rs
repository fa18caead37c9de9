use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::bands::partition_with;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage3Bands;

impl Stage3Bands {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Bands {
    fn name(&self) -> &'static str {
        "stage3_bands"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(etl) = ctx.trap_etl() else {
            return Ok(());
        };
        let dataset = ctx.dataset.as_ref().context("dataset not loaded")?;

        match partition_with(dataset, etl, &ctx.band_profile) {
            Ok(bands) => {
                info!(
                    low = bands.low_cutoff,
                    medium = bands.medium_cutoff,
                    high = bands.high_cutoff,
                    "bands_ready"
                );
                ctx.bands = Some(bands);
            }
            Err(err) => {
                warn!(etl, total = err.total, "insufficient data for bands");
                ctx.warnings.push(err.to_string());
                ctx.insufficient = Some(err);
            }
        }
        Ok(())
    }
}
