use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::io::fmt_opt;

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let dataset = ctx.dataset.as_ref().context("dataset not loaded")?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(
        w,
        "index\ttrap_count\tpest_count\tdamage_percent\tseverity\texceeds_etl"
    )?;
    let etl = ctx.trap_etl();
    for (i, obs) in dataset.observations().iter().enumerate() {
        let severity = ctx
            .bands
            .as_ref()
            .map(|b| b.classify(obs.trap_count).as_str())
            .unwrap_or("NA");
        let exceeds = match etl {
            Some(etl) => (obs.trap_count >= etl).to_string(),
            None => "NA".to_string(),
        };
        writeln!(
            w,
            "{}\t{:.6}\t{}\t{}\t{}\t{}",
            i,
            obs.trap_count,
            fmt_opt(obs.pest_count, 6),
            fmt_opt(obs.damage_percent, 6),
            severity,
            exceeds
        )?;
    }
    w.flush()?;

    Ok(())
}
