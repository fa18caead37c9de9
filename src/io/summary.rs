use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::io::fmt_opt;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let dataset = ctx.dataset.as_ref().context("dataset not loaded")?;

    let mut out = String::new();
    out.push_str(&format!("trap-etl v{}\n", version));
    out.push_str(&format!(
        "Input: {} observations, {} skipped, columns={}\n",
        dataset.len(),
        ctx.input_meta.skipped_rows.unwrap_or(0),
        dataset.columns().names().join(",")
    ));

    if let Some(etl) = ctx.explicit_etl {
        out.push_str(&format!("Trap Count ETL: {:.2} (explicit)\n", etl));
    } else {
        out.push_str(&format!(
            "Thresholds: pest_etl={} damage_etl={}\n",
            fmt_opt(ctx.thresholds.pest_etl(), 2),
            fmt_opt(ctx.thresholds.damage_etl(), 2)
        ));
        match ctx.resolution.as_ref().and_then(|r| r.etl.zip(r.chosen)) {
            Some((etl, criterion)) => out.push_str(&format!(
                "Trap Count ETL: {:.2} (from {})\n",
                etl,
                criterion.as_str()
            )),
            None => out.push_str("Trap Count ETL: could not determine with given inputs\n"),
        }
    }

    match (&ctx.bands, &ctx.insufficient) {
        (Some(b), _) => out.push_str(&format!(
            "Bands: low<={:.2} medium<={:.2} high={:.2}\n",
            b.low_cutoff, b.medium_cutoff, b.high_cutoff
        )),
        (None, Some(_)) => out.push_str("Bands: insufficient data below ETL\n"),
        (None, None) => out.push_str("Bands: none\n"),
    }

    Ok(out)
}
