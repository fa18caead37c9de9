use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trap_etl::bands::BandProfile;
use trap_etl::cli::{BandPercentileArgs, Cli, Commands};
use trap_etl::ctx::Ctx;
use trap_etl::dataset::LoadOptions;
use trap_etl::io;
use trap_etl::pipeline::Pipeline;
use trap_etl::pipeline::stage0_scaffold::Stage0Scaffold;
use trap_etl::pipeline::stage1_input::Stage1Input;
use trap_etl::pipeline::stage2_resolve::Stage2Resolve;
use trap_etl::pipeline::stage3_bands::Stage3Bands;
use trap_etl::pipeline::stage4_output::Stage4Output;
use trap_etl::thresholds::ThresholdInputs;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let thresholds = ThresholdInputs::from_raw(args.pest_etl, args.damage_etl);
            let mut ctx = Ctx::new(
                args.input,
                args.out,
                thresholds,
                args.json,
                args.tsv,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.band_profile = band_profile(&args.bands)?;
            ctx.load_options = LoadOptions {
                strict_columns: args.strict_columns,
            };

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage2Resolve::new()),
                Box::new(Stage3Bands::new()),
                Box::new(Stage4Output::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx)?;
        }
        Commands::Bands(args) => {
            let mut ctx = Ctx::new(
                args.input,
                args.out,
                ThresholdInputs::none(),
                args.json,
                args.tsv,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.band_profile = band_profile(&args.bands)?;
            ctx.explicit_etl = Some(args.etl);

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage3Bands::new()),
                Box::new(Stage4Output::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let mut ctx = Ctx::new(
                args.input,
                std::path::PathBuf::from("."),
                ThresholdInputs::none(),
                false,
                false,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.load_options = LoadOptions {
                strict_columns: args.strict_columns,
            };

            let pipeline = Pipeline::new(vec![Box::new(Stage1Input::new())]);
            pipeline.run(&mut ctx)?;

            print_validate_summary(&ctx)?;
        }
    }

    Ok(())
}

fn band_profile(args: &BandPercentileArgs) -> Result<BandProfile> {
    BandProfile::new(args.low_pct, args.medium_pct).context("invalid band percentiles")
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) -> Result<()> {
    let dataset = ctx.dataset.as_ref().context("dataset not loaded")?;
    println!("trap-etl validate ok");
    println!("rows: {}", ctx.input_meta.rows_read.unwrap_or(0));
    println!("observations: {}", dataset.len());
    println!("columns: {}", dataset.columns().names().join(","));
    print_warnings(ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
