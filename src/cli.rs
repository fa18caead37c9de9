use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::bands::{LOW_PERCENTILE, MEDIUM_PERCENTILE};

#[derive(Debug, Parser)]
#[command(
    name = "trap-etl",
    version,
    about = "Trap count economic threshold level (ETL) calculator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the trap count ETL and its severity bands
    Run(RunArgs),
    /// Compute severity bands against a known trap count ETL
    Bands(BandsArgs),
    /// Load and check a monitoring CSV without computing anything
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Monitoring CSV (optionally .gz)")]
    pub input: PathBuf,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(
        long,
        env = "TRAP_ETL_PEST_ETL",
        allow_negative_numbers = true,
        help = "Pest count per leaf ETL (<= 0 means not supplied)"
    )]
    pub pest_etl: Option<f64>,

    #[arg(
        long,
        env = "TRAP_ETL_DAMAGE_ETL",
        allow_negative_numbers = true,
        help = "% leaf damage ETL (<= 0 means not supplied)"
    )]
    pub damage_etl: Option<f64>,

    #[arg(
        long,
        default_value_t = false,
        help = "Require Trap_counts, No_of_pests and Percent_damage columns"
    )]
    pub strict_columns: bool,

    #[command(flatten)]
    pub bands: BandPercentileArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct BandsArgs {
    #[arg(long, help = "Monitoring CSV (optionally .gz)")]
    pub input: PathBuf,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, allow_negative_numbers = true, help = "Trap count ETL to partition against")]
    pub etl: f64,

    #[command(flatten)]
    pub bands: BandPercentileArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct BandPercentileArgs {
    #[arg(long, default_value_t = LOW_PERCENTILE, help = "Percentile for the low cut point")]
    pub low_pct: f64,

    #[arg(long, default_value_t = MEDIUM_PERCENTILE, help = "Percentile for the medium cut point")]
    pub medium_pct: f64,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Monitoring CSV (optionally .gz)")]
    pub input: PathBuf,

    #[arg(long, default_value_t = false)]
    pub strict_columns: bool,
}
