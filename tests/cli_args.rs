use clap::Parser;
use trap_etl::cli::{Cli, Commands};

#[test]
fn run_thresholds_are_optional() {
    let cli = Cli::parse_from(["trap-etl", "run", "--input", "traps.csv"]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.out, std::path::PathBuf::from("."));
            assert!((args.bands.low_pct - 0.33).abs() < 1e-12);
            assert!((args.bands.medium_pct - 0.66).abs() < 1e-12);
            assert!(!args.json);
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn run_accepts_negative_sentinel() {
    let cli = Cli::parse_from([
        "trap-etl",
        "run",
        "--input",
        "traps.csv",
        "--pest-etl",
        "-1",
        "--damage-etl",
        "2.5",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.pest_etl, Some(-1.0));
            assert_eq!(args.damage_etl, Some(2.5));
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn bands_requires_etl() {
    assert!(Cli::try_parse_from(["trap-etl", "bands", "--input", "traps.csv"]).is_err());
    let cli = Cli::parse_from(["trap-etl", "bands", "--input", "traps.csv", "--etl", "15"]);
    match cli.command {
        Commands::Bands(args) => assert_eq!(args.etl, 15.0),
        _ => panic!("expected bands command"),
    }
}
