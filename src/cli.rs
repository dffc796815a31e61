use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "farmops",
    version,
    about = "Farm assistance recommendations from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a full assistance record for a farm
    Recommend(RecommendArgs),
    /// Complete a collaborator-produced draft record with defaults
    Normalize(NormalizeArgs),
    /// List the crops the knowledge base covers
    Crops,
}

#[derive(Args)]
pub struct RecommendArgs {
    /// Crop name; crops outside the knowledge base degrade to documented
    /// defaults
    #[arg(long)]
    pub crop: String,

    /// State, selects the regional weather baseline
    #[arg(long)]
    pub state: String,

    /// District, names the nearby mandi
    #[arg(long)]
    pub district: String,

    /// Soil pH
    #[arg(long, default_value_t = 6.5)]
    pub soil_ph: f64,

    /// Planting date (YYYY-MM-DD)
    #[arg(long)]
    pub planting_date: NaiveDate,

    /// Land size in acres
    #[arg(long, default_value_t = 1.0)]
    pub land_size: f64,

    /// Forecast horizon in days, overrides the config
    #[arg(long)]
    pub days: Option<u32>,

    /// Seed the weather generator for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the record as JSON instead of a text report
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Draft JSON file, or "-" for stdin
    pub file: PathBuf,

    /// District name for the default market entry
    #[arg(long, default_value = "Local")]
    pub district: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_args_parse() {
        let cli = Cli::parse_from([
            "farmops",
            "recommend",
            "--crop",
            "wheat",
            "--state",
            "Punjab",
            "--district",
            "Ludhiana",
            "--planting-date",
            "2024-11-15",
            "--seed",
            "42",
        ]);
        match cli.command {
            Commands::Recommend(args) => {
                assert_eq!(args.crop, "wheat");
                assert_eq!(args.soil_ph, 6.5);
                assert_eq!(args.seed, Some(42));
                assert_eq!(
                    args.planting_date,
                    NaiveDate::from_ymd_opt(2024, 11, 15).unwrap()
                );
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn bad_date_is_rejected() {
        let result = Cli::try_parse_from([
            "farmops",
            "recommend",
            "--crop",
            "wheat",
            "--state",
            "Punjab",
            "--district",
            "Ludhiana",
            "--planting-date",
            "15/11/2024",
        ]);
        assert!(result.is_err());
    }
}
