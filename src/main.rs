use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Read;
use tracing_subscriber::EnvFilter;

use farmops::cli::{Cli, Commands, NormalizeArgs, RecommendArgs};
use farmops::config::Config;
use farmops::engine::{complete_or_default, AssistanceDraft, Engine};
use farmops::models::FarmProfile;
use farmops::{report, KnowledgeBase};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(cli.config.clone()).context("loading configuration")?;
    let knowledge = KnowledgeBase::load(config.knowledge.path.as_deref())
        .context("loading knowledge base")?;

    match cli.command {
        Commands::Recommend(args) => run_recommend(args, &config, knowledge),
        Commands::Normalize(args) => run_normalize(args),
        Commands::Crops => {
            for name in knowledge.crop_names() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

fn run_recommend(
    args: RecommendArgs,
    config: &Config,
    knowledge: KnowledgeBase,
) -> anyhow::Result<()> {
    let engine = Engine::new(knowledge)
        .with_forecast_days(args.days.unwrap_or(config.forecast.days));

    let input = FarmProfile {
        crop_name: args.crop,
        state: args.state,
        district: args.district,
        soil_ph: args.soil_ph,
        planting_date: args.planting_date,
        land_size_acres: args.land_size,
    };

    let assistance = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            engine.recommend_with(&input, Utc::now().date_naive(), &mut rng)
        }
        None => engine.recommend(&input),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assistance)?);
    } else {
        report::print(&input, &assistance);
    }

    Ok(())
}

fn run_normalize(args: NormalizeArgs) -> anyhow::Result<()> {
    let raw = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.file)
            .with_context(|| format!("reading draft {}", args.file.display()))?
    };

    let draft: AssistanceDraft = serde_json::from_str(&raw).context("parsing draft JSON")?;
    let completed = complete_or_default(draft, &args.district, Utc::now().date_naive());

    println!("{}", serde_json::to_string_pretty(&completed)?);
    Ok(())
}
