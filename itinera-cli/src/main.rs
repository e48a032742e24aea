use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use itinera_core::{
    Interest, NoLiveSource, PRESETS, SuggestionSource, TravelPurpose, TripRequest, budget_tip,
    plan_trip, travel_advice,
};
use itinera_live::OpenSearchClient;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod export;
mod render;
mod state;

use config::Config;
use export::OutputFormat;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("ITINERA_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "itinera", version = VERSION, about = "Day-by-day travel itinerary generator")]
struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an itinerary for a destination
    Plan(PlanArgs),

    /// Show weather and language advice for a destination and date
    Advice {
        #[arg(long)]
        destination: String,

        /// Travel date, YYYY-MM-DD (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Print the budget tip for an amount in INR
    BudgetTip { budget: u32 },

    /// List preset destinations
    Destinations,

    /// Manage ~/.itinera/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Args, Debug)]
struct PlanArgs {
    /// Preset (Paris, Tokyo, New York, Goa) or any other place name
    #[arg(long, short)]
    destination: String,

    /// Starting location; adds departure and return flights
    #[arg(long = "from")]
    start_location: Option<String>,

    /// Budget in INR (5000-100000; default from config)
    #[arg(long)]
    budget: Option<u32>,

    /// Trip length in days (1-14; default from config)
    #[arg(long)]
    days: Option<usize>,

    /// Travel date, YYYY-MM-DD (default: today)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Travel purpose, repeatable (e.g. family-trip)
    #[arg(long = "purpose", value_parser = parse_purpose)]
    purposes: Vec<TravelPurpose>,

    /// Interest tag, repeatable (e.g. food-cuisine)
    #[arg(long = "interest", value_parser = parse_interest)]
    interests: Vec<Interest>,

    /// Seed for a reproducible itinerary
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the live search for non-preset destinations
    #[arg(long)]
    offline: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
    /// Print the config file path
    Path,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_purpose(s: &str) -> Result<TravelPurpose, String> {
    s.parse().map_err(|e: itinera_core::PlanError| e.to_string())
}

fn parse_interest(s: &str) -> Result<Interest, String> {
    s.parse().map_err(|e: itinera_core::PlanError| e.to_string())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Plan(args) => {
            let cfg = config::load_config()?;
            run_plan(args, &cfg)?;
        }

        Command::Advice { destination, date } => {
            let date = date.unwrap_or_else(today);
            let advice = travel_advice(&destination, date);
            println!("Weather Advice: {}", advice.weather);
            println!("Language Tips:  {}", advice.language);
        }

        Command::BudgetTip { budget } => {
            println!("{}", budget_tip(budget));
        }

        Command::Destinations => {
            for p in PRESETS {
                println!(
                    "{:<10} {} curated activities",
                    p.name,
                    p.base_points.len() + p.extra_tasks.len()
                );
            }
            println!("\nAny other name is planned from live search with synthetic padding.");
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn build_request(args: &PlanArgs, cfg: &Config) -> TripRequest {
    let start = args
        .start_location
        .clone()
        .or_else(|| cfg.trip.start_location.clone())
        .unwrap_or_default();

    TripRequest::new(
        args.destination.clone(),
        args.days.unwrap_or(cfg.trip.duration),
        args.date.unwrap_or_else(today),
    )
    .with_start_location(start)
    .with_budget(args.budget.unwrap_or(cfg.trip.budget))
    .with_purposes(args.purposes.clone())
    .with_interests(args.interests.clone())
}

fn run_plan(args: PlanArgs, cfg: &Config) -> Result<()> {
    let request = build_request(&args, cfg);

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let live;
    let source: &dyn SuggestionSource = if args.offline || !cfg.search.enabled {
        &NoLiveSource
    } else {
        live = OpenSearchClient::new(cfg.search.settings())?;
        &live
    };

    let plan = plan_trip(&request, source, &mut rng)
        .with_context(|| format!("planning trip to '{}'", request.destination))?;
    info!(source = ?plan.source, days = plan.itinerary.len(), "itinerary ready");

    let sink: Box<dyn Write> = match &args.out {
        Some(path) => {
            if path.is_dir() {
                bail!("--out points at a directory: {}", path.display());
            }
            Box::new(File::create(path).with_context(|| format!("create {}", path.display()))?)
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = BufWriter::new(sink);

    match args.format {
        OutputFormat::Text => {
            sink.write_all(render::render_plan(&plan).as_bytes())
                .context("write itinerary")?;
        }
        OutputFormat::Json => {
            export::write_json(&plan, &mut sink)?;
            writeln!(sink)?;
        }
        OutputFormat::Csv => export::write_csv(&plan, &mut sink)?,
    }
    sink.flush().context("flush output")?;

    if let Some(path) = &args.out {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_plan_flags() {
        let cli = Cli::try_parse_from([
            "itinera",
            "plan",
            "-d",
            "Goa",
            "--from",
            "Mumbai",
            "--days",
            "2",
            "--date",
            "2026-12-20",
            "--purpose",
            "family-trip",
            "--interest",
            "Food & Cuisine",
            "--seed",
            "7",
            "--format",
            "csv",
        ])
        .unwrap();

        let Command::Plan(args) = cli.command else {
            panic!("expected plan");
        };
        let req = build_request(&args, &Config::default());
        assert_eq!(req.destination, "Goa");
        assert_eq!(req.start_location, "Mumbai");
        assert_eq!(req.duration, 2);
        assert_eq!(req.budget, 50_000);
        assert_eq!(req.purposes, vec![TravelPurpose::FamilyTrip]);
        assert_eq!(req.interests, vec![Interest::FoodAndCuisine]);
        assert_eq!(args.format, OutputFormat::Csv);
    }

    #[test]
    fn test_config_supplies_defaults() {
        let cli = Cli::try_parse_from(["itinera", "plan", "-d", "Oslo"]).unwrap();
        let Command::Plan(args) = cli.command else {
            panic!("expected plan");
        };
        let mut cfg = Config::default();
        cfg.trip.duration = 9;
        cfg.trip.start_location = Some("Bergen".into());
        let req = build_request(&args, &cfg);
        assert_eq!(req.duration, 9);
        assert_eq!(req.start_location, "Bergen");
    }

    #[test]
    fn test_bad_tag_rejected_by_parser() {
        let err = Cli::try_parse_from(["itinera", "plan", "-d", "Goa", "--interest", "skydiving"]);
        assert!(err.is_err());
    }
}
