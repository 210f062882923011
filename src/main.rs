//! u-batch CLI - batch duration estimation
//!
//! Usage: u-batch [OPTIONS] <COMMAND>
//!
//! Commands:
//!   simulate  Plan a batch with randomly generated inputs
//!   plan      Plan a batch from quantities and line capacities given on the command line

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use u_batch::config::PlannerConfig;
use u_batch::generator::{generate_request, generate_unit_times};
use u_batch::logging;
use u_batch::models::{Catalog, ProductionLine};
use u_batch::planner::{BatchPlanner, PlanRequest};
use u_batch::report::{render_table, BatchReport};
use u_batch::validation::{validate_request, validate_unique_categories};

/// u-batch - production line allocation and batch duration estimation
#[derive(Parser, Debug)]
#[command(name = "u-batch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working hours per day (overrides config)
    #[arg(long, global = true)]
    hours_per_day: Option<f64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plan a batch with randomly generated quantities, unit times and lines
    Simulate {
        /// Seed for reproducible inputs
        #[arg(long)]
        seed: Option<u64>,

        /// Number of production lines
        #[arg(long)]
        lines: Option<usize>,
    },

    /// Plan a batch from user-supplied values
    Plan {
        /// Quantity per category (e.g. jackets=50), repeatable
        #[arg(short, long = "quantity", value_parser = parse_key_value::<u32>)]
        quantities: Vec<(String, u32)>,

        /// Per-unit time in hours (e.g. jackets=4.5); generated when omitted
        #[arg(short = 't', long = "unit-time", value_parser = parse_key_value::<f64>)]
        unit_times: Vec<(String, f64)>,

        /// Line capacity (e.g. A=0.95), repeatable
        #[arg(short, long = "line", value_parser = parse_key_value::<f64>)]
        lines: Vec<(String, f64)>,

        /// Seed for generated unit times
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_key_value<T>(s: &str) -> Result<(String, T), String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{s}'"));
    }
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for '{key}': {e}"))?;
    Ok((key.to_string(), value))
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlannerConfig::default(),
    };
    if let Some(hours) = cli.hours_per_day {
        config.hours_per_day = hours;
    }

    let catalog = Catalog::garments();

    let request = match cli.command {
        Commands::Simulate { seed, lines } => {
            if let Some(seed) = seed {
                config.seed = Some(seed);
            }
            if let Some(count) = lines {
                config.line_count = count;
            }
            info!(seed = ?config.seed, lines = config.line_count, "generating inputs");
            let mut rng = rng_for(config.seed);
            generate_request(&catalog, config.line_count, &mut rng)
        }
        Commands::Plan {
            quantities,
            unit_times,
            lines,
            seed,
        } => {
            let mut errors = Vec::new();
            for check in [
                validate_unique_categories(&quantities, "Quantity"),
                validate_unique_categories(&unit_times, "Unit time"),
            ] {
                errors.extend(check.err().unwrap_or_default());
            }

            let mut request = PlanRequest {
                quantities: quantities.into_iter().map(|(k, v)| (k.into(), v)).collect(),
                unit_times: unit_times.into_iter().map(|(k, v)| (k.into(), v)).collect(),
                lines: lines
                    .into_iter()
                    .map(|(name, capacity)| ProductionLine::new(name, capacity))
                    .collect(),
            };
            errors.extend(validate_request(&request, &catalog).err().unwrap_or_default());

            if !errors.is_empty() {
                for error in &errors {
                    eprintln!("error: {error}");
                }
                bail!("{} invalid input value(s)", errors.len());
            }

            if request.unit_times.is_empty() {
                let mut rng = rng_for(seed.or(config.seed));
                request.unit_times = generate_unit_times(&catalog, &mut rng);
            }
            request
        }
    };

    let planner = BatchPlanner::new(&config).context("invalid planner configuration")?;
    let result = planner.plan(&request)?;
    let report = BatchReport::new(&result, &request, &catalog);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_table(&report));
    }

    Ok(())
}
