//! ltde CLI
//!
//! Runs the decision engine against recorded or simulated telemetry and
//! prints JSON to stdout. Logs go to stderr (`RUST_LOG` or `--verbose`).

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use ltde_core::{CoachEngine, Game, ObjectiveKind, DEFAULT_PRIORITY_LIMIT};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "ltde")]
#[command(about = "Live tactical decision engine for esports coaching", long_about = None)]
struct Cli {
    /// Engine config YAML (defaults to LTDE_CONFIG_PATH, then built-ins)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(clap::Args)]
struct TelemetryArgs {
    /// Match id to query
    #[arg(long)]
    r#match: String,

    /// Match clock in seconds
    #[arg(long)]
    time: f32,

    /// Recorded fixture timeline (JSON); simulated telemetry when absent
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Simulator seed
    #[arg(long, default_value = "42")]
    seed: u64,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Should we take the objective right now?
    Recommend {
        #[command(flatten)]
        telemetry: TelemetryArgs,

        /// Objective key (defaults to the configured focus objective)
        #[arg(long)]
        objective: Option<String>,
    },

    /// Rank every objective on the board
    Priorities {
        #[command(flatten)]
        telemetry: TelemetryArgs,

        /// Maximum entries
        #[arg(long, default_value_t = DEFAULT_PRIORITY_LIMIT)]
        limit: usize,
    },

    /// Classify an opponent roster and pick a counter script
    Opponents {
        /// Roster file (.json batch or .csv rows)
        #[arg(long)]
        roster: PathBuf,

        /// Game of a CSV roster (valorant, league)
        #[arg(long)]
        game: Option<String>,
    },

    /// Print the JSON schema of an output record
    Schema {
        /// recommendation, decision, priority, opponents, playstyle, counter_script
        #[arg(default_value = "recommendation")]
        record: String,
    },
}

#[cfg(feature = "cli")]
#[tokio::main]
async fn main() -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();

    let config = ltde_cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Recommend { telemetry, objective } => {
            let source = ltde_cli::telemetry_source(telemetry.fixture.as_deref(), telemetry.seed)?;
            let objective = match objective {
                Some(key) => key.parse::<ObjectiveKind>()?,
                None => config.telemetry.focus_objective,
            };
            let engine = CoachEngine::new(config, source);
            let recommendation = engine
                .get_recommendation_for(&telemetry.r#match, telemetry.time, objective)
                .await
                .context("Recommendation failed")?;
            print_json(&recommendation)
        }

        Commands::Priorities { telemetry, limit } => {
            let source = ltde_cli::telemetry_source(telemetry.fixture.as_deref(), telemetry.seed)?;
            let engine = CoachEngine::new(config, source);
            let priorities = engine
                .get_top_priorities(&telemetry.r#match, telemetry.time, limit)
                .await
                .context("Priority ranking failed")?;
            print_json(&priorities)
        }

        Commands::Opponents { roster, game } => {
            let game = game.map(|g| g.parse::<Game>()).transpose()?;
            let batch = ltde_cli::load_roster(&roster, game)?;
            let source = ltde_cli::telemetry_source(None, 0)?;
            let analysis = CoachEngine::new(config, source).analyze_opponents(&batch);
            print_json(&analysis)
        }

        Commands::Schema { record } => {
            let schema = ltde_core::output_schema(&record)
                .with_context(|| format!("known records: {}", ltde_core::api::SCHEMA_NAMES.join(", ")))?;
            print_json(&schema)
        }
    }
}

#[cfg(feature = "cli")]
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("ltde CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
