//! NEXTGEN CLI: scriptable access to the signal generator.
//!
//! Commands:
//! - `generate`: produce one batch and print it as export text or JSON
//! - `assets`: list the selectable symbols
//! - `login`: run the access gate once; exit status reports the outcome

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nextgen_core::gate;
use nextgen_core::{
    format_batch, AppConfig, Asset, DirectionFilter, GenerationRequest, SeedPolicy, Signal,
    SignalGenerator,
};

#[derive(Parser, Debug)]
#[command(
    name = "nextgen-cli",
    about = "NEXTGEN CLI — CALL/PUT signal batches from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one batch of signals.
    Generate(GenerateArgs),
    /// List the selectable asset symbols.
    Assets,
    /// Check a username/password pair against the access gate.
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Assets => {
            run_assets();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Login { username, password } => Ok(if run_login(&username, &password) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of time slots. Defaults to the configured count.
    #[arg(long)]
    count: Option<usize>,

    /// Asset symbol (e.g., EUR/USD, USD/INR-OTC).
    #[arg(long)]
    asset: Option<String>,

    /// Direction filter: ALL, CALL, or PUT.
    #[arg(long)]
    filter: Option<String>,

    /// Drop roughly 5% of surviving signals.
    #[arg(long, default_value_t = false, conflicts_with = "no_backtest")]
    backtest: bool,

    /// Keep every surviving signal, even if the config enables the backtest filter.
    #[arg(long, default_value_t = false)]
    no_backtest: bool,

    /// Fixed RNG seed for a reproducible batch.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON array instead of export lines.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Explicit backtest choice from the command line, if any.
    fn backtest_override(&self) -> Option<bool> {
        match (self.backtest, self.no_backtest) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let (request, seed) = build_request(&args, &config)?;
    info!(
        count = request.count,
        asset = %request.asset,
        filter = %request.direction_filter,
        backtest = request.backtest_filter,
        seeded = seed.seed().is_some(),
        "generating"
    );

    let signals = SignalGenerator::new(seed).generate(&request);
    debug!(survivors = signals.len(), "batch ready");

    emit(&mut io::stdout().lock(), &signals, args.json)?;
    Ok(ExitCode::SUCCESS)
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(p) => {
            AppConfig::from_file(p).with_context(|| format!("loading config {}", p.display()))
        }
        None => Ok(AppConfig::default()),
    }
}

/// Merge command-line overrides onto the configured defaults.
fn build_request(args: &GenerateArgs, config: &AppConfig) -> Result<(GenerationRequest, SeedPolicy)> {
    let settings = &config.generator;

    let asset = match &args.asset {
        Some(s) => s.parse::<Asset>()?,
        None => settings.default_asset,
    };
    let filter = match &args.filter {
        Some(s) => s.parse::<DirectionFilter>()?,
        None => settings.default_filter,
    };

    let request = GenerationRequest::new(args.count.unwrap_or(settings.default_count), asset)
        .with_filter(filter)
        .with_backtest(args.backtest_override().unwrap_or(settings.backtest_filter));
    let seed = SeedPolicy::from_option(args.seed.or(settings.seed));
    Ok((request, seed))
}

fn render(signals: &[Signal], json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(signals).context("serializing signals")
    } else {
        Ok(format_batch(signals))
    }
}

/// Write the batch. An empty batch in text mode prints nothing.
fn emit<W: Write>(out: &mut W, signals: &[Signal], json: bool) -> Result<()> {
    let text = render(signals, json)?;
    if !text.is_empty() {
        writeln!(out, "{text}").context("writing signals")?;
    }
    Ok(())
}

fn run_assets() {
    for asset in Asset::ALL {
        println!("{}", asset.symbol());
    }
}

/// Returns true when the pair unlocks the gate.
fn run_login(username: &str, password: &str) -> bool {
    match gate::check(username, password) {
        Ok(()) => {
            println!("Access granted");
            true
        }
        Err(err) => {
            eprintln!("{err}");
            false
        }
    }
}
