use analytics::{aggregate, OverallSignal, SignalLabel};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use configuration::{load_config, Config, FactorConfig};
use core_types::{Factor, FactorId, SignalTag};
use indicatif::{ProgressBar, ProgressStyle};
use market_data::{
    fetch_pair_or_simulate, load_series_file, resolve_coin_id, CoinGeckoClient, MarketDataSource,
    MarketSnapshot, SimulatedSource, POPULAR_COINS,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the AlphaDesk factor scanner.
#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => handle_analyze(args).await?,
        Commands::Factors(args) => handle_factors(args)?,
        Commands::Coins => handle_coins(),
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Scores a crypto asset against a catalog of quantitative alpha factors.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the factor catalog for one coin and print the combined signal.
    Analyze(AnalyzeArgs),
    /// List the factor catalog and which entries are enabled.
    Factors(ConfigArgs),
    /// List popular coins and their CoinGecko ids.
    Coins,
}

#[derive(Parser)]
struct ConfigArgs {
    /// Path to the TOML configuration file. A missing file means defaults.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// CoinGecko id or ticker symbol of the coin to analyze (e.g. "sol").
    #[arg(long, default_value = "bitcoin")]
    coin: String,

    /// Benchmark coin for relative factors. Defaults to `market_data.reference_coin`.
    #[arg(long)]
    reference: Option<String>,

    /// Number of daily bars to request. Defaults to `market_data.days`.
    #[arg(long)]
    days: Option<u32>,

    /// Skip the network and analyze a simulated random walk.
    #[arg(long)]
    offline: bool,

    /// Seed for the simulator, for reproducible offline runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Read the target series from a JSON file instead of the network.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Read the reference series from a JSON file. Only used with `--input`.
    #[arg(long, requires = "input")]
    reference_input: Option<PathBuf>,

    /// Evaluate only these factors (repeatable, e.g. `--only TECH_RSI`).
    #[arg(long = "only", value_name = "ID")]
    only: Vec<FactorId>,

    /// Disable these factors on top of the configuration (repeatable).
    #[arg(long = "disable", value_name = "ID")]
    disable: Vec<FactorId>,

    /// Override `analysis.adx_period`.
    #[arg(long)]
    adx_period: Option<usize>,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

async fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let config = load_config(&args.config.config)
        .with_context(|| format!("Failed to load {}", args.config.config.display()))?;

    let mut params = config.analysis;
    if let Some(period) = args.adx_period {
        params.adx_period = period;
        params.validate().context("Invalid --adx-period")?;
    }
    let factor_config = factor_selection(&config, &args.only, &args.disable);

    let coin_id = resolve_coin_id(&args.coin);
    let reference_id = resolve_coin_id(
        args.reference
            .as_deref()
            .unwrap_or(&config.market_data.reference_coin),
    );
    let days = args.days.unwrap_or(config.market_data.days);

    let snapshot = load_snapshot(&args, &config, &coin_id, &reference_id, days).await?;

    let factors = factors::evaluate(&snapshot.target, &snapshot.reference, &params, &factor_config);
    let overall = aggregate(&factors);

    if args.json {
        let report = serde_json::json!({
            "coin": coin_id,
            "reference": reference_id,
            "observations": snapshot.target.len(),
            "simulated": snapshot.simulated,
            "factors": factors,
            "overall": overall,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if snapshot.simulated {
        println!("Live data unavailable: showing a simulated series.");
    }
    println!(
        "{} vs {} | {} daily bars",
        coin_id,
        reference_id,
        snapshot.target.len()
    );
    if factors.is_empty() {
        println!(
            "No factors evaluated: at least {} bars are required and one factor must be enabled.",
            factors::MIN_OBSERVATIONS
        );
    } else {
        println!("{}", factor_table(&factors));
    }
    println!("{}", summary_line(&overall));

    Ok(())
}

/// Applies `--only` and `--disable` on top of the configured factor table.
fn factor_selection(config: &Config, only: &[FactorId], disable: &[FactorId]) -> FactorConfig {
    let mut selection = if only.is_empty() {
        config.factors.clone()
    } else {
        FactorConfig::only(only.iter().copied())
    };
    for id in disable {
        selection.set(*id, false);
    }
    selection
}

/// Resolves the target and reference series from files, the simulator, or
/// the live API, in that order of precedence.
async fn load_snapshot(
    args: &AnalyzeArgs,
    config: &Config,
    coin_id: &str,
    reference_id: &str,
    days: u32,
) -> Result<MarketSnapshot> {
    let simulator = match args.seed {
        Some(seed) => SimulatedSource::seeded(seed),
        None => SimulatedSource::new(),
    };

    if let Some(path) = &args.input {
        let target = load_series_file(path)
            .with_context(|| format!("Failed to read series from {}", path.display()))?;
        let reference = match &args.reference_input {
            Some(path) => load_series_file(path)
                .with_context(|| format!("Failed to read series from {}", path.display()))?,
            None => target.clone(),
        };
        return Ok(MarketSnapshot {
            target,
            reference,
            simulated: false,
        });
    }

    if args.offline {
        let series = simulator.fetch_series(coin_id, days).await?;
        return Ok(MarketSnapshot {
            reference: series.clone(),
            target: series,
            simulated: true,
        });
    }

    let client = CoinGeckoClient::new(&config.market_data)?;
    let spinner = if args.json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Fetching {coin_id} and {reference_id} ({days}d)..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let snapshot = fetch_pair_or_simulate(&client, &simulator, coin_id, reference_id, days).await;

    spinner.finish_and_clear();
    Ok(snapshot)
}

// ==============================================================================
// Output Rendering
// ==============================================================================

fn factor_table(factors: &[Factor]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Factor",
            "Category",
            "Value",
            "Signal",
            "Score",
            "Confidence",
        ]);

    for factor in factors {
        let color = match factor.signal {
            SignalTag::Bullish => Color::Green,
            SignalTag::Bearish => Color::Red,
            SignalTag::Neutral => Color::Grey,
        };
        table.add_row(vec![
            Cell::new(&factor.name),
            Cell::new(factor.category),
            Cell::new(&factor.value),
            Cell::new(factor.signal).fg(color),
            Cell::new(format!("{:+.1}", factor.score)),
            Cell::new(format!("{:.0}%", factor.confidence * 100.0)),
        ]);
    }
    table
}

fn summary_line(overall: &OverallSignal) -> String {
    let hint = match overall.label {
        SignalLabel::Long => "factors lean bullish",
        SignalLabel::Short => "factors lean bearish",
        SignalLabel::Neutral => "no clear edge",
    };
    format!(
        "Overall: {} (mean score {:+.2}, {}/{} factors active): {}",
        overall.label, overall.mean_score, overall.active_count, overall.factor_count, hint
    )
}

// ==============================================================================
// Catalog Commands
// ==============================================================================

fn handle_factors(args: ConfigArgs) -> Result<()> {
    let config = load_config(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["#", "Factor", "Enabled"]);
    for (index, id) in FactorId::ALL.into_iter().enumerate() {
        let enabled = config.factors.is_enabled(id);
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(id),
            Cell::new(if enabled { "yes" } else { "no" }).fg(if enabled {
                Color::Green
            } else {
                Color::DarkGrey
            }),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn handle_coins() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Symbol", "CoinGecko id"]);
    for coin in POPULAR_COINS {
        table.add_row(vec![coin.symbol, coin.id]);
    }
    println!("{table}");
}
