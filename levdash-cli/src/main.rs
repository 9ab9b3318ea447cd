//! LevDash CLI: headless views over a leveraged-trading backtest export.
//!
//! Commands:
//! - `options`: exchanges, leverages and date bounds in the dataset
//! - `summary`: headline returns and the monthly table for one selection
//! - `table`: the filtered records, most recent first
//! - `export`: write the selection as CSV, monthly CSV or JSON

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use levdash_core::{FilterCriteria, RecordStore};
use levdash_runner::logging::{init_logging, LogTarget};
use levdash_runner::{export, Dashboard, DashboardConfig, DashboardSnapshot, ExportFormat};

#[derive(Parser)]
#[command(
    name = "levdash",
    about = "LevDash CLI: headless leveraged BTC backtest dashboard"
)]
struct Cli {
    /// CSV export to load. Defaults to the config file's `data.path`.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file. Defaults to <config dir>/levdash/config.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// The four filter parameters. Missing values come from the config file
/// and the exchange's date range.
#[derive(Args, Debug, Clone)]
struct Selection {
    /// Exchange name (case-sensitive).
    #[arg(long)]
    exchange: Option<String>,

    /// Leverage multiplier (integer).
    #[arg(long)]
    leverage: Option<String>,

    /// Start date (YYYY-MM-DD), inclusive. Defaults to the exchange's first
    /// trade, or the dataset's first trade for an exchange with no records.
    #[arg(long)]
    start: Option<String>,

    /// End date (YYYY-MM-DD), inclusive. Defaults to the exchange's last trade.
    #[arg(long)]
    end: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List exchanges, leverages and per-exchange date bounds.
    Options,
    /// Print headline returns and monthly aggregates.
    Summary {
        #[command(flatten)]
        selection: Selection,

        /// Print the full snapshot as JSON instead of tables.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the filtered records.
    Table {
        #[command(flatten)]
        selection: Selection,
    },
    /// Export the filtered selection.
    Export {
        #[command(flatten)]
        selection: Selection,

        /// csv (records), monthly (monthly table) or json (full snapshot).
        #[arg(long, default_value = "csv")]
        format: String,

        /// Output file. Prints to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = DashboardConfig::load(cli.config.as_deref()).context("failed to load config")?;
    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    init_logging(&LogTarget::Stderr, level)?;

    let data_path = cli.data.clone().unwrap_or_else(|| config.data.path.clone());
    let store = RecordStore::load(&data_path)
        .with_context(|| format!("failed to load trades from {}", data_path.display()))?;

    match cli.command {
        Commands::Options => run_options(&store),
        Commands::Summary { selection, json } => run_summary(&store, &config, &selection, json),
        Commands::Table { selection } => run_table(&store, &config, &selection),
        Commands::Export {
            selection,
            format,
            output,
        } => run_export(&store, &config, &selection, &format, output),
    }
}

/// Resolve a selection into criteria: flags, then config defaults, then the
/// exchange's date bounds. An exchange with no records falls back to the
/// dataset's bounds and yields an empty selection. Leverage and dates go
/// through the same coercion as any other caller.
fn resolve_criteria(
    store: &RecordStore,
    config: &DashboardConfig,
    selection: &Selection,
) -> Result<FilterCriteria> {
    let exchange = selection
        .exchange
        .clone()
        .unwrap_or_else(|| config.defaults.exchange.clone());
    let leverage = selection
        .leverage
        .clone()
        .unwrap_or_else(|| config.defaults.leverage.to_string());

    let Some((first, last)) = store
        .date_bounds(&exchange)
        .or_else(|| store.overall_date_bounds())
    else {
        bail!("dataset has no records");
    };
    let start = selection.start.clone().unwrap_or_else(|| first.to_string());
    let end = selection.end.clone().unwrap_or_else(|| last.to_string());

    Ok(FilterCriteria::parse(&exchange, &leverage, &start, &end)?)
}

fn run_options(store: &RecordStore) -> Result<()> {
    print_dataset(store);
    println!();
    println!("{:<12} {:<12} {:<12} {:>8}", "Exchange", "First", "Last", "Trades");
    println!("{}", "-".repeat(47));
    for exchange in store.exchanges() {
        let count = store
            .records()
            .iter()
            .filter(|r| r.exchange == exchange)
            .count();
        if let Some((first, last)) = store.date_bounds(exchange) {
            println!("{:<12} {:<12} {:<12} {:>8}", exchange, first, last, count);
        }
    }
    println!();
    let leverages: Vec<String> = store.leverages().iter().map(|l| format!("{l}x")).collect();
    println!("Leverages: {}", leverages.join(", "));
    Ok(())
}

fn run_summary(
    store: &RecordStore,
    config: &DashboardConfig,
    selection: &Selection,
    json: bool,
) -> Result<()> {
    let criteria = resolve_criteria(store, config, selection)?;
    let snapshot = Dashboard::new(store).query(&criteria);

    if json {
        println!("{}", export::render(&snapshot, ExportFormat::Json)?);
        return Ok(());
    }

    print_dataset(store);
    print_selection(&snapshot);
    if snapshot.is_empty() {
        println!("No data for this selection");
        return Ok(());
    }

    println!();
    println!("BTC price return:     {:>10}", snapshot.btc_return_label());
    println!("Strategy return:      {:>10}", snapshot.strategy_return_label());
    println!("Relative performance: {:>10}", snapshot.relative_label());
    println!(
        "Long PnL: {:+.4}  Short PnL: {:+.4}",
        snapshot.pnl.total_long(),
        snapshot.pnl.total_short()
    );
    println!();
    println!("Monthly (newest first):");
    println!(
        "{:<8} {:>10} {:>10} {:>10} {:>7}",
        "Month", "Entry", "Exit", "Return", "Trades"
    );
    println!("{}", "-".repeat(49));
    for m in &snapshot.monthly {
        println!(
            "{:<8} {:>10.4} {:>10.4} {:>10} {:>7}",
            m.period.to_string(),
            m.entry_balance,
            m.exit_balance,
            levdash_runner::format_pct(m.return_pct),
            m.trade_count
        );
    }
    Ok(())
}

fn run_table(store: &RecordStore, config: &DashboardConfig, selection: &Selection) -> Result<()> {
    let criteria = resolve_criteria(store, config, selection)?;
    let snapshot = Dashboard::new(store).query(&criteria);

    print_selection(&snapshot);
    if snapshot.is_empty() {
        println!("No data for this selection");
        return Ok(());
    }

    println!();
    println!(
        "{:>6} {:<17} {:<6} {:>9} {:>10} {:>10} {:>10}",
        "No.", "Entry time", "Type", "Exposure", "Entry bal", "Exit bal", "Pnl"
    );
    println!("{}", "-".repeat(74));
    for r in &snapshot.records {
        println!(
            "{:>6} {:<17} {:<6} {:>9} {:>10.4} {:>10.4} {:>+10.4}",
            r.number.map(|n| n.to_string()).unwrap_or_else(|| "-".into()),
            r.entry_time.format("%Y-%m-%d %H:%M").to_string(),
            r.trade_type.label(),
            r.exposure,
            r.entry_balance,
            r.exit_balance,
            r.pnl
        );
    }
    Ok(())
}

fn run_export(
    store: &RecordStore,
    config: &DashboardConfig,
    selection: &Selection,
    format: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let criteria = resolve_criteria(store, config, selection)?;
    let snapshot = Dashboard::new(store).query(&criteria);
    let rendered = export::render(&snapshot, format)?;

    match output {
        Some(path) => {
            export::write_export(&path, &rendered)?;
            println!(
                "Exported {} records ({format:?}) to {}",
                snapshot.record_count(),
                path.display()
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn print_dataset(store: &RecordStore) {
    let source = store
        .source()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(in memory)".into());
    println!("Dataset: {source}");
    println!("Records: {}", store.len());
    println!("BLAKE3:  {}", store.dataset_hash());
}

fn print_selection(snapshot: &DashboardSnapshot<'_>) {
    let c = &snapshot.criteria;
    println!(
        "Selection: {} {}x, {} to {} ({} trades)",
        c.exchange,
        c.leverage,
        c.start,
        c.end,
        snapshot.record_count()
    );
}
