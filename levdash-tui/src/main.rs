//! LevDash TUI: four-panel terminal dashboard.
//!
//! Panels:
//! 1. Overview: filters, return cards, monthly candles
//! 2. Trades: record table and PnL bars
//! 3. Series: BTC price and balance lines
//! 4. Help: keyboard shortcuts

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use levdash_core::RecordStore;
use levdash_runner::DashboardConfig;
use levdash_runner::logging::{LogTarget, init_logging, log_file_path};
use levdash_tui::{AppState, input, ui};

#[derive(Parser)]
#[command(name = "levdash-tui", about = "Terminal dashboard for leveraged BTC backtests")]
struct Args {
    /// CSV export to load (overrides the config file)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Config file (default: <config dir>/levdash/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial exchange
    #[arg(long)]
    exchange: Option<String>,

    /// Initial leverage
    #[arg(long)]
    leverage: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = DashboardConfig::load(args.config.as_deref()).context("failed to load config")?;
    // Logs go to a file; stderr would corrupt the alternate screen.
    init_logging(&LogTarget::File(config.logging.dir.clone()), &config.logging.level)?;

    let data_path = args.data.unwrap_or_else(|| config.data.path.clone());
    let store = RecordStore::load(&data_path)
        .with_context(|| format!("failed to load trades from {}", data_path.display()))?;

    let exchange = args.exchange.unwrap_or_else(|| config.defaults.exchange.clone());
    let leverage = args.leverage.unwrap_or(config.defaults.leverage);
    let mut app = AppState::new(&store, Some(exchange.as_str()), Some(leverage))
        .context("dataset has no selectable exchange")?;

    tracing::info!(
        path = %data_path.display(),
        records = store.len(),
        log = %log_file_path(&config.logging.dir).display(),
        "starting dashboard"
    );

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("dashboard closed");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState<'_>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps the loop responsive without spinning.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
