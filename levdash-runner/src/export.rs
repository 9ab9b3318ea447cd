//! Export: CSV and JSON renderings of a dashboard selection.
//!
//! - **CSV**: the table view plus entry time, BTC price and period
//! - **Monthly**: the monthly aggregate table as CSV
//! - **JSON**: the full snapshot (records, monthly aggregates, returns, series)

use std::path::Path;

use anyhow::{Context, Result};
use levdash_core::TradeRecord;

use crate::dashboard::DashboardSnapshot;
use crate::monthly::MonthlyAggregate;

/// Output format for the export command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Monthly,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "monthly" => Ok(ExportFormat::Monthly),
            "json" => Ok(ExportFormat::Json),
            other => anyhow::bail!("unknown export format '{other}' (expected csv, monthly or json)"),
        }
    }
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export records as CSV, in the order given.
///
/// Columns: Number, Entry time, Period, Trade type, Exposure, Entry balance,
/// Exit balance, Pnl (incl fees), BTC Price
pub fn export_records_csv(records: &[&TradeRecord]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "Number",
        "Entry time",
        "Period",
        "Trade type",
        "Exposure",
        "Entry balance",
        "Exit balance",
        "Pnl (incl fees)",
        "BTC Price",
    ])?;

    for r in records {
        let number = r.number.map(|n| n.to_string()).unwrap_or_default();
        wtr.write_record([
            number.as_str(),
            &r.entry_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            &r.period().to_string(),
            r.trade_type.label(),
            r.exposure.as_str(),
            &format!("{:.6}", r.entry_balance),
            &format!("{:.6}", r.exit_balance),
            &format!("{:.6}", r.pnl),
            &format!("{:.2}", r.btc_price),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Export the monthly table as CSV.
pub fn export_monthly_csv(monthly: &[MonthlyAggregate]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["month", "entry", "exit", "monthly_return", "trades"])?;
    for m in monthly {
        wtr.write_record([
            &m.period.to_string(),
            &format!("{:.6}", m.entry_balance),
            &format!("{:.6}", m.exit_balance),
            &m.return_pct.map(|p| format!("{p:.4}")).unwrap_or_default(),
            &m.trade_count.to_string(),
        ])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a snapshot to pretty JSON.
pub fn export_snapshot_json(snapshot: &DashboardSnapshot<'_>) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("failed to serialize dashboard snapshot to JSON")
}

/// Render a snapshot in the requested format.
pub fn render(snapshot: &DashboardSnapshot<'_>, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => export_records_csv(&snapshot.records),
        ExportFormat::Monthly => export_monthly_csv(&snapshot.monthly),
        ExportFormat::Json => export_snapshot_json(snapshot),
    }
}

/// Write a rendered export to disk, creating parent directories.
pub fn write_export(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "export written");
    Ok(())
}
