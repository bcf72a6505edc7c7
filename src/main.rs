use anyhow::{Context, Result};
use cap_table::{
    load_ledger, today, validator, write_report, OutputFormat, ReaderOptions, VestingEngine,
};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cap-table",
    version,
    about = "Point-in-time cap table from an equity event ledger"
)]
struct Cli {
    /// Ledger CSV: event_type,employee_id,employee_name,award_id,event_date,award_qty
    #[arg(env = "CAP_TABLE_LEDGER")]
    ledger: PathBuf,

    /// Cutoff date (YYYY-MM-DD), inclusive. Defaults to today.
    #[arg(long, env = "CAP_TABLE_AS_OF", value_parser = parse_cutoff)]
    as_of: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Treat the ledger's first row as a header
    #[arg(long)]
    has_headers: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => OutputFormat::Csv,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn parse_cutoff(value: &str) -> Result<NaiveDate, String> {
    validator::parse_date(value).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let options = ReaderOptions {
        has_headers: cli.has_headers,
    };
    let ledger = load_ledger(&cli.ledger, options)
        .with_context(|| format!("Failed to load ledger {}", cli.ledger.display()))?;

    let stats = ledger.stats();
    eprintln!("✓ Loaded {}", stats);

    let cutoff = cli.as_of.unwrap_or_else(today);
    let rows = VestingEngine::new(&ledger).compute_all(Some(cutoff));
    info!(%cutoff, rows = rows.len(), %stats, "cap table computed");
    eprintln!("✓ Cap table as of {}: {} rows", cutoff, rows.len());

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_report(&rows, cli.format.into(), &mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), "cap table written");
        }
        None => {
            let stdout = io::stdout();
            write_report(&rows, cli.format.into(), stdout.lock())?;
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout carries the cap table.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
