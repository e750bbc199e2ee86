//! visitor-import: Turn a visitor registration export into SQL inserts
//!
//! Usage:
//!   # Convert the first 100 rows, writing generated_sql_output.txt
//!   visitor-import registrations.csv
//!
//!   # Another event, custom output path
//!   visitor-import registrations.csv -o open_day_2.sql \
//!       --event-id 2b0c7d1e-4f61-4c53-9a5e-0d7f3f6a9b21 --event-name "OPEN DAY 2"
//!
//!   # Constants from a JSON file, flags still win
//!   visitor-import registrations.csv --config open_day.json --limit 500

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use visitor_import::{convert_file, ImportConfig};

#[derive(Parser, Debug)]
#[command(name = "visitor-import")]
#[command(about = "Generate visitors table INSERT statements from a registration CSV", long_about = None)]
struct Args {
    /// Registration export (CSV with a header row)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Where to write the statements
    #[arg(long, short = 'o', default_value = "generated_sql_output.txt")]
    output: PathBuf,

    /// JSON file with any of: schema, table, event_id, event_name, created_at, limit
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of rows to convert (default: 100)
    #[arg(long)]
    limit: Option<usize>,

    /// Database schema of the target table (default: public)
    #[arg(long)]
    schema: Option<String>,

    /// Target table (default: visitors)
    #[arg(long)]
    table: Option<String>,

    #[arg(long)]
    event_id: Option<String>,

    #[arg(long)]
    event_name: Option<String>,

    /// Timestamp literal for created_at/updated_at
    #[arg(long)]
    created_at: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("visitor_import=info")),
        )
        .init();

    let args = Args::parse();

    // Build config: defaults, then config file, then flags
    let mut config = match &args.config {
        Some(path) => ImportConfig::from_json_file(path)?,
        None => ImportConfig::default(),
    };
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    if let Some(schema) = args.schema {
        config.schema = schema;
    }
    if let Some(table) = args.table {
        config.table = table;
    }
    if let Some(event_id) = args.event_id {
        config.event_id = event_id;
    }
    if let Some(event_name) = args.event_name {
        config.event_name = event_name;
    }
    if let Some(created_at) = args.created_at {
        config.created_at = created_at;
    }

    let count = convert_file(&args.input, &args.output, &config).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    println!("Generated {} SQL INSERT statements", count);
    println!("Output written to: {}", args.output.display());

    Ok(())
}
