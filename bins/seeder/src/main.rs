//! Sample MRR dataset generator for Cascade development and testing.
//!
//! Writes a deterministic columnar dataset the server can load as its
//! bundled file.
//!
//! Usage: cargo run --bin seeder -- --months 24 --subscriptions 500

mod simulate;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use crate::simulate::{SeedParams, generate};

#[derive(Parser)]
#[command(about = "Generate a deterministic sample MRR dataset.")]
struct Args {
    /// Output file.
    #[arg(long, value_name = "PATH", default_value = "data/mrr.json")]
    out: PathBuf,

    /// Number of months, starting January 2023.
    #[arg(long, default_value_t = 24)]
    months: u32,

    /// Number of subscriptions.
    #[arg(long, default_value_t = 500)]
    subscriptions: u32,

    /// RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let params = SeedParams {
        start: NaiveDate::from_ymd_opt(2023, 1, 1).context("Invalid start month")?,
        months: args.months,
        subscriptions: args.subscriptions,
        seed: args.seed,
    };

    println!(
        "Simulating {} subscriptions over {} months (seed {})...",
        params.subscriptions, params.months, params.seed
    );
    let columns = generate(&params)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = File::create(&args.out)
        .with_context(|| format!("Failed to create {}", args.out.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &columns.to_json())?;
    writer.flush()?;

    println!("  Wrote {} records to {}", columns.len(), args.out.display());
    Ok(())
}
