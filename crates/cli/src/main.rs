// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line tools for the Hydromet Inventory System.
//!
//! The `materialize` subcommand rebuilds the daily workflow aggregates
//! over a date range, for cron-driven batch runs against the shared
//! database file.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};
use tracing::info;
use tracing_log::AsTrace;

use hydromet_api::materialize_range;
use hydromet_persistence::Persistence;

/// Hydromet Inventory System command-line tools.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rebuild the daily workflow aggregates over a date range.
    Materialize {
        /// Start date YYYY-MM-DD (inclusive).
        #[arg(long, value_parser = parse_date)]
        from: Option<Date>,

        /// End date YYYY-MM-DD (inclusive).
        #[arg(long, value_parser = parse_date)]
        to: Option<Date>,

        /// If from/to not given, last N days.
        #[arg(long, default_value_t = 90)]
        days: u32,

        /// Path to the `SQLite` database file.
        #[arg(short, long)]
        database: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.log_level_filter().as_trace())
        .without_time()
        .init();

    match args.command {
        Command::Materialize {
            from,
            to,
            days,
            database,
        } => materialize(from, to, days, &database),
    }
}

fn materialize(from: Option<Date>, to: Option<Date>, days: u32, database: &str) -> Result<()> {
    let today = OffsetDateTime::now_utc().date();
    let mut start = from.unwrap_or(today - Duration::days(i64::from(days)));
    let mut end = to.unwrap_or(today);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    info!("opening database {database}");
    let mut persistence =
        Persistence::new_with_file(database).wrap_err("failed to open the database")?;

    println!("Materializing workflow stats: {start} -> {end}");
    let total = materialize_range(&mut persistence, start, end)
        .wrap_err("failed to materialize the date range")?;
    println!("Done. Upserted rows: {total}");
    Ok(())
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}
