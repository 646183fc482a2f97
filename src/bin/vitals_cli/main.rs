// ABOUTME: Vitals CLI - record daily metrics and render rolling-window charts
// ABOUTME: Handles history edits, provider imports, chart series output, and BMR lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Record today's step count
//! vitals-cli record --metric steps --value 9500
//!
//! # Record a weigh-in for a specific day
//! vitals-cli record --metric weight --value 71.2 --date 2024-03-04
//!
//! # Import a provider export (JSON array of {"date", "value"} samples)
//! vitals-cli import water.json --metric water
//!
//! # Weekly steps chart
//! vitals-cli chart --metric steps --period week
//!
//! # Custom 14-day window in 2-day buckets, as JSON
//! vitals-cli chart --metric food_energy --span 14 --bucket 2 --json
//!
//! # Yearly BMR chart
//! vitals-cli chart --metric bmr --period year --age 34 --height-cm 178 --gender male
//!
//! # One-off BMR
//! vitals-cli bmr --weight-kg 70 --age 25 --height-cm 170 --gender male
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use vitals_charts::config::{ChartsConfig, DatabaseUrl};
use vitals_charts::logging::LoggingConfig;
use vitals_charts::store::HistoryDatabase;
use vitals_core::errors::{AppError, AppResult};
use vitals_core::models::{CalendarDay, ChartPeriod, Gender, MetricKind, Profile};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "vitals-cli",
    about = "Daily health metric charts",
    long_about = "Record daily health metrics and render weekly, monthly, or yearly bucketed charts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// History store URL override (sqlite:<path>, sqlite::memory:, memory://)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Set one day's value for a metric, replacing any previous value
    Record {
        /// Metric key (steps, distance, water, food_energy, burned_energy, weight)
        #[arg(long)]
        metric: MetricKind,

        /// Value in the metric's storage unit (distance in meters)
        #[arg(long)]
        value: f64,

        /// Day to record (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<CalendarDay>,
    },

    /// Import a JSON array of samples for one metric
    Import {
        /// Path to the JSON file
        file: PathBuf,

        /// Metric the samples belong to
        #[arg(long)]
        metric: MetricKind,
    },

    /// Delete all history for a metric
    Clear {
        /// Metric key
        #[arg(long)]
        metric: MetricKind,
    },

    /// Print a bucketed chart series
    Chart(ChartArgs),

    /// Compute basal metabolic rate for a single weight
    Bmr {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Args)]
struct ChartArgs {
    /// Metric key, including the derived `bmr`
    #[arg(long)]
    metric: MetricKind,

    /// Preset period (week, month, year)
    #[arg(long, conflicts_with_all = ["span", "bucket"])]
    period: Option<ChartPeriod>,

    /// Custom window length in days
    #[arg(long, requires = "bucket")]
    span: Option<u32>,

    /// Custom bucket width in days
    #[arg(long, requires = "span")]
    bucket: Option<u32>,

    /// Last day of the window (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<CalendarDay>,

    /// Fallback for weight-based series before the first weigh-in (kg)
    #[arg(long)]
    fallback_kg: Option<f64>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    profile: OptionalProfileArgs,
}

#[derive(Args)]
struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    age: u32,

    /// Height in centimeters
    #[arg(long)]
    height_cm: f64,

    /// Gender used by the BMR equation (male, female)
    #[arg(long)]
    gender: Gender,
}

impl ProfileArgs {
    const fn to_profile(&self) -> Profile {
        Profile {
            age: self.age,
            height_cm: self.height_cm,
            gender: self.gender,
        }
    }
}

#[derive(Args)]
struct OptionalProfileArgs {
    /// Age in years (BMR charts)
    #[arg(long, requires_all = ["height_cm", "gender"])]
    age: Option<u32>,

    /// Height in centimeters (BMR charts)
    #[arg(long, requires_all = ["age", "gender"])]
    height_cm: Option<f64>,

    /// Gender (BMR charts)
    #[arg(long, requires_all = ["age", "height_cm"])]
    gender: Option<Gender>,
}

impl OptionalProfileArgs {
    fn to_profile(&self) -> Option<Profile> {
        Some(Profile {
            age: self.age?,
            height_cm: self.height_cm?,
            gender: self.gender?,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::for_cli(log_level).init()?;

    let mut config = ChartsConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config.database_url = DatabaseUrl::parse_url(url);
    }
    info!("Vitals CLI starting: {}", config.summary());

    match cli.command {
        Command::Bmr { weight_kg, profile } => {
            commands::chart::bmr(weight_kg, &profile.to_profile())
        }
        command => {
            helpers::store::ensure_parent_dir(&config.database_url)?;
            let store = HistoryDatabase::new(&config.database_url.to_connection_string()).await?;
            info!("History store: {}", store.backend_info());
            run_store_command(command, &store, &config).await
        }
    }
}

async fn run_store_command(
    command: Command,
    store: &HistoryDatabase,
    config: &ChartsConfig,
) -> Result<()> {
    match command {
        Command::Record {
            metric,
            value,
            date,
        } => commands::history::record(store, metric, value, date).await,
        Command::Import { file, metric } => commands::history::import(store, metric, &file).await,
        Command::Clear { metric } => commands::history::clear(store, metric).await,
        Command::Chart(args) => {
            let request = commands::chart::ChartRequest {
                metric: args.metric,
                period: args.period,
                custom: args.span.zip(args.bucket),
                anchor: args.date,
                fallback_kg: args.fallback_kg.unwrap_or(config.fallback_weight_kg),
                profile: args.profile.to_profile(),
                json: args.json,
            };
            commands::chart::chart(store, config, &request).await
        }
        Command::Bmr { .. } => Err(AppError::internal(
            "bmr is computed without opening the history store",
        )),
    }
}
