// ABOUTME: History editing commands for vitals-cli
// ABOUTME: Record a single day, import a provider sample file, or clear a metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use tokio::fs;
use tracing::info;
use vitals_charts::charts::today;
use vitals_charts::ingest::{ingest_samples, Sample};
use vitals_charts::store::{HistoryDatabase, HistoryStore};
use vitals_core::errors::{AppError, AppResult};
use vitals_core::models::{CalendarDay, MetricKind};

use crate::helpers::display::display_ingest_report;

type Result<T> = AppResult<T>;

/// Set one day's value, defaulting to today
pub async fn record(
    store: &HistoryDatabase,
    metric: MetricKind,
    value: f64,
    date: Option<CalendarDay>,
) -> Result<()> {
    if value < 0.0 {
        return Err(AppError::out_of_range(format!(
            "{metric} values cannot be negative, got {value}"
        )));
    }
    let day = date.unwrap_or_else(today);
    store.upsert(metric, day, value).await?;
    println!("Recorded {value} {} of {metric} on {day}", metric.storage_unit());
    Ok(())
}

/// Import a JSON array of `{"date": "YYYY-MM-DD", "value": n}` samples
pub async fn import(store: &HistoryDatabase, metric: MetricKind, file: &Path) -> Result<()> {
    info!("Importing {metric} samples from {}", file.display());
    let contents = fs::read_to_string(file).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", file.display())).with_source(e)
    })?;
    let samples: Vec<Sample> = serde_json::from_str(&contents)?;

    let report = ingest_samples(store, metric, &samples).await?;
    display_ingest_report(metric, &report);
    Ok(())
}

/// Delete every stored point for a metric
pub async fn clear(store: &HistoryDatabase, metric: MetricKind) -> Result<()> {
    store.clear(metric).await?;
    println!("Cleared all {metric} history");
    Ok(())
}
