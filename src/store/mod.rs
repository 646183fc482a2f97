// ABOUTME: Per-metric day-keyed history store abstraction with pluggable backends
// ABOUTME: Read a date range, upsert one day, or clear a metric; in-memory and SQLite backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Backend selection from a store URL
pub mod factory;
/// In-memory store implementation
pub mod memory;
/// SQLite store implementation
pub mod sqlite;

use async_trait::async_trait;
use vitals_core::errors::{AppError, AppResult};
use vitals_core::models::{CalendarDay, MetricKind, MetricPoint};

pub use factory::HistoryDatabase;
pub use memory::InMemoryHistoryStore;
pub use sqlite::SqliteHistoryStore;

/// Durable day-keyed metric history
///
/// Implementations hold at most one point per metric per day and are
/// responsible for serializing concurrent upserts. The chart engine only ever
/// reads through this trait.
///
/// # Examples
///
/// ```rust,no_run
/// use chrono::NaiveDate;
/// use vitals_charts::store::{HistoryStore, InMemoryHistoryStore};
/// use vitals_core::models::MetricKind;
/// # async fn example() -> vitals_core::errors::AppResult<()> {
/// let store = InMemoryHistoryStore::new();
/// let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap_or_default();
///
/// store.upsert(MetricKind::Steps, day, 8_500.0).await?;
/// store.upsert(MetricKind::Steps, day, 9_100.0).await?; // overwrites
///
/// let points = store.read(MetricKind::Steps, day, day).await?;
/// assert_eq!(points.len(), 1);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Points for `metric` dated within `[from, to]` inclusive, in no particular order
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable`/`DatabaseError` if the backend cannot answer,
    /// or `InvalidInput` for derived metrics
    async fn read(
        &self,
        metric: MetricKind,
        from: CalendarDay,
        to: CalendarDay,
    ) -> AppResult<Vec<MetricPoint>>;

    /// Set the value for one day, overwriting any existing value
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for derived metrics or non-finite values, or a
    /// backend error if the write fails
    async fn upsert(&self, metric: MetricKind, day: CalendarDay, value: f64) -> AppResult<()>;

    /// Remove every point for `metric`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for derived metrics, or a backend error if the
    /// delete fails
    async fn clear(&self, metric: MetricKind) -> AppResult<()>;
}

/// Reject metrics that have no stored history
///
/// # Errors
///
/// Returns `InvalidInput` if `metric` is derived
pub fn ensure_stored_metric(metric: MetricKind) -> AppResult<()> {
    if metric.is_derived() {
        return Err(AppError::invalid_input(format!(
            "{metric} is derived and has no stored history"
        )));
    }
    Ok(())
}

/// Validate an upsert payload
///
/// # Errors
///
/// Returns `InvalidInput` for derived metrics or non-finite values
pub fn ensure_storable(metric: MetricKind, value: f64) -> AppResult<()> {
    ensure_stored_metric(metric)?;
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "Cannot store non-finite value {value} for {metric}"
        )));
    }
    Ok(())
}
