// ABOUTME: SQLite-backed history store using sqlx with one row per metric per day
// ABOUTME: Idempotent upserts via ON CONFLICT on the (metric, day) primary key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ensure_storable, ensure_stored_metric, HistoryStore};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};
use vitals_core::errors::{AppError, AppResult};
use vitals_core::models::{CalendarDay, MetricKind, MetricPoint};

/// Connections kept for file-backed databases
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// SQLite store
#[derive(Clone)]
pub struct SqliteHistoryStore {
    pool: SqlitePool,
}

impl SqliteHistoryStore {
    /// Connect to `database_url` (e.g. `sqlite:./data/vitals.db` or
    /// `sqlite::memory:`), creating the file and schema when missing
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the connection fails, or the
    /// schema cannot be created
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own empty database
        let max_connections = if database_url.contains(":memory:") {
            1
        } else {
            DEFAULT_MAX_CONNECTIONS
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::store_unavailable(format!("Failed to open {database_url}: {e}"))
                    .with_source(e)
            })?;

        let store = Self::from_pool(pool);
        store.migrate().await?;
        info!("SQLite history store ready at {database_url}");
        Ok(store)
    }

    /// Wrap an existing pool without running migrations
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `metric_points` table if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS metric_points (
                metric TEXT NOT NULL,
                day TEXT NOT NULL,
                value REAL NOT NULL,
                updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                PRIMARY KEY (metric, day)
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Number of days stored for `metric`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn point_count(&self, metric: MetricKind) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM metric_points WHERE metric = $1")
            .bind(metric.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("n")?)
    }
}

fn row_to_point(row: &SqliteRow) -> AppResult<MetricPoint> {
    let date: CalendarDay = row.try_get("day")?;
    let value: f64 = row.try_get("value")?;
    Ok(MetricPoint::new(date, value))
}

#[async_trait]
impl HistoryStore for SqliteHistoryStore {
    async fn read(
        &self,
        metric: MetricKind,
        from: CalendarDay,
        to: CalendarDay,
    ) -> AppResult<Vec<MetricPoint>> {
        ensure_stored_metric(metric)?;
        let rows = sqlx::query(
            r"
            SELECT day, value
            FROM metric_points
            WHERE metric = $1 AND day >= $2 AND day <= $3
            ",
        )
        .bind(metric.as_str())
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        debug!(%metric, %from, %to, count = rows.len(), "Read metric history from SQLite");
        rows.iter().map(row_to_point).collect()
    }

    async fn upsert(&self, metric: MetricKind, day: CalendarDay, value: f64) -> AppResult<()> {
        ensure_storable(metric, value)?;
        sqlx::query(
            r"
            INSERT INTO metric_points (metric, day, value, updated_at)
            VALUES ($1, $2, $3, CURRENT_TIMESTAMP)
            ON CONFLICT(metric, day) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP
            ",
        )
        .bind(metric.as_str())
        .bind(day)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn clear(&self, metric: MetricKind) -> AppResult<()> {
        ensure_stored_metric(metric)?;
        let result = sqlx::query("DELETE FROM metric_points WHERE metric = $1")
            .bind(metric.as_str())
            .execute(&self.pool)
            .await?;
        info!(%metric, removed = result.rows_affected(), "Cleared metric history");
        Ok(())
    }
}
