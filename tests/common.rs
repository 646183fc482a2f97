// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging, calendar helpers, seeded stores, and failing store doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `vitals_charts`

use async_trait::async_trait;
use chrono::{Duration as DayDelta, NaiveDate};
use std::env;
use std::sync::Once;
use std::time::Duration;
use tokio::time;
use tracing::Level;
use vitals_charts::store::{HistoryStore, InMemoryHistoryStore};
use vitals_core::errors::{AppError, AppResult};
use vitals_core::models::{CalendarDay, Gender, MetricKind, MetricPoint, Profile};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar day shorthand
pub fn day(year: i32, month: u32, dom: u32) -> CalendarDay {
    NaiveDate::from_ymd_opt(year, month, dom).expect("valid test date")
}

/// Sunday 2024-03-10, the anchor used across the suite
pub fn anchor() -> CalendarDay {
    day(2024, 3, 10)
}

/// `days` before `anchor()`
pub fn days_before_anchor(days: i64) -> CalendarDay {
    anchor() - DayDelta::days(days)
}

/// Points for consecutive days ending at `anchor()`, oldest first
pub fn daily_points(values: &[f64]) -> Vec<MetricPoint> {
    let start = anchor() - DayDelta::days(values.len() as i64 - 1);
    values
        .iter()
        .enumerate()
        .map(|(i, value)| MetricPoint::new(start + DayDelta::days(i as i64), *value))
        .collect()
}

/// In-memory store seeded with `(days before anchor, value)` pairs for one metric
pub async fn seeded_store(metric: MetricKind, entries: &[(i64, f64)]) -> InMemoryHistoryStore {
    init_test_logging();
    let store = InMemoryHistoryStore::new();
    for (offset, value) in entries {
        store
            .upsert(metric, days_before_anchor(*offset), *value)
            .await
            .expect("seed upsert");
    }
    store
}

/// 25-year-old, 170 cm male
pub const fn test_profile() -> Profile {
    Profile {
        age: 25,
        height_cm: 170.0,
        gender: Gender::Male,
    }
}

/// Store whose backend is down
pub struct UnavailableStore;

#[async_trait]
impl HistoryStore for UnavailableStore {
    async fn read(
        &self,
        _metric: MetricKind,
        _from: CalendarDay,
        _to: CalendarDay,
    ) -> AppResult<Vec<MetricPoint>> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn upsert(&self, _metric: MetricKind, _day: CalendarDay, _value: f64) -> AppResult<()> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn clear(&self, _metric: MetricKind) -> AppResult<()> {
        Err(AppError::store_unavailable("connection refused"))
    }
}

/// Store that answers reads only after `delay`
pub struct SlowStore {
    pub inner: InMemoryHistoryStore,
    pub delay: Duration,
}

#[async_trait]
impl HistoryStore for SlowStore {
    async fn read(
        &self,
        metric: MetricKind,
        from: CalendarDay,
        to: CalendarDay,
    ) -> AppResult<Vec<MetricPoint>> {
        time::sleep(self.delay).await;
        self.inner.read(metric, from, to).await
    }

    async fn upsert(&self, metric: MetricKind, day: CalendarDay, value: f64) -> AppResult<()> {
        self.inner.upsert(metric, day, value).await
    }

    async fn clear(&self, metric: MetricKind) -> AppResult<()> {
        self.inner.clear(metric).await
    }
}
