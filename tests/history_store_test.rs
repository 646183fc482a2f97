// ABOUTME: Integration tests for the history store backends and factory
// ABOUTME: Upsert overwrite, inclusive range reads, clear, persistence, and derived metric rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{day, init_test_logging};
use tempfile::TempDir;
use vitals_charts::store::{HistoryDatabase, HistoryStore, InMemoryHistoryStore, SqliteHistoryStore};
use vitals_core::errors::ErrorCode;
use vitals_core::models::{MetricKind, MetricPoint};

fn sorted(mut points: Vec<MetricPoint>) -> Vec<MetricPoint> {
    points.sort_by_key(|p| p.date);
    points
}

/// Behavior every backend must share
async fn exercise_store<S: HistoryStore>(store: &S) -> Result<()> {
    store.upsert(MetricKind::Steps, day(2024, 3, 4), 5000.0).await?;
    store.upsert(MetricKind::Steps, day(2024, 3, 4), 6500.0).await?;
    store.upsert(MetricKind::Steps, day(2024, 3, 6), 7000.0).await?;
    store.upsert(MetricKind::Steps, day(2024, 3, 9), 9000.0).await?;
    store.upsert(MetricKind::Water, day(2024, 3, 6), 1800.0).await?;

    // Overwrite keeps one point per day; bounds are inclusive
    let points = sorted(
        store
            .read(MetricKind::Steps, day(2024, 3, 4), day(2024, 3, 6))
            .await?,
    );
    assert_eq!(
        points,
        vec![
            MetricPoint::new(day(2024, 3, 4), 6500.0),
            MetricPoint::new(day(2024, 3, 6), 7000.0),
        ]
    );

    // Metrics are isolated
    let water = store
        .read(MetricKind::Water, day(2024, 3, 1), day(2024, 3, 31))
        .await?;
    assert_eq!(water, vec![MetricPoint::new(day(2024, 3, 6), 1800.0)]);

    // Reversed range is empty rather than an error
    let none = store
        .read(MetricKind::Steps, day(2024, 3, 9), day(2024, 3, 4))
        .await?;
    assert!(none.is_empty());

    store.clear(MetricKind::Steps).await?;
    let cleared = store
        .read(MetricKind::Steps, day(2024, 1, 1), day(2024, 12, 31))
        .await?;
    assert!(cleared.is_empty());
    let water = store
        .read(MetricKind::Water, day(2024, 1, 1), day(2024, 12, 31))
        .await?;
    assert_eq!(water.len(), 1);

    let err = store
        .upsert(MetricKind::BasalMetabolicRate, day(2024, 3, 4), 1600.0)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = store
        .upsert(MetricKind::Steps, day(2024, 3, 4), f64::NAN)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    Ok(())
}

#[tokio::test]
async fn test_in_memory_store_contract() -> Result<()> {
    init_test_logging();
    let store = InMemoryHistoryStore::new();
    exercise_store(&store).await?;
    assert_eq!(store.point_count(MetricKind::Water).await, 1);
    Ok(())
}

#[tokio::test]
async fn test_sqlite_memory_store_contract() -> Result<()> {
    init_test_logging();
    let store = SqliteHistoryStore::connect("sqlite::memory:").await?;
    exercise_store(&store).await?;
    assert_eq!(store.point_count(MetricKind::Water).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_sqlite_file_persists_across_connections() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.path().join("history.db").display());

    {
        let store = SqliteHistoryStore::connect(&url).await?;
        store.upsert(MetricKind::BodyWeight, day(2024, 3, 1), 71.4).await?;
        store.upsert(MetricKind::BodyWeight, day(2024, 3, 8), 70.9).await?;
    }

    let reopened = SqliteHistoryStore::connect(&url).await?;
    let points = sorted(
        reopened
            .read(MetricKind::BodyWeight, day(2024, 3, 1), day(2024, 3, 10))
            .await?,
    );
    assert_eq!(points.len(), 2);
    assert!((points[1].value - 70.9).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_factory_selects_backend_from_url() -> Result<()> {
    init_test_logging();
    let memory = HistoryDatabase::new("memory://").await?;
    assert!(matches!(memory, HistoryDatabase::Memory(_)));
    exercise_store(&memory).await?;

    let sqlite = HistoryDatabase::new("sqlite::memory:").await?;
    assert!(matches!(sqlite, HistoryDatabase::SQLite(_)));
    assert_eq!(sqlite.backend_info(), "SQLite");
    exercise_store(&sqlite).await?;
    Ok(())
}

#[tokio::test]
async fn test_factory_rejects_unknown_scheme() {
    let err = HistoryDatabase::new("redis://localhost").await.err().unwrap();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[tokio::test]
async fn test_concurrent_upserts_leave_one_point_per_day() -> Result<()> {
    let store = InMemoryHistoryStore::new();
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .upsert(MetricKind::Steps, day(2024, 3, 4), f64::from(i))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }
    assert_eq!(store.point_count(MetricKind::Steps).await, 1);
    Ok(())
}
