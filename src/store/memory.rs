// ABOUTME: In-memory history store backed by ordered per-metric day maps
// ABOUTME: Used by tests, the CLI's memory:// mode, and as a reference backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ensure_storable, ensure_stored_metric, HistoryStore};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use vitals_core::errors::AppResult;
use vitals_core::models::{CalendarDay, MetricKind, MetricPoint};

type MetricHistory = HashMap<MetricKind, BTreeMap<CalendarDay, f64>>;

/// In-memory store
///
/// Clones share the same underlying map. The `RwLock` serializes upserts racing
/// each other (a manual edit against a provider sync).
#[derive(Clone, Default)]
pub struct InMemoryHistoryStore {
    history: Arc<RwLock<MetricHistory>>,
}

impl InMemoryHistoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of days stored for `metric`
    pub async fn point_count(&self, metric: MetricKind) -> usize {
        self.history
            .read()
            .await
            .get(&metric)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn read(
        &self,
        metric: MetricKind,
        from: CalendarDay,
        to: CalendarDay,
    ) -> AppResult<Vec<MetricPoint>> {
        ensure_stored_metric(metric)?;
        if from > to {
            return Ok(Vec::new());
        }
        let history = self.history.read().await;
        let points = history.get(&metric).map_or_else(Vec::new, |days| {
            days.range(from..=to)
                .map(|(date, value)| MetricPoint::new(*date, *value))
                .collect()
        });
        drop(history);
        debug!(%metric, %from, %to, count = points.len(), "Read metric history from memory");
        Ok(points)
    }

    async fn upsert(&self, metric: MetricKind, day: CalendarDay, value: f64) -> AppResult<()> {
        ensure_storable(metric, value)?;
        self.history
            .write()
            .await
            .entry(metric)
            .or_default()
            .insert(day, value);
        Ok(())
    }

    async fn clear(&self, metric: MetricKind) -> AppResult<()> {
        ensure_stored_metric(metric)?;
        self.history.write().await.remove(&metric);
        debug!(%metric, "Cleared metric history from memory");
        Ok(())
    }
}
