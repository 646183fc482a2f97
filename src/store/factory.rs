// ABOUTME: History store factory selecting a backend from a connection URL
// ABOUTME: memory:// maps to the in-memory store, sqlite: URLs to the SQLite store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{HistoryStore, InMemoryHistoryStore, SqliteHistoryStore};
use async_trait::async_trait;
use tracing::{debug, info};
use vitals_core::errors::{AppError, AppResult};
use vitals_core::models::{CalendarDay, MetricKind, MetricPoint};

/// Supported backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    /// Process-local, lost on exit
    Memory,
    /// File or in-memory SQLite database
    SQLite,
}

/// Store instance wrapper that delegates to the selected backend
#[derive(Clone)]
pub enum HistoryDatabase {
    /// In-memory backend
    Memory(InMemoryHistoryStore),
    /// SQLite backend
    SQLite(SqliteHistoryStore),
}

impl HistoryDatabase {
    /// Open the backend named by `url`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL scheme is unsupported or the backend fails
    /// to initialize
    pub async fn new(url: &str) -> AppResult<Self> {
        debug!("Detecting history store type from URL: {url}");
        match detect_store_type(url)? {
            StoreType::Memory => {
                info!("Using in-memory history store");
                Ok(Self::Memory(InMemoryHistoryStore::new()))
            }
            StoreType::SQLite => Ok(Self::SQLite(SqliteHistoryStore::connect(url).await?)),
        }
    }

    /// Short description of the active backend for logs
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "In-memory (non-persistent)",
            Self::SQLite(_) => "SQLite",
        }
    }
}

/// Detect the backend type from a store URL
///
/// # Errors
///
/// Returns `ConfigInvalid` for unsupported schemes
pub fn detect_store_type(url: &str) -> AppResult<StoreType> {
    if url == "memory" || url.starts_with("memory://") {
        Ok(StoreType::Memory)
    } else if url.starts_with("sqlite:") {
        Ok(StoreType::SQLite)
    } else {
        Err(AppError::config(format!(
            "Unsupported history store URL: {url}. Use memory:// or sqlite:<path>"
        )))
    }
}

#[async_trait]
impl HistoryStore for HistoryDatabase {
    async fn read(
        &self,
        metric: MetricKind,
        from: CalendarDay,
        to: CalendarDay,
    ) -> AppResult<Vec<MetricPoint>> {
        match self {
            Self::Memory(store) => store.read(metric, from, to).await,
            Self::SQLite(store) => store.read(metric, from, to).await,
        }
    }

    async fn upsert(&self, metric: MetricKind, day: CalendarDay, value: f64) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.upsert(metric, day, value).await,
            Self::SQLite(store) => store.upsert(metric, day, value).await,
        }
    }

    async fn clear(&self, metric: MetricKind) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.clear(metric).await,
            Self::SQLite(store) => store.clear(metric).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_store_type() {
        assert_eq!(detect_store_type("memory://").unwrap(), StoreType::Memory);
        assert_eq!(
            detect_store_type("sqlite:./data/vitals.db").unwrap(),
            StoreType::SQLite
        );
        assert_eq!(detect_store_type("sqlite::memory:").unwrap(), StoreType::SQLite);
        assert!(detect_store_type("postgres://localhost/vitals").is_err());
    }
}
