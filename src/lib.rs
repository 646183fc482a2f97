// ABOUTME: Main library entry point for the vitals daily-metric chart engine
// ABOUTME: Rolling windows, calendar bucketing, derived BMR, and pluggable history stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitals Charts
//!
//! Chart engine for daily health metrics. Sparse per-day history (food
//! energy, burned energy, steps, distance, water, body weight) is turned into
//! fixed-length, labeled bucket series for weekly, monthly and yearly views.
//!
//! ## Architecture
//!
//! - **Store**: [`store::HistoryStore`] abstracts per-metric, day-keyed
//!   history with in-memory and SQLite backends
//! - **Charts**: window selection, bucket aggregation and the
//!   [`charts::ChartSeriesBuilder`] that ties them to a store
//! - **Intelligence**: derived metrics such as basal metabolic rate
//! - **Ingest**: collapsing provider sample batches into daily values
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use vitals_charts::charts::{ChartSeriesBuilder, SeriesQuery};
//! use vitals_charts::store::{HistoryStore, InMemoryHistoryStore};
//! use vitals_core::models::{ChartPeriod, MetricKind};
//!
//! #[tokio::main]
//! async fn main() -> vitals_core::errors::AppResult<()> {
//!     let store = InMemoryHistoryStore::new();
//!     let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap_or_default();
//!     store.upsert(MetricKind::Steps, today, 9_000.0).await?;
//!
//!     let query = SeriesQuery::for_period(MetricKind::Steps, ChartPeriod::Week, today);
//!     let buckets = ChartSeriesBuilder::new(&store).build_series(&query).await?;
//!     for bucket in &buckets {
//!         println!("{} {}", bucket.label, bucket.value);
//!     }
//!     Ok(())
//! }
//! ```

/// Window selection, aggregation, labels, and series building
pub mod charts;

/// Environment-based configuration
pub mod config;

/// Provider sample ingestion
pub mod ingest;

/// Derived metric calculations
pub mod intelligence;

/// Logging configuration and subscriber setup
pub mod logging;

/// History store trait and backends
pub mod store;

pub use vitals_core::{constants, errors, models};
