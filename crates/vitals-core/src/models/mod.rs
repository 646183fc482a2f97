// ABOUTME: Domain models shared by the chart engine, stores, and CLI
// ABOUTME: Metric kinds and points, chart windows and buckets, and the BMR profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Metric kinds, daily points, and aggregation policies
pub mod metric;

/// Chart windows, periods, label formats, and buckets
pub mod chart;

/// Static profile attributes used by derived metrics
pub mod profile;

pub use chart::{Bucket, ChartPeriod, LabelFormat, TimeWindow};
pub use metric::{AggregationPolicy, CalendarDay, MetricKind, MetricPoint};
pub use profile::{Gender, Profile};
